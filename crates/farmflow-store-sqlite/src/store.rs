//! [`SqliteStore`]: the SQLite implementation of [`FarmStore`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use farmflow_core::{
  ColumnMap, Row, Table, Value,
  report::{FinancialSummary, ReportPeriod},
  store::{FarmStore, SearchFilter},
};
use rusqlite::{OpenFlags, types::Value as SqlValue};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  encode::{RawRow, encode_values},
  schema::{SCHEMA, SEED},
  sql,
};

type CoreError = farmflow_core::Error;

/// Rows of an accepted query, or the error that refuses it.
type Checked = std::result::Result<Vec<RawRow>, fn(String) -> CoreError>;

const READ_WRITE: OpenFlags = OpenFlags::SQLITE_OPEN_READ_WRITE
  .union(OpenFlags::SQLITE_OPEN_CREATE)
  .union(OpenFlags::SQLITE_OPEN_NO_MUTEX);

/// No `SQLITE_OPEN_URI`: a URI in `ATTACH` cannot ask for a looser mode.
const READ_ONLY: OpenFlags =
  OpenFlags::SQLITE_OPEN_READ_ONLY.union(OpenFlags::SQLITE_OPEN_NO_MUTEX);

// ─── Store ───────────────────────────────────────────────────────────────────

/// A farm record store backed by a single SQLite file.
///
/// Holds no connection: each operation opens one, uses it for a single
/// statement, and closes it before returning, whether or not the statement
/// succeeded. The file and its seed data are created on first use.
///
/// Cloning is cheap; clones share the creation lock.
#[derive(Clone)]
pub struct SqliteStore {
  path: Arc<PathBuf>,
  /// Serialises first-use creation within this process.
  init: Arc<Mutex<()>>,
}

impl SqliteStore {
  /// Point a store at `path`. Nothing is touched until the first operation.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: Arc::new(path.into()), init: Arc::new(Mutex::new(())) }
  }

  pub fn path(&self) -> &Path { &self.path }

  async fn exists(&self) -> Result<bool> {
    tokio::fs::try_exists(self.path.as_path())
      .await
      .map_err(|source| self.unavailable(source))
  }

  fn unavailable(&self, source: std::io::Error) -> Error {
    Error::Unavailable { path: self.path.to_path_buf(), source }
  }

  /// Create the store file; `false` if something already
  /// occupies the path. Only a file claimed here may be removed again.
  async fn claim(&self) -> Result<bool> {
    let claimed = tokio::fs::OpenOptions::new()
      .write(true)
      .create_new(true)
      .open(self.path.as_path())
      .await;
    match claimed {
      Ok(_) => Ok(true),
      Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
      Err(e) => Err(self.unavailable(e)),
    }
  }

  async fn connect(&self, flags: OpenFlags) -> Result<tokio_rusqlite::Connection> {
    tokio_rusqlite::Connection::open_with_flags(self.path.as_path(), flags)
      .await
      .map_err(|source| Error::Open { path: self.path.to_path_buf(), source })
  }

  /// Run `f` on a fresh connection opened with `flags`, creating the store
  /// first if needed.
  ///
  /// The connection is closed on every path out of this function.
  async fn with_connection<F, R>(&self, flags: OpenFlags, f: F) -> Result<R>
  where
    F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R> + Send + 'static,
    R: Send + 'static,
  {
    self.ensure_store().await?;
    let conn = self.connect(flags).await?;
    let outcome = conn.call(f).await;
    release(conn).await;
    Ok(outcome?)
  }

  /// Run exactly one read-only statement on a read-only connection and
  /// collect every row.
  ///
  /// The connection cannot write or create files, so `ATTACH` of a missing
  /// database fails instead of leaving an empty file behind.
  async fn query_rows(&self, query: String, params: Vec<SqlValue>) -> Result<Vec<Row>> {
    let statement = query.clone();
    let raws = self
      .with_connection(READ_ONLY, move |conn| -> tokio_rusqlite::Result<Checked> {
        let mut batch = rusqlite::Batch::new(conn, &statement);
        let Some(mut stmt) = batch.next()? else {
          return Ok(Err(CoreError::NotSingleStatement));
        };
        if batch.next()?.is_some() {
          return Ok(Err(CoreError::NotSingleStatement));
        }
        if !stmt.readonly() {
          return Ok(Err(CoreError::NotReadOnly));
        }

        let width = stmt.column_count();
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), |row| {
            (0..width)
              .map(|i| row.get::<_, SqlValue>(i))
              .collect::<rusqlite::Result<Vec<_>>>()
              .map(RawRow)
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Ok(rows))
      })
      .await?;

    let raws = raws.map_err(|refuse| {
      debug!(%query, "refusing statement");
      refuse(query)
    })?;
    raws.into_iter().map(RawRow::into_row).collect()
  }

  /// Run one mutating statement; returns the number of rows it changed.
  async fn execute(&self, statement: String, params: Vec<SqlValue>) -> Result<usize> {
    Ok(
      self
        .with_connection(READ_WRITE, move |conn| {
          Ok(conn.execute(&statement, rusqlite::params_from_iter(params))?)
        })
        .await?,
    )
  }
}

async fn release(conn: tokio_rusqlite::Connection) {
  if let Err(e) = conn.close().await {
    warn!(error = %e, "failed to close store connection");
  }
}

// ─── FarmStore impl ──────────────────────────────────────────────────────────

impl FarmStore for SqliteStore {
  type Error = Error;

  async fn ensure_store(&self) -> Result<bool> {
    let _guard = self.init.lock().await;
    if self.exists().await? || !self.claim().await? {
      return Ok(false);
    }

    info!(path = %self.path.display(), "creating farm store");
    let outcome = match self.connect(READ_WRITE).await {
      Ok(conn) => {
        let outcome = conn
          .call(|conn| {
            let tx = conn.transaction()?;
            tx.execute_batch(SCHEMA)?;
            tx.execute_batch(SEED)?;
            tx.commit()?;
            Ok(())
          })
          .await
          .map_err(Error::from);
        release(conn).await;
        outcome
      }
      Err(e) => Err(e),
    };

    if let Err(e) = outcome {
      // The file was claimed by this call; leave nothing half-built behind,
      // or the next call would take it as an existing store.
      if let Err(rm) = tokio::fs::remove_file(self.path.as_path()).await {
        warn!(error = %rm, "failed to remove partially created store");
      }
      return Err(e);
    }
    Ok(true)
  }

  async fn add_record(&self, table: Table, values: Vec<Value>) -> Result<i64> {
    let expected = table.data_columns().len();
    if values.len() != expected {
      return Err(
        CoreError::ColumnCount { table, expected, actual: values.len() }.into(),
      );
    }

    let statement = sql::insert(table);
    let params = encode_values(values);
    debug!(%table, "add_record");

    let id = self
      .with_connection(READ_WRITE, move |conn| {
        conn.execute(&statement, rusqlite::params_from_iter(params))?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }

  async fn update_record(
    &self,
    table:      Table,
    set_values: ColumnMap,
    condition:  ColumnMap,
  ) -> Result<usize> {
    set_values.check_assignment(table)?;
    condition.check_condition(table)?;

    let statement = sql::update(table, &set_values, &condition);
    let params = encode_values(set_values.into_values().chain(condition.into_values()));

    let changed = self.execute(statement, params).await?;
    debug!(%table, changed, "update_record");
    Ok(changed)
  }

  async fn delete_record(&self, table: Table, condition: ColumnMap) -> Result<usize> {
    condition.check_condition(table)?;

    let statement = sql::delete(table, &condition);
    let params = encode_values(condition.into_values());

    let removed = self.execute(statement, params).await?;
    debug!(%table, removed, "delete_record");
    Ok(removed)
  }

  async fn fetch_data(&self, query: &str, params: Vec<Value>) -> Result<Vec<Row>> {
    self.query_rows(query.to_owned(), encode_values(params)).await
  }

  async fn list_records(
    &self,
    table:  Table,
    filter: Option<SearchFilter>,
  ) -> Result<Vec<Row>> {
    let (column, params) = match filter {
      Some(f) => {
        if !table.has_column(f.column) {
          return Err(CoreError::ForeignColumn { table, column: f.column }.into());
        }
        (Some(f.column), vec![SqlValue::Text(sql::contains_pattern(&f.contains))])
      }
      None => (None, vec![]),
    };

    self.query_rows(sql::select_all(table, column), params).await
  }

  async fn financial_report(&self, period: ReportPeriod) -> Result<Vec<FinancialSummary>> {
    let rows = self
      .query_rows(sql::financial_report(period), vec![])
      .await?;

    rows
      .into_iter()
      .map(|row| -> Result<FinancialSummary> {
        let cell = |i: usize| row.get(i).ok_or(Error::UnexpectedValue(i));
        Ok(FinancialSummary {
          period:         cell(0)?
            .as_str()
            .ok_or(Error::UnexpectedValue(0))?
            .to_owned(),
          total_income:   cell(1)?.as_f64().ok_or(Error::UnexpectedValue(1))?,
          total_expenses: cell(2)?.as_f64().ok_or(Error::UnexpectedValue(2))?,
        })
      })
      .collect()
  }
}
