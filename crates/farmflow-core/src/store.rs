//! The `FarmStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `farmflow-store-sqlite`).
//! Higher layers (`farmflow-api`, the `farmflow` binary) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{
  column_map::ColumnMap,
  error::Classify,
  record::NewRecord,
  report::{FinancialSummary, ReportPeriod},
  schema::{Column, Table},
  value::{Row, Value},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Free-text "contains" filter on one column of a table scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
  pub column:   Column,
  pub contains: String,
}

impl SearchFilter {
  pub fn new(column: Column, contains: impl Into<String>) -> Self {
    Self { column, contains: contains.into() }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a farm record store backend.
///
/// Every operation is its own atomic unit: it either takes full effect or
/// none. Nothing cascades across tables; declared references are never
/// enforced, so deleting a catalog row leaves referencing rows in place.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait FarmStore: Send + Sync {
  type Error: std::error::Error + Classify + Send + Sync + 'static;

  /// Create and seed the store if it does not exist yet. Returns `true` if
  /// this call created it.
  fn ensure_store(&self) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Insert one row. `values` supplies every column except the surrogate key,
  /// in declared order. Returns the generated key.
  fn add_record(
    &self,
    table: Table,
    values: Vec<Value>,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Set every column in `set_values` on every row matching `condition`.
  /// Returns the number of rows changed.
  fn update_record(
    &self,
    table: Table,
    set_values: ColumnMap,
    condition: ColumnMap,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Delete every row matching `condition`. Returns the number removed.
  fn delete_record(
    &self,
    table: Table,
    condition: ColumnMap,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Run a read-only statement with positional parameters and materialise
  /// every result row. The caller knows the column layout.
  fn fetch_data<'a>(
    &'a self,
    query: &'a str,
    params: Vec<Value>,
  ) -> impl Future<Output = Result<Vec<Row>, Self::Error>> + Send + 'a;

  /// Scan a whole table, optionally keeping only rows whose `filter.column`
  /// contains `filter.contains`. Rows follow [`Table::columns`] order.
  fn list_records(
    &self,
    table: Table,
    filter: Option<SearchFilter>,
  ) -> impl Future<Output = Result<Vec<Row>, Self::Error>> + Send + '_;

  /// Sum income and expenses per period.
  fn financial_report(
    &self,
    period: ReportPeriod,
  ) -> impl Future<Output = Result<Vec<FinancialSummary>, Self::Error>> + Send + '_;

  /// Insert a typed row.
  fn insert(
    &self,
    record: NewRecord,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_ {
    let (table, values) = record.into_parts();
    self.add_record(table, values)
  }
}
