//! `farmflow` binary.
//!
//! Reads `farmflow.toml` (or the path given with `--config`), points a SQLite
//! store at the configured file, and either serves the JSON API or runs one
//! store operation and prints the result as JSON.
//!
//! ```text
//! farmflow serve
//! farmflow list Crop --column Name --contains Maize
//! farmflow query "SELECT Name FROM Crop WHERE GrowthDuration > ?1" 150
//! farmflow report --period month
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use farmflow_api::records::{to_json, to_record};
use farmflow_core::{
  Column, Table, Value,
  report::ReportPeriod,
  store::{FarmStore, SearchFilter},
};
use farmflow_server::{ServerConfig, app, load_config};
use farmflow_store_sqlite::SqliteStore;
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "FarmFlow farm record keeper")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "farmflow.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the JSON API over HTTP.
  Serve,
  /// Create and seed the store if it does not exist yet.
  Init,
  /// Print every row of a table, optionally filtered.
  List {
    table:    Table,
    /// Column to search; requires `--contains`.
    #[arg(long, requires = "contains")]
    column:   Option<Column>,
    #[arg(long, requires = "column")]
    contains: Option<String>,
  },
  /// Run a read-only statement with positional parameters.
  Query {
    sql:    String,
    /// Parameters, parsed as JSON scalars where possible and as text
    /// otherwise.
    params: Vec<String>,
  },
  /// Sum income and expenses per period.
  Report {
    #[arg(long, value_enum, default_value_t = Period::Date)]
    period: Period,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum Period {
  Date,
  Month,
}

impl From<Period> for ReportPeriod {
  fn from(p: Period) -> Self {
    match p {
      Period::Date => ReportPeriod::Date,
      Period::Month => ReportPeriod::Month,
    }
  }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let server_cfg = load_config(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;
  let store_path = server_cfg.resolved_store_path();
  let store = SqliteStore::new(&store_path);

  match cli.command {
    Command::Serve => serve(&server_cfg, store).await?,
    Command::Init => {
      let created = store
        .ensure_store()
        .await
        .with_context(|| format!("failed to initialise store at {store_path:?}"))?;
      print_json(&serde_json::json!({ "path": store_path, "created": created }))?;
    }
    Command::List { table, column, contains } => {
      let filter = column.zip(contains).map(|(c, t)| SearchFilter::new(c, t));
      let rows = store
        .list_records(table, filter)
        .await
        .with_context(|| format!("failed to list {table}"))?;
      let records: Vec<_> = rows.into_iter().map(|r| to_record(table, r)).collect();
      print_json(&records)?;
    }
    Command::Query { sql, params } => {
      let params = params.into_iter().map(parse_param).collect();
      let rows = store.fetch_data(&sql, params).await.context("query failed")?;
      let rows: Vec<Vec<_>> = rows
        .into_iter()
        .map(|r| r.into_iter().map(to_json).collect())
        .collect();
      print_json(&rows)?;
    }
    Command::Report { period } => {
      let report = store
        .financial_report(period.into())
        .await
        .context("failed to build financial report")?;
      print_json(&report)?;
    }
  }

  Ok(())
}

async fn serve(cfg: &ServerConfig, store: SqliteStore) -> anyhow::Result<()> {
  let app = app(Arc::new(store));
  let address = cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;
  Ok(())
}

/// `42` and `2.5` bind as numbers, `null` as NULL; anything else is text.
fn parse_param(raw: String) -> Value {
  serde_json::from_str::<Value>(&raw).unwrap_or(Value::Text(raw))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
