//! Error type for `farmflow-store-sqlite`.

use std::path::PathBuf;

use farmflow_core::{Classify, FailureKind};
use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The caller's input was rejected before the store was touched.
  #[error(transparent)]
  Core(#[from] farmflow_core::Error),

  #[error("store at {path:?} is unavailable: {source}")]
  Unavailable {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("could not open store at {path:?}: {source}")]
  Open {
    path:   PathBuf,
    #[source]
    source: tokio_rusqlite::Error,
  },

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A result cell held a storage class the caller cannot use: a blob, or a
  /// non-text period in a report row.
  #[error("unexpected value in result column {0}")]
  UnexpectedValue(usize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Classify for Error {
  fn kind(&self) -> FailureKind {
    match self {
      Self::Core(e) => e.kind(),
      Self::Unavailable { .. } | Self::Open { .. } => FailureKind::Unavailable,
      Self::Database(e) => classify_database(e),
      Self::UnexpectedValue(_) => FailureKind::Statement,
    }
  }
}

fn classify_database(e: &tokio_rusqlite::Error) -> FailureKind {
  let code = match e {
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(err, _)) => err.code,
    tokio_rusqlite::Error::ConnectionClosed => return FailureKind::Unavailable,
    _ => return FailureKind::Statement,
  };
  match code {
    ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => FailureKind::Contention,
    ErrorCode::CannotOpen
    | ErrorCode::PermissionDenied
    | ErrorCode::ReadOnly
    | ErrorCode::DiskFull
    | ErrorCode::SystemIoFailure
    | ErrorCode::NotADatabase => FailureKind::Unavailable,
    _ => FailureKind::Statement,
  }
}
