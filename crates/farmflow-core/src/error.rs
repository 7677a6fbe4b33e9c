//! Error types for `farmflow-core`.
//!
//! Everything raised here is a precondition violation: the caller asked for
//! something the schema cannot express, and the store was never touched.

use thiserror::Error;

use crate::schema::{Column, Table};

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown table: {0:?}")]
  UnknownTable(String),

  #[error("unknown column: {0:?}")]
  UnknownColumn(String),

  #[error("{table} takes {expected} values, got {actual}")]
  ColumnCount {
    table:    Table,
    expected: usize,
    actual:   usize,
  },

  #[error("column {column} does not belong to {table}")]
  ForeignColumn { table: Table, column: Column },

  #[error("refusing to match every row of {0}: condition is empty")]
  EmptyCondition(Table),

  #[error("nothing to update in {0}: set map is empty")]
  EmptyAssignment(Table),

  /// Surrogate keys never change once assigned.
  #[error("{column} is the surrogate key of {table} and cannot be updated")]
  ImmutableKey { table: Table, column: Column },

  #[error("statement is not read-only: {0:?}")]
  NotReadOnly(String),

  /// A query must hold exactly one statement; the rest would be ignored.
  #[error("expected exactly one statement: {0:?}")]
  NotSingleStatement(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ─── Classification ──────────────────────────────────────────────────────────

/// Coarse failure category shared by every store backend, so outer layers
/// can react without knowing the concrete error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
  /// The backing file could not be probed, created, or opened.
  Unavailable,
  /// Malformed SQL, a type mismatch, or a constraint violation.
  Statement,
  /// The caller's input was rejected before any statement ran.
  Precondition,
  /// Another writer holds the store's lock.
  Contention,
}

pub trait Classify {
  fn kind(&self) -> FailureKind;
}

impl Classify for Error {
  fn kind(&self) -> FailureKind { FailureKind::Precondition }
}
