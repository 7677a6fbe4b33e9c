//! Handler for `GET /tables`: the schema as data, so clients can build forms
//! and positional inserts without hard-coding column order.

use axum::Json;
use farmflow_core::{
  Column, Table,
  schema::{ColumnDef, TableKind},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TableDescriptor {
  pub name:    Table,
  pub kind:    TableKind,
  pub key:     Column,
  /// Declared order; an insert supplies every entry after the first.
  pub columns: &'static [ColumnDef],
}

impl From<Table> for TableDescriptor {
  fn from(table: Table) -> Self {
    TableDescriptor {
      name:    table,
      kind:    table.kind(),
      key:     table.key(),
      columns: table.columns(),
    }
  }
}

/// `GET /tables`
pub async fn list() -> Json<Vec<TableDescriptor>> {
  Json(Table::all().map(TableDescriptor::from).collect())
}
