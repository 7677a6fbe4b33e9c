//! Handlers for `/tables/{table}/records` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/tables/{table}/records` | Optional `?column=<col>&contains=<text>` |
//! | `POST`   | `/tables/{table}/records` | Body: `{"values":[...]}`; returns 201 + `{"id":n}` |
//! | `PATCH`  | `/tables/{table}/records` | Body: `{"set":{...},"where":{...}}` |
//! | `DELETE` | `/tables/{table}/records` | Body: `{"where":{...}}` |
//! | `PUT`    | `/tables/{table}/records/{id}` | Body: `{"set":{...}}`; 404 if no such row |
//! | `DELETE` | `/tables/{table}/records/{id}` | 404 if no such row |
//!
//! Unknown table or column names fail extraction and never reach the store.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use farmflow_core::{
  Column, ColumnMap, Row, Table, Value,
  store::{FarmStore, SearchFilter},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, json};

use crate::error::ApiError;

/// One row as a JSON object keyed by column name.
pub type Record = Map<String, serde_json::Value>;

pub fn to_json(value: Value) -> serde_json::Value {
  match value {
    Value::Null => serde_json::Value::Null,
    Value::Integer(i) => i.into(),
    Value::Real(r) => serde_json::Number::from_f64(r)
      .map(serde_json::Value::Number)
      .unwrap_or(serde_json::Value::Null),
    Value::Text(s) => s.into(),
  }
}

/// Pair each cell with its column. Extra cells (never produced by a table
/// scan) are dropped.
pub fn to_record(table: Table, row: Row) -> Record {
  table
    .columns()
    .iter()
    .zip(row)
    .map(|(def, v)| (def.column.name().to_owned(), to_json(v)))
    .collect()
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub column:   Option<Column>,
  pub contains: Option<String>,
}

/// `GET /tables/{table}/records[?column=<col>&contains=<text>]`
pub async fn list<S: FarmStore>(
  State(store): State<Arc<S>>,
  Path(table): Path<Table>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Record>>, ApiError> {
  let filter = match (params.column, params.contains) {
    (Some(column), Some(text)) => Some(SearchFilter::new(column, text)),
    (None, None) => None,
    _ => {
      return Err(ApiError::BadRequest(
        "`column` and `contains` must be given together".into(),
      ));
    }
  };

  let rows = store
    .list_records(table, filter)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(rows.into_iter().map(|r| to_record(table, r)).collect()))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  /// Every column except the key, in declared order.
  pub values: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct Created {
  pub id: i64,
}

/// `POST /tables/{table}/records`, body: `{"values":[...]}`
pub async fn create<S: FarmStore>(
  State(store): State<Arc<S>>,
  Path(table): Path<Table>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError> {
  let id = store
    .add_record(table, body.values)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(Created { id })))
}

// ─── Update ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateBody {
  pub set:       ColumnMap,
  #[serde(rename = "where")]
  pub condition: ColumnMap,
}

/// `PATCH /tables/{table}/records`, body: `{"set":{...},"where":{...}}`
pub async fn update<S: FarmStore>(
  State(store): State<Arc<S>>,
  Path(table): Path<Table>,
  Json(body): Json<UpdateBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
  let updated = store
    .update_record(table, body.set, body.condition)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(json!({ "updated": updated })))
}

#[derive(Debug, Deserialize)]
pub struct SetBody {
  pub set: ColumnMap,
}

/// `PUT /tables/{table}/records/{id}`, body: `{"set":{...}}`
pub async fn update_one<S: FarmStore>(
  State(store): State<Arc<S>>,
  Path((table, id)): Path<(Table, i64)>,
  Json(body): Json<SetBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
  let updated = store
    .update_record(table, body.set, ColumnMap::key(table, id))
    .await
    .map_err(ApiError::store)?;
  if updated == 0 {
    return Err(ApiError::NotFound(format!("{table} {id} not found")));
  }
  Ok(Json(json!({ "updated": updated })))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DeleteBody {
  #[serde(rename = "where")]
  pub condition: ColumnMap,
}

/// `DELETE /tables/{table}/records`, body: `{"where":{...}}`
pub async fn delete<S: FarmStore>(
  State(store): State<Arc<S>>,
  Path(table): Path<Table>,
  Json(body): Json<DeleteBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
  let deleted = store
    .delete_record(table, body.condition)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(json!({ "deleted": deleted })))
}

/// `DELETE /tables/{table}/records/{id}`
pub async fn delete_one<S: FarmStore>(
  State(store): State<Arc<S>>,
  Path((table, id)): Path<(Table, i64)>,
) -> Result<Json<serde_json::Value>, ApiError> {
  let deleted = store
    .delete_record(table, ColumnMap::key(table, id))
    .await
    .map_err(ApiError::store)?;
  if deleted == 0 {
    return Err(ApiError::NotFound(format!("{table} {id} not found")));
  }
  Ok(Json(json!({ "deleted": deleted })))
}
