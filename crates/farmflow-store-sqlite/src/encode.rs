//! Conversion between [`farmflow_core::Value`] and SQLite's storage classes.

use farmflow_core::Value;
use rusqlite::types::Value as SqlValue;

use crate::{Error, Result};

pub fn encode_value(v: Value) -> SqlValue {
  match v {
    Value::Null => SqlValue::Null,
    Value::Integer(i) => SqlValue::Integer(i),
    Value::Real(r) => SqlValue::Real(r),
    Value::Text(s) => SqlValue::Text(s),
  }
}

pub fn encode_values(values: impl IntoIterator<Item = Value>) -> Vec<SqlValue> {
  values.into_iter().map(encode_value).collect()
}

/// `index` is the result column, reported if the cell is a blob.
pub fn decode_value(v: SqlValue, index: usize) -> Result<Value> {
  match v {
    SqlValue::Null => Ok(Value::Null),
    SqlValue::Integer(i) => Ok(Value::Integer(i)),
    SqlValue::Real(r) => Ok(Value::Real(r)),
    SqlValue::Text(s) => Ok(Value::Text(s)),
    SqlValue::Blob(_) => Err(Error::UnexpectedValue(index)),
  }
}

/// Raw cells read from one result row, before blob rejection.
pub struct RawRow(pub Vec<SqlValue>);

impl RawRow {
  pub fn into_row(self) -> Result<Vec<Value>> {
    self
      .0
      .into_iter()
      .enumerate()
      .map(|(i, v)| decode_value(v, i))
      .collect()
  }
}
