//! Scalar values exchanged with the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cell. The schema only declares `INTEGER`, `REAL` and `TEXT` columns, so
/// blobs have no representation here.
///
/// Serialises untagged: `null`, `3`, `2.5`, `"Maize"`. A JSON number with a
/// fractional part or exponent becomes [`Value::Real`]; SQLite's column
/// affinity coerces integers stored into `REAL` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
  Null,
  Integer(i64),
  Real(f64),
  Text(String),
}

/// A result row, columns in `SELECT` order.
pub type Row = Vec<Value>;

/// Dates are stored as ISO-8601 text so lexicographic order is chronological.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl Value {
  pub fn as_i64(&self) -> Option<i64> {
    match self {
      Self::Integer(i) => Some(*i),
      _ => None,
    }
  }

  /// Reals, and integers widened to reals.
  pub fn as_f64(&self) -> Option<f64> {
    match self {
      Self::Integer(i) => Some(*i as f64),
      Self::Real(r) => Some(*r),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::Text(s) => Some(s),
      _ => None,
    }
  }
}

impl From<i64> for Value {
  fn from(v: i64) -> Self { Self::Integer(v) }
}

impl From<i32> for Value {
  fn from(v: i32) -> Self { Self::Integer(v.into()) }
}

impl From<f64> for Value {
  fn from(v: f64) -> Self { Self::Real(v) }
}

impl From<String> for Value {
  fn from(v: String) -> Self { Self::Text(v) }
}

impl From<&str> for Value {
  fn from(v: &str) -> Self { Self::Text(v.to_owned()) }
}

impl From<NaiveDate> for Value {
  fn from(d: NaiveDate) -> Self { Self::Text(d.format(DATE_FORMAT).to_string()) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(v: Option<T>) -> Self { v.map_or(Self::Null, Into::into) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn untagged_json_picks_the_narrowest_scalar() {
    let values: Vec<Value> =
      serde_json::from_str(r#"[null, 120, 2.5, 1500.0, "Maize"]"#).unwrap();
    assert_eq!(values, vec![
      Value::Null,
      Value::Integer(120),
      Value::Real(2.5),
      Value::Real(1500.0),
      Value::Text("Maize".into()),
    ]);
  }

  #[test]
  fn dates_encode_as_iso_text() {
    let d = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
    assert_eq!(Value::from(d), Value::Text("2023-01-31".into()));
    assert_eq!(Value::from(None::<i64>), Value::Null);
  }

  #[test]
  fn integers_widen_to_reals() {
    assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
    assert_eq!(Value::Real(3.0).as_i64(), None);
    assert_eq!(Value::from("x").as_str(), Some("x"));
  }
}
