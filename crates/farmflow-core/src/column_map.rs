//! Column-to-value maps used as update assignments and delete/update
//! conditions.
//!
//! Conditions match conjunctively by equality. Both kinds are checked against
//! the target table before any SQL is composed, so a misspelt or foreign
//! column is an error rather than a silently ignored filter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result},
  schema::{Column, Table},
  value::Value,
};

/// An insertion-ordered map from [`Column`] to [`Value`]. Inserting a column
/// twice replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Column, Value>", into = "BTreeMap<Column, Value>")]
pub struct ColumnMap {
  entries: Vec<(Column, Value)>,
}

impl ColumnMap {
  pub fn new() -> Self { Self::default() }

  /// A condition selecting the row whose surrogate key is `id`.
  pub fn key(table: Table, id: i64) -> Self { Self::new().with(table.key(), id) }

  pub fn with(mut self, column: Column, value: impl Into<Value>) -> Self {
    self.insert(column, value);
    self
  }

  pub fn insert(&mut self, column: Column, value: impl Into<Value>) {
    let value = value.into();
    match self.entries.iter_mut().find(|(c, _)| *c == column) {
      Some(entry) => entry.1 = value,
      None => self.entries.push((column, value)),
    }
  }

  pub fn get(&self, column: Column) -> Option<&Value> {
    self.entries.iter().find(|(c, _)| *c == column).map(|(_, v)| v)
  }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
    self.entries.iter().map(|(c, _)| *c)
  }

  pub fn into_values(self) -> impl Iterator<Item = Value> {
    self.entries.into_iter().map(|(_, v)| v)
  }

  /// Validate as an update's set map: non-empty, every column in `table`,
  /// and never the surrogate key.
  pub fn check_assignment(&self, table: Table) -> Result<()> {
    if self.is_empty() {
      return Err(Error::EmptyAssignment(table));
    }
    self.check_membership(table)?;
    if self.get(table.key()).is_some() {
      return Err(Error::ImmutableKey { table, column: table.key() });
    }
    Ok(())
  }

  /// Validate as a condition: non-empty and every column in `table`.
  pub fn check_condition(&self, table: Table) -> Result<()> {
    if self.is_empty() {
      return Err(Error::EmptyCondition(table));
    }
    self.check_membership(table)
  }

  fn check_membership(&self, table: Table) -> Result<()> {
    match self.columns().find(|c| !table.has_column(*c)) {
      Some(column) => Err(Error::ForeignColumn { table, column }),
      None => Ok(()),
    }
  }
}

impl FromIterator<(Column, Value)> for ColumnMap {
  fn from_iter<I: IntoIterator<Item = (Column, Value)>>(iter: I) -> Self {
    let mut map = Self::new();
    for (column, value) in iter {
      map.insert(column, value);
    }
    map
  }
}

impl From<BTreeMap<Column, Value>> for ColumnMap {
  fn from(map: BTreeMap<Column, Value>) -> Self { map.into_iter().collect() }
}

impl From<ColumnMap> for BTreeMap<Column, Value> {
  fn from(map: ColumnMap) -> Self { map.entries.into_iter().collect() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn insert_replaces_existing_column() {
    let map = ColumnMap::new()
      .with(Column::Name, "Maize")
      .with(Column::Type, "Cereal")
      .with(Column::Name, "Millet");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(Column::Name), Some(&Value::from("Millet")));
    assert_eq!(map.columns().collect::<Vec<_>>(), vec![Column::Name, Column::Type]);
  }

  #[test]
  fn key_condition_targets_the_tables_key() {
    let cond = ColumnMap::key(Table::MarketInfo, 4);
    assert_eq!(cond.get(Column::MarketInfoId), Some(&Value::Integer(4)));
    cond.check_condition(Table::MarketInfo).unwrap();
  }

  #[test]
  fn assignment_rejects_key_foreign_and_empty() {
    let err = ColumnMap::key(Table::Crop, 1)
      .check_assignment(Table::Crop)
      .unwrap_err();
    assert!(matches!(err, Error::ImmutableKey { column: Column::CropId, .. }));

    let err = ColumnMap::new()
      .with(Column::Location, "Accra")
      .check_assignment(Table::Crop)
      .unwrap_err();
    assert!(matches!(err, Error::ForeignColumn { column: Column::Location, .. }));

    assert!(matches!(
      ColumnMap::new().check_assignment(Table::Crop),
      Err(Error::EmptyAssignment(Table::Crop))
    ));
  }

  #[test]
  fn condition_may_use_key_but_not_be_empty() {
    ColumnMap::key(Table::Plot, 2).check_condition(Table::Plot).unwrap();
    // A reference column counts as the referencing table's own column.
    ColumnMap::new()
      .with(Column::CropId, 1)
      .check_condition(Table::Harvest)
      .unwrap();
    assert!(matches!(
      ColumnMap::new().check_condition(Table::Plot),
      Err(Error::EmptyCondition(Table::Plot))
    ));
  }

  #[test]
  fn deserializes_from_json_object() {
    let map: ColumnMap =
      serde_json::from_str(r#"{"Name": "Yam", "GrowthDuration": 180}"#).unwrap();
    assert_eq!(map.get(Column::GrowthDuration), Some(&Value::Integer(180)));
    assert!(serde_json::from_str::<ColumnMap>(r#"{"Colour": "red"}"#).is_err());
  }
}
