//! The farm schema as closed enumerations.
//!
//! Table and column identifiers only ever reach SQL text through these enums,
//! so caller-supplied strings are parsed (and rejected) here rather than
//! interpolated. Column order in [`Table::columns`] is the declared order of
//! the on-disk tables and therefore the positional order for inserts.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::Error;

// ─── Tables ──────────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
  Serialize,
  Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Table {
  Crop,
  Plot,
  Employee,
  Inventory,
  FinancialRecord,
  Planting,
  Harvest,
  Task,
  InventoryUsage,
  PestControl,
  MonthlyCropProduction,
  MarketInfo,
}

/// What role a table plays in the farm's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
  /// Master data not tied to a date.
  Catalog,
  /// One row per accounting period.
  Ledger,
  /// A dated occurrence referencing catalog rows.
  Event,
  /// A per-period rollup referencing catalog and ledger rows.
  Aggregate,
  /// Dated observations of a single series.
  TimeSeries,
}

impl Table {
  /// Every table, in creation order.
  pub fn all() -> impl Iterator<Item = Table> { Self::iter() }

  pub fn name(self) -> &'static str { self.into() }

  /// All columns in declared order, surrogate key first.
  pub fn columns(self) -> &'static [ColumnDef] {
    match self {
      Self::Crop => CROP,
      Self::Plot => PLOT,
      Self::Employee => EMPLOYEE,
      Self::Inventory => INVENTORY,
      Self::FinancialRecord => FINANCIAL_RECORD,
      Self::Planting => PLANTING,
      Self::Harvest => HARVEST,
      Self::Task => TASK,
      Self::InventoryUsage => INVENTORY_USAGE,
      Self::PestControl => PEST_CONTROL,
      Self::MonthlyCropProduction => MONTHLY_CROP_PRODUCTION,
      Self::MarketInfo => MARKET_INFO,
    }
  }

  /// Columns an insert supplies values for: everything but the key.
  pub fn data_columns(self) -> &'static [ColumnDef] { &self.columns()[1..] }

  pub fn key(self) -> Column { self.columns()[0].column }

  pub fn column(self, column: Column) -> Option<&'static ColumnDef> {
    self.columns().iter().find(|def| def.column == column)
  }

  pub fn has_column(self, column: Column) -> bool { self.column(column).is_some() }

  /// Declared (never enforced) references to other tables.
  pub fn references(self) -> impl Iterator<Item = (Column, Table)> {
    self
      .columns()
      .iter()
      .filter_map(|def| def.references.map(|target| (def.column, target)))
  }

  pub fn kind(self) -> TableKind {
    match self {
      Self::Crop | Self::Plot | Self::Employee | Self::Inventory => TableKind::Catalog,
      Self::FinancialRecord => TableKind::Ledger,
      Self::Planting
      | Self::Harvest
      | Self::Task
      | Self::InventoryUsage
      | Self::PestControl => TableKind::Event,
      Self::MonthlyCropProduction => TableKind::Aggregate,
      Self::MarketInfo => TableKind::TimeSeries,
    }
  }
}

impl TryFrom<String> for Table {
  type Error = Error;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    s.parse().map_err(|_| Error::UnknownTable(s))
  }
}

// ─── Columns ─────────────────────────────────────────────────────────────────

/// Every column identifier that appears anywhere in the schema.
///
/// Several tables share a name (`CropID`, `Quantity`, `Type`, ...); whether a
/// column belongs to a given table is answered by [`Table::has_column`].
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
  Serialize,
  Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Column {
  #[strum(serialize = "CropID")]
  CropId,
  Name,
  Type,
  GrowthDuration,
  #[strum(serialize = "PlotID")]
  PlotId,
  Location,
  Size,
  #[strum(serialize = "EmployeeID")]
  EmployeeId,
  Role,
  HireDate,
  #[strum(serialize = "InventoryID")]
  InventoryId,
  ItemName,
  Quantity,
  PurchaseDate,
  #[strum(serialize = "RecordID")]
  RecordId,
  RecordDate,
  Income,
  Expenses,
  #[strum(serialize = "PlantingID")]
  PlantingId,
  PlantingDate,
  #[strum(serialize = "HarvestID")]
  HarvestId,
  HarvestDate,
  #[strum(serialize = "TaskID")]
  TaskId,
  TaskDescription,
  TaskDate,
  #[strum(serialize = "UsageID")]
  UsageId,
  UsageDate,
  QuantityUsed,
  #[strum(serialize = "ControlID")]
  ControlId,
  ControlMethod,
  ControlDate,
  #[strum(serialize = "ProductionID")]
  ProductionId,
  #[strum(serialize = "FinancialRecordID")]
  FinancialRecordId,
  ProductionMonth,
  QuantityProduced,
  #[strum(serialize = "MarketInfoID")]
  MarketInfoId,
  MarketDate,
  PricePerUnit,
}

impl Column {
  pub fn name(self) -> &'static str { self.into() }
}

impl TryFrom<String> for Column {
  type Error = Error;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    s.parse().map_err(|_| Error::UnknownColumn(s))
  }
}

// ─── Column definitions ──────────────────────────────────────────────────────

/// SQLite storage class a column is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
  Integer,
  Real,
  Text,
}

impl ColumnType {
  pub fn sql(self) -> &'static str {
    match self {
      Self::Integer => "INTEGER",
      Self::Real => "REAL",
      Self::Text => "TEXT",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
  pub column:     Column,
  pub ty:         ColumnType,
  /// Catalog table whose key this column names, if any.
  pub references: Option<Table>,
}

impl ColumnDef {
  const fn key(column: Column) -> Self {
    Self { column, ty: ColumnType::Integer, references: None }
  }

  const fn data(column: Column, ty: ColumnType) -> Self {
    Self { column, ty, references: None }
  }

  const fn reference(column: Column, target: Table) -> Self {
    Self { column, ty: ColumnType::Integer, references: Some(target) }
  }
}

use Column as C;
use ColumnType::{Integer, Real, Text};

const CROP: &[ColumnDef] = &[
  ColumnDef::key(C::CropId),
  ColumnDef::data(C::Name, Text),
  ColumnDef::data(C::Type, Text),
  ColumnDef::data(C::GrowthDuration, Integer),
];

const PLOT: &[ColumnDef] = &[
  ColumnDef::key(C::PlotId),
  ColumnDef::data(C::Location, Text),
  ColumnDef::data(C::Size, Real),
];

const EMPLOYEE: &[ColumnDef] = &[
  ColumnDef::key(C::EmployeeId),
  ColumnDef::data(C::Name, Text),
  ColumnDef::data(C::Role, Text),
  ColumnDef::data(C::HireDate, Text),
];

const INVENTORY: &[ColumnDef] = &[
  ColumnDef::key(C::InventoryId),
  ColumnDef::data(C::ItemName, Text),
  ColumnDef::data(C::Quantity, Integer),
  ColumnDef::data(C::Type, Text),
  ColumnDef::data(C::PurchaseDate, Text),
];

const FINANCIAL_RECORD: &[ColumnDef] = &[
  ColumnDef::key(C::RecordId),
  ColumnDef::data(C::RecordDate, Text),
  ColumnDef::data(C::Income, Real),
  ColumnDef::data(C::Expenses, Real),
];

const PLANTING: &[ColumnDef] = &[
  ColumnDef::key(C::PlantingId),
  ColumnDef::reference(C::CropId, Table::Crop),
  ColumnDef::reference(C::PlotId, Table::Plot),
  ColumnDef::data(C::PlantingDate, Text),
  ColumnDef::data(C::Quantity, Integer),
];

const HARVEST: &[ColumnDef] = &[
  ColumnDef::key(C::HarvestId),
  ColumnDef::reference(C::CropId, Table::Crop),
  ColumnDef::reference(C::PlotId, Table::Plot),
  ColumnDef::data(C::HarvestDate, Text),
  ColumnDef::data(C::Quantity, Integer),
];

const TASK: &[ColumnDef] = &[
  ColumnDef::key(C::TaskId),
  ColumnDef::reference(C::EmployeeId, Table::Employee),
  ColumnDef::reference(C::PlotId, Table::Plot),
  ColumnDef::data(C::TaskDescription, Text),
  ColumnDef::data(C::TaskDate, Text),
];

const INVENTORY_USAGE: &[ColumnDef] = &[
  ColumnDef::key(C::UsageId),
  ColumnDef::reference(C::InventoryId, Table::Inventory),
  ColumnDef::data(C::UsageDate, Text),
  ColumnDef::data(C::QuantityUsed, Integer),
];

const PEST_CONTROL: &[ColumnDef] = &[
  ColumnDef::key(C::ControlId),
  ColumnDef::reference(C::PlotId, Table::Plot),
  ColumnDef::data(C::ControlMethod, Text),
  ColumnDef::data(C::ControlDate, Text),
  ColumnDef::data(C::Quantity, Real),
];

const MONTHLY_CROP_PRODUCTION: &[ColumnDef] = &[
  ColumnDef::key(C::ProductionId),
  ColumnDef::reference(C::CropId, Table::Crop),
  ColumnDef::reference(C::FinancialRecordId, Table::FinancialRecord),
  ColumnDef::data(C::ProductionMonth, Text),
  ColumnDef::data(C::QuantityProduced, Integer),
];

const MARKET_INFO: &[ColumnDef] = &[
  ColumnDef::key(C::MarketInfoId),
  ColumnDef::reference(C::CropId, Table::Crop),
  ColumnDef::data(C::MarketDate, Text),
  ColumnDef::data(C::PricePerUnit, Real),
];

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn identifiers_round_trip_through_strings() {
    for table in Table::iter() {
      assert_eq!(table.name().parse::<Table>().unwrap(), table);
    }
    for column in Column::iter() {
      assert_eq!(column.name().parse::<Column>().unwrap(), column);
    }
    assert_eq!(Column::FinancialRecordId.name(), "FinancialRecordID");
    assert_eq!(Table::MonthlyCropProduction.to_string(), "MonthlyCropProduction");
  }

  #[test]
  fn unknown_identifiers_are_rejected() {
    assert!(matches!(
      Table::try_from("Crops; DROP TABLE Crop".to_owned()),
      Err(Error::UnknownTable(_))
    ));
    // Matching is exact, including case.
    assert!(matches!(
      Column::try_from("cropid".to_owned()),
      Err(Error::UnknownColumn(_))
    ));
  }

  #[test]
  fn every_table_starts_with_its_key() {
    for table in Table::iter() {
      let key = table.columns()[0];
      assert_eq!(key.ty, ColumnType::Integer);
      assert!(key.references.is_none());
      assert!(key.column.name().ends_with("ID"));
      assert_eq!(table.key(), key.column);
      assert_eq!(table.data_columns().len(), table.columns().len() - 1);
    }
  }

  #[test]
  fn references_point_at_catalog_keys() {
    let refs: Vec<_> = Table::MonthlyCropProduction.references().collect();
    assert_eq!(refs, vec![
      (Column::CropId, Table::Crop),
      (Column::FinancialRecordId, Table::FinancialRecord),
    ]);
    for table in Table::iter() {
      for (_, target) in table.references() {
        assert!(matches!(target.kind(), TableKind::Catalog | TableKind::Ledger));
      }
    }
  }

  #[test]
  fn shared_column_names_resolve_per_table() {
    assert!(Table::Inventory.has_column(Column::Type));
    assert!(Table::Crop.has_column(Column::Type));
    assert!(!Table::Plot.has_column(Column::Type));
    assert_eq!(Table::PestControl.column(Column::Quantity).unwrap().ty, ColumnType::Real);
    assert_eq!(Table::Harvest.column(Column::Quantity).unwrap().ty, ColumnType::Integer);
  }

  #[test]
  fn identifiers_serialize_as_plain_strings() {
    let json = serde_json::to_string(&(Table::InventoryUsage, Column::UsageId)).unwrap();
    assert_eq!(json, r#"["InventoryUsage","UsageID"]"#);
    let table: Table = serde_json::from_str(r#""MarketInfo""#).unwrap();
    assert_eq!(table, Table::MarketInfo);
    assert!(serde_json::from_str::<Table>(r#""Nope""#).is_err());
  }
}
