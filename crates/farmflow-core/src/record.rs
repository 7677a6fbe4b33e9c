//! Strongly typed rows for each table.
//!
//! The generic insert takes values positionally; these types fix the order at
//! compile time. [`NewRecord`] is the tagged union the store accepts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{schema::Table, value::Value};

// ─── Catalog ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
  pub name:            String,
  pub crop_type:       String,
  /// Days from planting to harvest.
  pub growth_duration: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
  pub location: String,
  /// Area, in the farm's unit of choice.
  pub size:     f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub name:      String,
  pub role:      String,
  pub hire_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
  pub item_name:     String,
  pub quantity:      i64,
  pub item_type:     String,
  pub purchase_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
  pub record_date: NaiveDate,
  pub income:      f64,
  pub expenses:    f64,
}

// ─── Events ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planting {
  pub crop_id:       i64,
  pub plot_id:       i64,
  pub planting_date: NaiveDate,
  pub quantity:      i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harvest {
  pub crop_id:      i64,
  pub plot_id:      i64,
  pub harvest_date: NaiveDate,
  pub quantity:     i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
  pub employee_id: i64,
  pub plot_id:     i64,
  pub description: String,
  pub task_date:   NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryUsage {
  pub inventory_id:  i64,
  pub usage_date:    NaiveDate,
  pub quantity_used: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestControl {
  pub plot_id:      i64,
  pub method:       String,
  pub control_date: NaiveDate,
  pub quantity:     f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCropProduction {
  pub crop_id:             i64,
  pub financial_record_id: i64,
  /// `YYYY-MM`.
  pub production_month:    String,
  pub quantity_produced:   i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInfo {
  pub crop_id:        i64,
  pub market_date:    NaiveDate,
  pub price_per_unit: f64,
}

// ─── Tagged union ────────────────────────────────────────────────────────────

/// A row for any table, tagged by table name on the wire:
/// `{"table":"Crop","name":"Millet","crop_type":"Cereal","growth_duration":100}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "table")]
pub enum NewRecord {
  Crop(Crop),
  Plot(Plot),
  Employee(Employee),
  Inventory(InventoryItem),
  FinancialRecord(FinancialRecord),
  Planting(Planting),
  Harvest(Harvest),
  Task(Task),
  InventoryUsage(InventoryUsage),
  PestControl(PestControl),
  MonthlyCropProduction(MonthlyCropProduction),
  MarketInfo(MarketInfo),
}

impl NewRecord {
  pub fn table(&self) -> Table {
    match self {
      Self::Crop(_) => Table::Crop,
      Self::Plot(_) => Table::Plot,
      Self::Employee(_) => Table::Employee,
      Self::Inventory(_) => Table::Inventory,
      Self::FinancialRecord(_) => Table::FinancialRecord,
      Self::Planting(_) => Table::Planting,
      Self::Harvest(_) => Table::Harvest,
      Self::Task(_) => Table::Task,
      Self::InventoryUsage(_) => Table::InventoryUsage,
      Self::PestControl(_) => Table::PestControl,
      Self::MonthlyCropProduction(_) => Table::MonthlyCropProduction,
      Self::MarketInfo(_) => Table::MarketInfo,
    }
  }

  /// Values in the table's declared column order, key excluded.
  pub fn into_values(self) -> Vec<Value> {
    match self {
      Self::Crop(r) => vec![r.name.into(), r.crop_type.into(), r.growth_duration.into()],
      Self::Plot(r) => vec![r.location.into(), r.size.into()],
      Self::Employee(r) => vec![r.name.into(), r.role.into(), r.hire_date.into()],
      Self::Inventory(r) => vec![
        r.item_name.into(),
        r.quantity.into(),
        r.item_type.into(),
        r.purchase_date.into(),
      ],
      Self::FinancialRecord(r) => {
        vec![r.record_date.into(), r.income.into(), r.expenses.into()]
      }
      Self::Planting(r) => vec![
        r.crop_id.into(),
        r.plot_id.into(),
        r.planting_date.into(),
        r.quantity.into(),
      ],
      Self::Harvest(r) => vec![
        r.crop_id.into(),
        r.plot_id.into(),
        r.harvest_date.into(),
        r.quantity.into(),
      ],
      Self::Task(r) => vec![
        r.employee_id.into(),
        r.plot_id.into(),
        r.description.into(),
        r.task_date.into(),
      ],
      Self::InventoryUsage(r) => {
        vec![r.inventory_id.into(), r.usage_date.into(), r.quantity_used.into()]
      }
      Self::PestControl(r) => vec![
        r.plot_id.into(),
        r.method.into(),
        r.control_date.into(),
        r.quantity.into(),
      ],
      Self::MonthlyCropProduction(r) => vec![
        r.crop_id.into(),
        r.financial_record_id.into(),
        r.production_month.into(),
        r.quantity_produced.into(),
      ],
      Self::MarketInfo(r) => {
        vec![r.crop_id.into(), r.market_date.into(), r.price_per_unit.into()]
      }
    }
  }

  pub fn into_parts(self) -> (Table, Vec<Value>) {
    let table = self.table();
    (table, self.into_values())
  }
}
