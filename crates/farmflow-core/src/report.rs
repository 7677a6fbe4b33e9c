//! Aggregate financial reporting types.

use serde::{Deserialize, Serialize};

/// How financial records are bucketed when summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
  /// One bucket per distinct `RecordDate`.
  #[default]
  Date,
  /// One bucket per `YYYY-MM` prefix of `RecordDate`.
  Month,
}

/// Income and expense totals for one period, ordered oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
  pub period:         String,
  pub total_income:   f64,
  pub total_expenses: f64,
}

impl FinancialSummary {
  pub fn net(&self) -> f64 { self.total_income - self.total_expenses }
}
