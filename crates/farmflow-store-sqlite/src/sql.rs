//! Statement composition.
//!
//! Identifiers come only from [`Table`] and [`Column`], never from caller
//! text; values are always bound as numbered parameters in the order the
//! clauses are written.

use farmflow_core::{Column, ColumnMap, Table, report::ReportPeriod};

fn ident(name: &str) -> String { format!("\"{name}\"") }

/// `"A" = ?n, "B" = ?n+1, ...` joined by `sep`, numbering from `first`.
fn equalities(columns: impl Iterator<Item = Column>, first: usize, sep: &str) -> String {
  columns
    .enumerate()
    .map(|(i, c)| format!("{} = ?{}", ident(c.name()), first + i))
    .collect::<Vec<_>>()
    .join(sep)
}

/// Positional insert with a `NULL` key so SQLite assigns the next id.
pub fn insert(table: Table) -> String {
  let placeholders = (1..=table.data_columns().len())
    .map(|i| format!("?{i}"))
    .collect::<Vec<_>>()
    .join(", ");
  format!("INSERT INTO {} VALUES (NULL, {placeholders})", ident(table.name()))
}

pub fn update(table: Table, set_values: &ColumnMap, condition: &ColumnMap) -> String {
  format!(
    "UPDATE {} SET {} WHERE {}",
    ident(table.name()),
    equalities(set_values.columns(), 1, ", "),
    equalities(condition.columns(), set_values.len() + 1, " AND "),
  )
}

pub fn delete(table: Table, condition: &ColumnMap) -> String {
  format!(
    "DELETE FROM {} WHERE {}",
    ident(table.name()),
    equalities(condition.columns(), 1, " AND "),
  )
}

/// Full scan in key order, optionally filtered by a `LIKE ?1` on `search`.
pub fn select_all(table: Table, search: Option<Column>) -> String {
  let filter = search
    .map(|c| format!(" WHERE {} LIKE ?1 ESCAPE '\\'", ident(c.name())))
    .unwrap_or_default();
  format!(
    "SELECT * FROM {}{filter} ORDER BY {}",
    ident(table.name()),
    ident(table.key().name()),
  )
}

/// Wrap `text` as a `LIKE` pattern matching any value containing it
/// literally.
pub fn contains_pattern(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len() + 2);
  escaped.push('%');
  for ch in text.chars() {
    if matches!(ch, '\\' | '%' | '_') {
      escaped.push('\\');
    }
    escaped.push(ch);
  }
  escaped.push('%');
  escaped
}

pub fn financial_report(period: ReportPeriod) -> String {
  let bucket = match period {
    ReportPeriod::Date => "RecordDate",
    ReportPeriod::Month => "substr(RecordDate, 1, 7)",
  };
  format!(
    "SELECT {bucket} AS Period, SUM(Income) AS TotalIncome, SUM(Expenses) AS TotalExpenses
     FROM FinancialRecord
     GROUP BY Period
     ORDER BY Period"
  )
}
