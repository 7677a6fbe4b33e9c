//! Handler for `GET /reports/financial`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use farmflow_core::{
  report::{FinancialSummary, ReportPeriod},
  store::FarmStore,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ReportParams {
  /// `date` (default) or `month`.
  #[serde(default)]
  pub period: ReportPeriod,
}

/// `GET /reports/financial[?period=date|month]`
pub async fn financial<S: FarmStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<ReportParams>,
) -> Result<Json<Vec<FinancialSummary>>, ApiError> {
  let report = store
    .financial_report(params.period)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(report))
}
