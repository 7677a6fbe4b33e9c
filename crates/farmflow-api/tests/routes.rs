//! End-to-end tests driving the API router over a seeded SQLite store.

use std::sync::Arc;

use axum::{
  Router,
  body::{Body, to_bytes},
  http::{Method, Request, StatusCode, header},
};
use farmflow_api::api_router;
use farmflow_store_sqlite::SqliteStore;
use serde_json::{Value as Json, json};
use tempfile::TempDir;
use tower::ServiceExt;

fn app() -> (TempDir, Router) {
  let dir = tempfile::tempdir().expect("temp dir");
  let store = SqliteStore::new(dir.path().join("farm_management.db"));
  (dir, api_router(Arc::new(store)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Json>) -> (StatusCode, Json) {
  let body = match body {
    Some(b) => Body::from(b.to_string()),
    None => Body::empty(),
  };
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(body)
    .unwrap();

  let response = app.clone().oneshot(request).await.unwrap();
  let status = response.status();
  let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
  // Extractor rejections answer in plain text.
  (status, serde_json::from_slice(&bytes).unwrap_or(Json::Null))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Json) {
  send(app, Method::GET, uri, None).await
}

// ─── Schema ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn tables_describe_the_schema() {
  let (_dir, app) = app();

  let (status, body) = get(&app, "/tables").await;
  assert_eq!(status, StatusCode::OK);

  let tables = body.as_array().unwrap();
  assert_eq!(tables.len(), 12);
  assert_eq!(tables[0]["name"], "Crop");
  assert_eq!(tables[0]["kind"], "catalog");
  assert_eq!(tables[0]["key"], "CropID");
  assert_eq!(
    tables[0]["columns"][1],
    json!({ "column": "Name", "ty": "TEXT", "references": null })
  );

  let market = tables.iter().find(|t| t["name"] == "MarketInfo").unwrap();
  assert_eq!(market["columns"][1]["references"], "Crop");
}

// ─── Records ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_with_search() {
  let (_dir, app) = app();

  let (status, body) = get(&app, "/tables/Crop/records?column=Name&contains=Maize").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    body,
    json!([{ "CropID": 1, "Name": "Maize", "Type": "Cereal", "GrowthDuration": 120 }])
  );

  let (_, all) = get(&app, "/tables/Plot/records").await;
  assert_eq!(all.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn half_a_search_filter_is_rejected() {
  let (_dir, app) = app();

  let (status, body) = get(&app, "/tables/Crop/records?contains=Maize").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_identifiers_are_rejected() {
  let (_dir, app) = app();

  let (status, _) = get(&app, "/tables/Crops/records").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = get(&app, "/tables/Crop/records?column=name&contains=x").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = send(
    &app,
    Method::PATCH,
    "/tables/Crop/records",
    Some(json!({ "set": { "Colour": "red" }, "where": { "CropID": 1 } })),
  )
  .await;
  assert!(status.is_client_error());
}

#[tokio::test]
async fn create_returns_the_new_key() {
  let (_dir, app) = app();

  let (status, body) = send(
    &app,
    Method::POST,
    "/tables/Plot/records",
    Some(json!({ "values": ["Ho", 1.25] })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body, json!({ "id": 8 }));

  let (_, found) = get(&app, "/tables/Plot/records?column=Location&contains=Ho").await;
  assert_eq!(found, json!([{ "PlotID": 8, "Location": "Ho", "Size": 1.25 }]));
}

#[tokio::test]
async fn create_with_wrong_arity_is_a_bad_request() {
  let (_dir, app) = app();

  let (status, body) = send(
    &app,
    Method::POST,
    "/tables/Crop/records",
    Some(json!({ "values": ["Millet"] })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "Crop takes 3 values, got 1");
}

#[tokio::test]
async fn bulk_update_reports_rows_changed() {
  let (_dir, app) = app();

  let (status, body) = send(
    &app,
    Method::PATCH,
    "/tables/Planting/records",
    Some(json!({ "set": { "Quantity": 999 }, "where": { "CropID": 1 } })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "updated": 2 }));
}

#[tokio::test]
async fn key_cannot_be_reassigned() {
  let (_dir, app) = app();

  let (status, _) = send(
    &app,
    Method::PUT,
    "/tables/Crop/records/1",
    Some(json!({ "set": { "CropID": 99 } })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_one_by_id() {
  let (_dir, app) = app();

  let (status, body) = send(
    &app,
    Method::PUT,
    "/tables/Inventory/records/2",
    Some(json!({ "set": { "Quantity": 45 } })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "updated": 1 }));

  let (status, _) = send(
    &app,
    Method::PUT,
    "/tables/Inventory/records/404",
    Some(json!({ "set": { "Quantity": 45 } })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_one_then_again_is_not_found() {
  let (_dir, app) = app();

  let (status, body) = send(&app, Method::DELETE, "/tables/Task/records/3", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "deleted": 1 }));

  let (status, _) = send(&app, Method::DELETE, "/tables/Task/records/3", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bulk_delete_needs_a_condition() {
  let (_dir, app) = app();

  let (status, body) = send(
    &app,
    Method::DELETE,
    "/tables/Harvest/records",
    Some(json!({ "where": { "PlotID": 1 } })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "deleted": 2 }));

  let (status, _) = send(
    &app,
    Method::DELETE,
    "/tables/Harvest/records",
    Some(json!({ "where": {} })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (_, rest) = get(&app, "/tables/Harvest/records").await;
  assert_eq!(rest.as_array().unwrap().len(), 8);
}

// ─── Reports ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn financial_report_defaults_to_dates() {
  let (_dir, app) = app();

  let (status, body) = get(&app, "/reports/financial").await;
  assert_eq!(status, StatusCode::OK);

  let rows = body.as_array().unwrap();
  assert_eq!(rows.len(), 5);
  assert_eq!(
    rows[0],
    json!({ "period": "2023-01-31", "total_income": 1500.0, "total_expenses": 500.0 })
  );
}

#[tokio::test]
async fn financial_report_by_month() {
  let (_dir, app) = app();

  let (status, body) = get(&app, "/reports/financial?period=month").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body[4]["period"], "2023-05");
  assert_eq!(body[4]["total_income"], 3500.0);

  let (status, _) = get(&app, "/reports/financial?period=year").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}
