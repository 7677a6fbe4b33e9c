//! JSON REST API for FarmFlow.
//!
//! Exposes an axum [`Router`] backed by any [`farmflow_core::store::FarmStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", farmflow_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod records;
pub mod reports;
pub mod tables;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, put},
};
use farmflow_core::store::FarmStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: FarmStore + 'static,
{
  Router::new()
    // Schema
    .route("/tables", get(tables::list))
    // Records
    .route(
      "/tables/{table}/records",
      get(records::list::<S>)
        .post(records::create::<S>)
        .patch(records::update::<S>)
        .delete(records::delete::<S>),
    )
    .route(
      "/tables/{table}/records/{id}",
      put(records::update_one::<S>).delete(records::delete_one::<S>),
    )
    // Reports
    .route("/reports/financial", get(reports::financial::<S>))
    .with_state(store)
}
