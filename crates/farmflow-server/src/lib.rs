//! Server assembly for FarmFlow: configuration and the top-level router.
//!
//! The `farmflow` binary in `main.rs` is a thin shell over this crate.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use farmflow_core::store::FarmStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `farmflow.toml` layered under
/// `FARMFLOW_*` environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// Store file; created and seeded on first use.
  pub store_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig {
      host:       "127.0.0.1".to_owned(),
      port:       8501,
      store_path: PathBuf::from("farm_management.db"),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `store_path` with a leading `~/` expanded.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Load configuration from an optional TOML file, then the environment.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("FARMFLOW"))
    .build()?
    .try_deserialize()
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: the JSON API under `/api`, with request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: FarmStore + 'static,
{
  Router::new()
    .nest("/api", farmflow_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
  };
  use farmflow_store_sqlite::SqliteStore;
  use tower::ServiceExt;

  use super::*;

  #[test]
  fn missing_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.address(), "127.0.0.1:8501");
  }

  #[test]
  fn config_file_overrides_some_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("farmflow.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "port = 9000\nstore_path = \"/srv/farm.db\"").unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.store_path, PathBuf::from("/srv/farm.db"));
  }

  #[test]
  fn tilde_expands_only_as_a_prefix() {
    assert_eq!(expand_tilde(Path::new("data/farm.db")), PathBuf::from("data/farm.db"));
    assert_eq!(expand_tilde(Path::new("/a/~/b")), PathBuf::from("/a/~/b"));
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/farm.db")),
        PathBuf::from(home).join("farm.db")
      );
    }
  }

  #[tokio::test]
  async fn api_is_mounted_under_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SqliteStore::new(dir.path().join("farm.db")));
    let app = app(store);

    let response = app
      .clone()
      .oneshot(Request::get("/api/tables").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let tables: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(tables.as_array().map(Vec::len), Some(12));

    let response = app
      .oneshot(Request::get("/tables").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }
}
