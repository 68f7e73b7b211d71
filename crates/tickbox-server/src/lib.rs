//! Composition root for the Tickbox server.
//!
//! Owns the one [`SqliteStore`] of the process, decides whether it needs
//! sample data, and mounts the API under `/api`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use serde::Deserialize;
use tickbox_core::{TrackerStore, seed::seed_sample_data};
use tickbox_store_sqlite::SqliteStore;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TICKBOX_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Seed sample data into a store file that did not exist yet.
  pub seed:       bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       3000,
      store_path: PathBuf::from("db.sqlite"),
      seed:       true,
    }
  }
}

impl ServerConfig {
  /// Layer `TICKBOX_*` environment variables over the optional file at `path`.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TICKBOX"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Store ────────────────────────────────────────────────────────────────────

/// Open the store named by `config`, seeding it if the file is new.
///
/// Freshness is decided before opening, since opening creates the file.
pub async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteStore> {
  let path  = expand_tilde(&config.store_path);
  let fresh = !path.exists();

  let store = SqliteStore::open(&path)
    .await
    .with_context(|| format!("failed to open store at {path:?}"))?;

  match (fresh, config.seed) {
    (true, true) => {
      seed_sample_data(&store).await;
    }
    (true, false) => tracing::info!(?path, "created empty store"),
    (false, _) => tracing::info!(?path, "reusing existing store"),
  }

  Ok(store)
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

/// The full HTTP app: the API under `/api`, a 404 envelope elsewhere, and
/// request tracing around everything.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: TrackerStore + 'static,
{
  Router::new()
    .nest("/api", tickbox_api::api_router(store))
    .fallback(tickbox_api::envelope::fallback)
    .layer(TraceLayer::new_for_http())
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use tower::ServiceExt as _;

  #[test]
  fn defaults_bind_localhost_3000() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.address(), "127.0.0.1:3000");
    assert_eq!(cfg.store_path, PathBuf::from("db.sqlite"));
    assert!(cfg.seed);
  }

  #[test]
  fn partial_file_keeps_other_defaults() {
    let dir  = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 8080\nseed = false\n").unwrap();

    let cfg = ServerConfig::load(&path).unwrap();
    assert_eq!(cfg.port, 8080);
    assert!(!cfg.seed);
    assert_eq!(cfg.host, "127.0.0.1");
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.store_path, PathBuf::from("db.sqlite"));
  }

  #[test]
  fn expand_tilde_leaves_plain_paths_alone() {
    assert_eq!(expand_tilde(Path::new("db.sqlite")), PathBuf::from("db.sqlite"));
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/tickbox/db.sqlite")),
        PathBuf::from(home).join("tickbox/db.sqlite")
      );
    }
  }

  #[tokio::test]
  async fn fresh_store_is_seeded_once() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig {
      store_path: dir.path().join("db.sqlite"),
      ..ServerConfig::default()
    };

    let store = open_store(&cfg).await.unwrap();
    let colors = store.list_colors().await.unwrap().len();
    assert_eq!(colors, tickbox_core::seed::PALETTE.len());
    assert_eq!(store.list_lists().await.unwrap().len(), 2);
    drop(store);

    let store = open_store(&cfg).await.unwrap();
    assert_eq!(store.list_colors().await.unwrap().len(), colors);
  }

  #[tokio::test]
  async fn fresh_store_without_seeding_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig {
      store_path: dir.path().join("db.sqlite"),
      seed:       false,
      ..ServerConfig::default()
    };

    let store = open_store(&cfg).await.unwrap();
    assert!(store.list_colors().await.unwrap().is_empty());
    assert!(store.list_habits().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn paths_outside_api_get_404_envelope() {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    let req = Request::builder()
      .uri("/index.html")
      .body(Body::empty())
      .unwrap();
    let resp = app(store).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, serde_json::json!({ "success": false, "error": "Not Found" }));
  }

  #[tokio::test]
  async fn api_is_mounted_under_api_prefix() {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    let req = Request::builder()
      .method("POST")
      .uri("/api/lists")
      .body(Body::from(r#"{"list_name":"Groceries","list_color":1}"#))
      .unwrap();
    let resp = app(store.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(store.list_lists().await.unwrap().len(), 1);
  }
}
