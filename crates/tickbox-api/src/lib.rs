//! JSON REST API for Tickbox.
//!
//! Exposes an axum [`Router`] backed by any [`tickbox_core::TrackerStore`].
//! Each resource family has one handler that picks an action from the method
//! and the path shape; every response is a `{ success, data?, error? }`
//! envelope carrying permissive CORS headers.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", tickbox_api::api_router(store.clone()))
//! ```

pub mod colors;
pub mod days;
pub mod dispatch;
pub mod entries;
pub mod envelope;
pub mod error;
pub mod habits;
pub mod lists;

use std::sync::Arc;

use axum::{Router, routing::any};
use tickbox_core::TrackerStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. A trailing slash addresses the same resource as
/// the bare path; unknown paths below the mount point get a 404 envelope.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TrackerStore + 'static,
{
  Router::new()
    .route("/colors", any(colors::handler::<S>))
    .route("/colors/", any(colors::handler::<S>))
    .route("/colors/{*rest}", any(colors::handler::<S>))
    .route("/lists", any(lists::handler::<S>))
    .route("/lists/", any(lists::handler::<S>))
    .route("/lists/{*rest}", any(lists::handler::<S>))
    .route("/entries", any(entries::handler::<S>))
    .route("/entries/", any(entries::handler::<S>))
    .route("/entries/{*rest}", any(entries::handler::<S>))
    .route("/habits", any(habits::handler::<S>))
    .route("/habits/", any(habits::handler::<S>))
    .route("/habits/{*rest}", any(habits::handler::<S>))
    .route("/days", any(days::handler::<S>))
    .route("/days/", any(days::handler::<S>))
    .route("/days/{*rest}", any(days::handler::<S>))
    .fallback(envelope::fallback)
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
