//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::envelope::{Envelope, respond};

/// An error returned by an API handler. Every variant renders as a failure
/// envelope whose `error` field is the variant's display string.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Malformed JSON, a missing or mistyped field, or a bad id segment.
  #[error("{0}")]
  BadRequest(String),

  #[error("{0}")]
  NotFound(String),

  /// The store reported no result for a create or update.
  #[error("{0}")]
  Failed(String),

  #[error("Method not allowed or invalid path")]
  MethodNotAllowed,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store read failed");
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };
    respond(status, Envelope::<()>::failure(self.to_string()))
  }
}
