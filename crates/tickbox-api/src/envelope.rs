//! The `{ success, data?, error? }` response envelope and the cross-origin
//! header policy.
//!
//! Every response the API produces, preflights included, is built here, so
//! handlers never set headers themselves.

use axum::{
  Json,
  http::{HeaderValue, Method, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::Serialize;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";
/// 24 hours, in seconds.
const MAX_AGE: &str = "86400";

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data:    Option<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error:   Option<String>,
}

impl<T> Envelope<T> {
  pub fn success(data: T) -> Self {
    Self { success: true, data: Some(data), error: None }
  }

  pub fn failure(error: impl Into<String>) -> Self {
    Self { success: false, data: None, error: Some(error.into()) }
  }
}

/// Serialise `envelope` as JSON with `status` and the CORS headers.
pub fn respond<T: Serialize>(status: StatusCode, envelope: Envelope<T>) -> Response {
  with_cors((status, Json(envelope)).into_response())
}

/// `200` with `data` wrapped in a success envelope.
pub fn ok<T: Serialize>(data: T) -> Response {
  respond(StatusCode::OK, Envelope::success(data))
}

/// `204` with only the CORS headers, for `OPTIONS` requests.
pub fn preflight() -> Response {
  with_cors(StatusCode::NO_CONTENT.into_response())
}

/// Fallback for paths no resource claims.
pub async fn fallback(method: Method) -> Response {
  if method == Method::OPTIONS {
    preflight()
  } else {
    respond(StatusCode::NOT_FOUND, Envelope::<()>::failure("Not Found"))
  }
}

fn with_cors(mut response: Response) -> Response {
  let headers = response.headers_mut();
  headers.insert(
    header::ACCESS_CONTROL_ALLOW_ORIGIN,
    HeaderValue::from_static(ALLOW_ORIGIN),
  );
  headers.insert(
    header::ACCESS_CONTROL_ALLOW_METHODS,
    HeaderValue::from_static(ALLOW_METHODS),
  );
  headers.insert(
    header::ACCESS_CONTROL_ALLOW_HEADERS,
    HeaderValue::from_static(ALLOW_HEADERS),
  );
  headers.insert(
    header::ACCESS_CONTROL_MAX_AGE,
    HeaderValue::from_static(MAX_AGE),
  );
  response
}
