//! Handler for `/colors` endpoints.
//!
//! | Method   | Path          | Body |
//! |----------|---------------|------|
//! | `GET`    | `/colors`     | none |
//! | `POST`   | `/colors`     | `{"color_name":"...","color_value":"#rrggbb"}` |
//! | `DELETE` | `/colors/:id` | none |

use std::sync::Arc;

use axum::{
  extract::{Request, State},
  response::Response,
};
use serde::Deserialize;
use tickbox_core::{NewColor, TrackerStore};

use crate::{
  dispatch::{Shape, json_body, parse_id},
  envelope::{ok, preflight},
  error::ApiError,
};

#[derive(Debug, Deserialize)]
struct CreateBody {
  color_name:  String,
  color_value: String,
}

pub async fn handler<S>(
  State(store): State<Arc<S>>,
  req: Request,
) -> Result<Response, ApiError>
where
  S: TrackerStore + 'static,
{
  let (parts, body) = req.into_parts();
  match (parts.method.as_str(), Shape::of(parts.uri.path())) {
    ("OPTIONS", _) => Ok(preflight()),
    ("GET", Shape::Collection) => {
      let colors = store.list_colors().await.map_err(ApiError::store)?;
      Ok(ok(colors))
    }
    ("POST", Shape::Collection) => {
      let body: CreateBody = json_body(body, "color_name or color_value").await?;
      let input = NewColor::new(body.color_name).with_value(body.color_value);
      let color = store
        .add_color(input)
        .await
        .ok_or_else(|| ApiError::Failed("Failed to add color".to_owned()))?;
      Ok(ok(color))
    }
    ("DELETE", Shape::Item(id)) => {
      let id = parse_id(id)?;
      let color = store
        .delete_color(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Color not found".to_owned()))?;
      Ok(ok(color))
    }
    _ => Err(ApiError::MethodNotAllowed),
  }
}
