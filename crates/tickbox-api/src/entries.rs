//! Handler for `/entries` endpoints.
//!
//! | Method   | Path                  | Body |
//! |----------|-----------------------|------|
//! | `GET`    | `/entries`            | none |
//! | `POST`   | `/entries`            | `{"list_id":1,"entry_text":"...","entry_checked":false}` (`entry_checked` optional) |
//! | `PATCH`  | `/entries/:id/text`   | `{"entry_text":"..."}` |
//! | `PATCH`  | `/entries/:id/toggle` | none |
//! | `DELETE` | `/entries/:id`        | none |

use std::sync::Arc;

use axum::{
  extract::{Request, State},
  response::Response,
};
use serde::Deserialize;
use tickbox_core::{NewEntry, TrackerStore};

use crate::{
  dispatch::{Shape, flag_or_false, json_body, parse_id, whole_number},
  envelope::{ok, preflight},
  error::ApiError,
};

#[derive(Debug, Deserialize)]
struct CreateBody {
  #[serde(deserialize_with = "whole_number")]
  list_id:       i64,
  entry_text:    String,
  #[serde(default, deserialize_with = "flag_or_false")]
  entry_checked: bool,
}

#[derive(Debug, Deserialize)]
struct TextBody {
  entry_text: String,
}

fn entry_not_found() -> ApiError { ApiError::NotFound("Entry not found".to_owned()) }

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
      let entries = store.list_entries().await.map_err(ApiError::store)?;
      Ok(ok(entries))
    }
    ("POST", Shape::Collection) => {
      let body: CreateBody = json_body(body, "list_id or entry_text").await?;
      let input = NewEntry::new(body.list_id, body.entry_text).checked(body.entry_checked);
      let entry = store
        .add_entry(input)
        .await
        .ok_or_else(|| ApiError::Failed("Failed to create entry".to_owned()))?;
      Ok(ok(entry))
    }
    ("PATCH", Shape::Action(id, action)) => {
      let id = parse_id(id)?;
      match action {
        "text" => {
          let body: TextBody = json_body(body, "entry_text").await?;
          let entry = store
            .update_entry_text(id, body.entry_text)
            .await
            .ok_or_else(|| ApiError::Failed("Failed to update entry".to_owned()))?;
          Ok(ok(entry))
        }
        "toggle" => {
          let entry = store.toggle_entry(id).await.ok_or_else(entry_not_found)?;
          Ok(ok(entry))
        }
        _ => Err(ApiError::MethodNotAllowed),
      }
    }
    ("DELETE", Shape::Item(id)) => {
      let id = parse_id(id)?;
      let entry = store.delete_entry(id).await.ok_or_else(entry_not_found)?;
      Ok(ok(entry))
    }
    _ => Err(ApiError::MethodNotAllowed),
  }
}
