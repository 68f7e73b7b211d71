//! Handler for `/days` endpoints.
//!
//! | Method   | Path                   | Body |
//! |----------|------------------------|------|
//! | `GET`    | `/days`                | none |
//! | `POST`   | `/days`                | `{"habit_id":1,"day_value":"15/01/2025","day_completion":1.0}` (all required) |
//! | `PATCH`  | `/days/:id/value`      | `{"day_value":"..."}` |
//! | `PATCH`  | `/days/:id/completion` | `{"day_completion":0.5}` |
//! | `DELETE` | `/days/:id`            | none |
//!
//! Nothing prevents two days for the same habit and date; clients are
//! expected to look for an existing row before creating one.

use std::sync::Arc;

use axum::{
  extract::{Request, State},
  response::Response,
};
use serde::Deserialize;
use tickbox_core::{NewDay, TrackerStore};

use crate::{
  dispatch::{Shape, json_body, parse_id, whole_number},
  envelope::{ok, preflight},
  error::ApiError,
};

#[derive(Debug, Deserialize)]
struct CreateBody {
  #[serde(deserialize_with = "whole_number")]
  habit_id:       i64,
  day_value:      String,
  day_completion: f64,
}

#[derive(Debug, Deserialize)]
struct ValueBody {
  day_value: String,
}

#[derive(Debug, Deserialize)]
struct CompletionBody {
  day_completion: f64,
}

fn update_failed() -> ApiError { ApiError::Failed("Failed to update day".to_owned()) }

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
      let days = store.list_days().await.map_err(ApiError::store)?;
      Ok(ok(days))
    }
    ("POST", Shape::Collection) => {
      let body: CreateBody =
        json_body(body, "habit_id, day_value or day_completion").await?;
      let input =
        NewDay::new(body.habit_id, body.day_value).with_completion(body.day_completion);
      let day = store
        .add_day(input)
        .await
        .ok_or_else(|| ApiError::Failed("Failed to create day".to_owned()))?;
      Ok(ok(day))
    }
    ("PATCH", Shape::Action(id, action)) => {
      let id = parse_id(id)?;
      match action {
        "value" => {
          let body: ValueBody = json_body(body, "day_value").await?;
          let day = store
            .update_day_value(id, body.day_value)
            .await
            .ok_or_else(update_failed)?;
          Ok(ok(day))
        }
        "completion" => {
          let body: CompletionBody = json_body(body, "day_completion").await?;
          let day = store
            .update_day_completion(id, body.day_completion)
            .await
            .ok_or_else(update_failed)?;
          Ok(ok(day))
        }
        _ => Err(ApiError::MethodNotAllowed),
      }
    }
    ("DELETE", Shape::Item(id)) => {
      let id = parse_id(id)?;
      let day = store
        .delete_day(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Day not found".to_owned()))?;
      Ok(ok(day))
    }
    _ => Err(ApiError::MethodNotAllowed),
  }
}
