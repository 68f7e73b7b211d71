//! Handler for `/habits` endpoints.
//!
//! | Method   | Path                | Body |
//! |----------|---------------------|------|
//! | `GET`    | `/habits`           | none |
//! | `POST`   | `/habits`           | `{"habit_name":"...","habit_color":1}` |
//! | `PATCH`  | `/habits/:id/name`  | `{"habit_name":"..."}` |
//! | `PATCH`  | `/habits/:id/color` | `{"habit_color":1}` |
//! | `PATCH`  | `/habits/:id/clear` | none; `data` is the number of days removed |
//! | `DELETE` | `/habits/:id`       | none; days are deleted with the habit |

use std::sync::Arc;

use axum::{
  extract::{Request, State},
  response::Response,
};
use serde::Deserialize;
use tickbox_core::{NewHabit, TrackerStore};

use crate::{
  dispatch::{Shape, json_body, parse_id, whole_number},
  envelope::{ok, preflight},
  error::ApiError,
};

#[derive(Debug, Deserialize)]
struct CreateBody {
  habit_name:  String,
  #[serde(deserialize_with = "whole_number")]
  habit_color: i64,
}

#[derive(Debug, Deserialize)]
struct NameBody {
  habit_name: String,
}

#[derive(Debug, Deserialize)]
struct ColorBody {
  #[serde(deserialize_with = "whole_number")]
  habit_color: i64,
}

fn update_failed() -> ApiError { ApiError::Failed("Failed to update habit".to_owned()) }

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
      let habits = store.list_habits().await.map_err(ApiError::store)?;
      Ok(ok(habits))
    }
    ("POST", Shape::Collection) => {
      let body: CreateBody = json_body(body, "habit_name or habit_color").await?;
      let input = NewHabit::new(body.habit_name).with_color(body.habit_color);
      let habit = store
        .add_habit(input)
        .await
        .ok_or_else(|| ApiError::Failed("Failed to create habit".to_owned()))?;
      Ok(ok(habit))
    }
    ("PATCH", Shape::Action(id, action)) => {
      let id = parse_id(id)?;
      match action {
        "name" => {
          let body: NameBody = json_body(body, "habit_name").await?;
          let habit = store
            .rename_habit(id, body.habit_name)
            .await
            .ok_or_else(update_failed)?;
          Ok(ok(habit))
        }
        "color" => {
          let body: ColorBody = json_body(body, "habit_color").await?;
          let habit = store
            .recolor_habit(id, body.habit_color)
            .await
            .ok_or_else(update_failed)?;
          Ok(ok(habit))
        }
        "clear" => Ok(ok(store.clear_habit(id).await)),
        _ => Err(ApiError::MethodNotAllowed),
      }
    }
    ("DELETE", Shape::Item(id)) => {
      let id = parse_id(id)?;
      let habit = store
        .delete_habit(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Habit not found".to_owned()))?;
      Ok(ok(habit))
    }
    _ => Err(ApiError::MethodNotAllowed),
  }
}
