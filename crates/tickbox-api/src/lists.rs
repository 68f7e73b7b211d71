//! Handler for `/lists` endpoints.
//!
//! | Method   | Path               | Body |
//! |----------|--------------------|------|
//! | `GET`    | `/lists`           | none |
//! | `POST`   | `/lists`           | `{"list_name":"...","list_color":1}` |
//! | `PATCH`  | `/lists/:id/name`  | `{"list_name":"..."}` |
//! | `PATCH`  | `/lists/:id/color` | `{"list_color":1}` |
//! | `PATCH`  | `/lists/:id/clear` | none; `data` is the number of entries removed |
//! | `DELETE` | `/lists/:id`       | none; entries are deleted with the list |

use std::sync::Arc;

use axum::{
  extract::{Request, State},
  response::Response,
};
use serde::Deserialize;
use tickbox_core::{NewList, TrackerStore};

use crate::{
  dispatch::{Shape, json_body, parse_id, whole_number},
  envelope::{ok, preflight},
  error::ApiError,
};

#[derive(Debug, Deserialize)]
struct CreateBody {
  list_name:  String,
  #[serde(deserialize_with = "whole_number")]
  list_color: i64,
}

#[derive(Debug, Deserialize)]
struct NameBody {
  list_name: String,
}

#[derive(Debug, Deserialize)]
struct ColorBody {
  #[serde(deserialize_with = "whole_number")]
  list_color: i64,
}

fn update_failed() -> ApiError { ApiError::Failed("Failed to update list".to_owned()) }

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
      let lists = store.list_lists().await.map_err(ApiError::store)?;
      Ok(ok(lists))
    }
    ("POST", Shape::Collection) => {
      let body: CreateBody = json_body(body, "list_name or list_color").await?;
      let input = NewList::new(body.list_name).with_color(body.list_color);
      let list = store
        .add_list(input)
        .await
        .ok_or_else(|| ApiError::Failed("Failed to create list".to_owned()))?;
      Ok(ok(list))
    }
    ("PATCH", Shape::Action(id, action)) => {
      let id = parse_id(id)?;
      match action {
        "name" => {
          let body: NameBody = json_body(body, "list_name").await?;
          let list = store
            .rename_list(id, body.list_name)
            .await
            .ok_or_else(update_failed)?;
          Ok(ok(list))
        }
        "color" => {
          let body: ColorBody = json_body(body, "list_color").await?;
          let list = store
            .recolor_list(id, body.list_color)
            .await
            .ok_or_else(update_failed)?;
          Ok(ok(list))
        }
        "clear" => Ok(ok(store.clear_list(id).await)),
        _ => Err(ApiError::MethodNotAllowed),
      }
    }
    ("DELETE", Shape::Item(id)) => {
      let id = parse_id(id)?;
      let list = store
        .delete_list(id)
        .await
        .ok_or_else(|| ApiError::NotFound("List not found".to_owned()))?;
      Ok(ok(list))
    }
    _ => Err(ApiError::MethodNotAllowed),
  }
}
