//! Path-shape and body helpers shared by the resource handlers.

use axum::body::Body;
use serde::{
  Deserialize, Deserializer,
  de::{self, DeserializeOwned},
};

use crate::error::ApiError;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// The shape of a request path below the `/api` mount point.
///
/// `/lists` is a [`Shape::Collection`], `/lists/3` an [`Shape::Item`],
/// `/lists/3/name` an [`Shape::Action`]. Empty segments are ignored, so a
/// trailing slash does not change the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
  Collection,
  Item(&'a str),
  Action(&'a str, &'a str),
  Other,
}

impl<'a> Shape<'a> {
  pub fn of(path: &'a str) -> Self {
    let segments: Vec<&'a str> =
      path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
      [_] => Shape::Collection,
      [_, id] => Shape::Item(*id),
      [_, id, action] => Shape::Action(*id, *action),
      _ => Shape::Other,
    }
  }
}

/// Parse an id segment. Ids are positive integers.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
  raw
    .parse::<i64>()
    .ok()
    .filter(|id| *id > 0)
    .ok_or_else(|| ApiError::BadRequest("Missing or invalid id".to_owned()))
}

/// Read and validate a JSON body.
///
/// Unparseable JSON is reported as `Invalid JSON body`; JSON that does not
/// match `T` is reported as `Missing or invalid <fields>` with serde's
/// description of the offending field.
pub async fn json_body<T: DeserializeOwned>(
  body:   Body,
  fields: &str,
) -> Result<T, ApiError> {
  let invalid = || ApiError::BadRequest("Invalid JSON body".to_owned());
  let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
    .await
    .map_err(|_| invalid())?;
  let value: serde_json::Value =
    serde_json::from_slice(&bytes).map_err(|_| invalid())?;
  serde_json::from_value(value)
    .map_err(|e| ApiError::BadRequest(format!("Missing or invalid {fields}: {e}")))
}

/// Deserialize an id-like field from any JSON number with no fractional
/// part, so `1` and `1.0` both read as `1`.
pub(crate) fn whole_number<'de, D: Deserializer<'de>>(
  deserializer: D,
) -> Result<i64, D::Error> {
  let n = serde_json::Number::deserialize(deserializer)?;
  n.as_i64()
    .or_else(|| {
      n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
    })
    .ok_or_else(|| de::Error::custom(format!("expected a whole number, found {n}")))
}

/// Deserialize an optional flag where `null` means `false`.
pub(crate) fn flag_or_false<'de, D: Deserializer<'de>>(
  deserializer: D,
) -> Result<bool, D::Error> {
  Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shapes() {
    assert_eq!(Shape::of("/lists"), Shape::Collection);
    assert_eq!(Shape::of("/lists/"), Shape::Collection);
    assert_eq!(Shape::of("/lists/4"), Shape::Item("4"));
    assert_eq!(Shape::of("/lists/4/name"), Shape::Action("4", "name"));
    assert_eq!(Shape::of("/lists/4/name/x"), Shape::Other);
    assert_eq!(Shape::of("/"), Shape::Other);
  }

  #[test]
  fn ids_must_be_positive_integers() {
    assert_eq!(parse_id("12").unwrap(), 12);
    for raw in ["0", "-3", "abc", "1.5", ""] {
      assert!(matches!(parse_id(raw), Err(ApiError::BadRequest(_))), "{raw}");
    }
  }

  #[derive(Debug, Deserialize)]
  struct Sample {
    #[serde(deserialize_with = "whole_number")]
    color:   i64,
    #[serde(default, deserialize_with = "flag_or_false")]
    checked: bool,
  }

  fn sample(raw: &str) -> Result<Sample, serde_json::Error> { serde_json::from_str(raw) }

  #[test]
  fn whole_numbers_accept_integral_floats() {
    assert_eq!(sample(r#"{"color":3}"#).unwrap().color, 3);
    assert_eq!(sample(r#"{"color":3.0}"#).unwrap().color, 3);
    assert!(sample(r#"{"color":3.5}"#).is_err());
    assert!(sample(r#"{"color":"3"}"#).is_err());
    assert!(sample(r#"{"color":null}"#).is_err());
    assert!(sample(r#"{}"#).is_err());
  }

  #[test]
  fn null_or_absent_flag_reads_as_false() {
    assert!(!sample(r#"{"color":1}"#).unwrap().checked);
    assert!(!sample(r#"{"color":1,"checked":null}"#).unwrap().checked);
    assert!(sample(r#"{"color":1,"checked":true}"#).unwrap().checked);
    assert!(sample(r#"{"color":1,"checked":"yes"}"#).is_err());
  }
}
