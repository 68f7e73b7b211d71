//! Row types for the five entity families and the inputs used to create them.
//!
//! Field names match the column names and the JSON wire format, so a row
//! serialises as e.g. `{"list_id":1,"list_name":"Groceries","list_color":1}`.

use serde::{Deserialize, Serialize};

/// Color id assigned to lists and habits created without one.
pub const DEFAULT_COLOR_ID: i64 = 1;

/// Value assigned to colors created without one.
pub const DEFAULT_COLOR_VALUE: &str = "#000000";

/// Completion assigned to days created without one.
pub const DEFAULT_COMPLETION: f64 = 1.0;

// ─── Persisted rows ──────────────────────────────────────────────────────────

/// A named palette entry. Lists and habits refer to it by id, but nothing
/// stops a referenced color from being deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
  pub color_id:    i64,
  pub color_name:  String,
  pub color_value: String,
}

/// A checklist. Owns its [`Entry`] rows; deleting it deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
  pub list_id:    i64,
  pub list_name:  String,
  pub list_color: i64,
}

/// One line of a checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
  pub entry_id:      i64,
  pub list_id:       i64,
  pub entry_text:    String,
  pub entry_checked: bool,
}

/// A tracked habit. Owns its [`Day`] rows; deleting it deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
  pub habit_id:    i64,
  pub habit_name:  String,
  pub habit_color: i64,
}

/// A record of a habit on a given date.
///
/// `day_value` is an opaque date string (`DD/MM/YYYY` or `MM/DD/YYYY`,
/// whichever the client uses). At most one row per habit and date is a client
/// convention; the store does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
  pub day_id:         i64,
  pub habit_id:       i64,
  pub day_value:      String,
  pub day_completion: f64,
}

// ─── Creation inputs ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct NewColor {
  pub color_name:  String,
  pub color_value: String,
}

impl NewColor {
  pub fn new(color_name: impl Into<String>) -> Self {
    Self {
      color_name:  color_name.into(),
      color_value: DEFAULT_COLOR_VALUE.to_owned(),
    }
  }

  pub fn with_value(mut self, color_value: impl Into<String>) -> Self {
    self.color_value = color_value.into();
    self
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewList {
  pub list_name:  String,
  pub list_color: i64,
}

impl NewList {
  pub fn new(list_name: impl Into<String>) -> Self {
    Self { list_name: list_name.into(), list_color: DEFAULT_COLOR_ID }
  }

  pub fn with_color(mut self, list_color: i64) -> Self {
    self.list_color = list_color;
    self
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
  pub list_id:       i64,
  pub entry_text:    String,
  pub entry_checked: bool,
}

impl NewEntry {
  pub fn new(list_id: i64, entry_text: impl Into<String>) -> Self {
    Self { list_id, entry_text: entry_text.into(), entry_checked: false }
  }

  pub fn checked(mut self, entry_checked: bool) -> Self {
    self.entry_checked = entry_checked;
    self
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewHabit {
  pub habit_name:  String,
  pub habit_color: i64,
}

impl NewHabit {
  pub fn new(habit_name: impl Into<String>) -> Self {
    Self { habit_name: habit_name.into(), habit_color: DEFAULT_COLOR_ID }
  }

  pub fn with_color(mut self, habit_color: i64) -> Self {
    self.habit_color = habit_color;
    self
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDay {
  pub habit_id:       i64,
  pub day_value:      String,
  pub day_completion: f64,
}

impl NewDay {
  pub fn new(habit_id: i64, day_value: impl Into<String>) -> Self {
    Self {
      habit_id,
      day_value: day_value.into(),
      day_completion: DEFAULT_COMPLETION,
    }
  }

  pub fn with_completion(mut self, day_completion: f64) -> Self {
    self.day_completion = day_completion;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn constructors_apply_defaults() {
    assert_eq!(NewColor::new("grey").color_value, "#000000");
    assert_eq!(NewList::new("Groceries").list_color, DEFAULT_COLOR_ID);
    assert_eq!(NewHabit::new("Run").habit_color, DEFAULT_COLOR_ID);
    assert!(!NewEntry::new(1, "Milk").entry_checked);
    assert_eq!(NewDay::new(1, "01/01/1999").day_completion, 1.0);
  }
}
