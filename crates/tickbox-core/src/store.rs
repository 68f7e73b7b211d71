//! The `TrackerStore` trait.
//!
//! Implemented by storage backends (e.g. `tickbox-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.
//!
//! # Outcome contract
//!
//! Mutations never fail loudly. A backend catches storage errors at the
//! operation boundary and reports them as `None` (for row-returning
//! operations) or `0` (for bulk clears), so "row did not exist" and "storage
//! failed" are indistinguishable to callers. Only the list-all reads return a
//! `Result`.

use std::future::Future;

use crate::model::{
  Color, Day, Entry, Habit, List, NewColor, NewDay, NewEntry, NewHabit, NewList,
};

/// Abstraction over a Tickbox store backend.
///
/// Creation re-reads the inserted row, so the returned value reflects the
/// generated id and column defaults. Updates re-read the row after writing.
/// Deletes return the row as it was immediately before removal.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TrackerStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Colors ────────────────────────────────────────────────────────────

  fn list_colors(
    &self,
  ) -> impl Future<Output = Result<Vec<Color>, Self::Error>> + Send + '_;

  fn add_color(
    &self,
    input: NewColor,
  ) -> impl Future<Output = Option<Color>> + Send + '_;

  /// Lists and habits referring to the color keep the dangling id.
  fn delete_color(
    &self,
    color_id: i64,
  ) -> impl Future<Output = Option<Color>> + Send + '_;

  // ── Lists ─────────────────────────────────────────────────────────────

  fn list_lists(
    &self,
  ) -> impl Future<Output = Result<Vec<List>, Self::Error>> + Send + '_;

  fn add_list(
    &self,
    input: NewList,
  ) -> impl Future<Output = Option<List>> + Send + '_;

  fn rename_list(
    &self,
    list_id: i64,
    list_name: String,
  ) -> impl Future<Output = Option<List>> + Send + '_;

  fn recolor_list(
    &self,
    list_id: i64,
    list_color: i64,
  ) -> impl Future<Output = Option<List>> + Send + '_;

  /// Delete every entry of a list, keeping the list. Returns the number of
  /// entries removed; zero is a normal outcome.
  fn clear_list(&self, list_id: i64) -> impl Future<Output = u64> + Send + '_;

  /// Delete a list; its entries go with it via the schema's cascade rule.
  fn delete_list(
    &self,
    list_id: i64,
  ) -> impl Future<Output = Option<List>> + Send + '_;

  // ── Entries ───────────────────────────────────────────────────────────

  fn list_entries(
    &self,
  ) -> impl Future<Output = Result<Vec<Entry>, Self::Error>> + Send + '_;

  /// Returns `None` if `list_id` does not reference an existing list.
  fn add_entry(
    &self,
    input: NewEntry,
  ) -> impl Future<Output = Option<Entry>> + Send + '_;

  fn update_entry_text(
    &self,
    entry_id: i64,
    entry_text: String,
  ) -> impl Future<Output = Option<Entry>> + Send + '_;

  /// Flip `entry_checked` in a single statement.
  fn toggle_entry(
    &self,
    entry_id: i64,
  ) -> impl Future<Output = Option<Entry>> + Send + '_;

  fn delete_entry(
    &self,
    entry_id: i64,
  ) -> impl Future<Output = Option<Entry>> + Send + '_;

  // ── Habits ────────────────────────────────────────────────────────────

  fn list_habits(
    &self,
  ) -> impl Future<Output = Result<Vec<Habit>, Self::Error>> + Send + '_;

  fn add_habit(
    &self,
    input: NewHabit,
  ) -> impl Future<Output = Option<Habit>> + Send + '_;

  fn rename_habit(
    &self,
    habit_id: i64,
    habit_name: String,
  ) -> impl Future<Output = Option<Habit>> + Send + '_;

  fn recolor_habit(
    &self,
    habit_id: i64,
    habit_color: i64,
  ) -> impl Future<Output = Option<Habit>> + Send + '_;

  /// Delete every day of a habit, keeping the habit. Returns the number of
  /// days removed.
  fn clear_habit(&self, habit_id: i64) -> impl Future<Output = u64> + Send + '_;

  /// Delete a habit; its days go with it via the schema's cascade rule.
  fn delete_habit(
    &self,
    habit_id: i64,
  ) -> impl Future<Output = Option<Habit>> + Send + '_;

  // ── Days ──────────────────────────────────────────────────────────────

  fn list_days(
    &self,
  ) -> impl Future<Output = Result<Vec<Day>, Self::Error>> + Send + '_;

  /// Returns `None` if `habit_id` does not reference an existing habit.
  fn add_day(
    &self,
    input: NewDay,
  ) -> impl Future<Output = Option<Day>> + Send + '_;

  fn update_day_value(
    &self,
    day_id: i64,
    day_value: String,
  ) -> impl Future<Output = Option<Day>> + Send + '_;

  fn update_day_completion(
    &self,
    day_id: i64,
    day_completion: f64,
  ) -> impl Future<Output = Option<Day>> + Send + '_;

  fn delete_day(
    &self,
    day_id: i64,
  ) -> impl Future<Output = Option<Day>> + Send + '_;
}
