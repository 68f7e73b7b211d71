//! [`SqliteStore`]: the SQLite implementation of [`TrackerStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, params_from_iter, types::Value};

use tickbox_core::{
  Color, Day, Entry, Habit, List, NewColor, NewDay, NewEntry, NewHabit, NewList,
  TrackerStore,
};

use crate::{
  Result,
  encode::{COLORS, DAYS, ENTRIES, HABITS, LISTS, Table},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Tickbox store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted. Every
/// operation runs as one closure on the connection's thread, so statements
/// from different requests never interleave within an operation.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Generic helpers ───────────────────────────────────────────────────────

  async fn fetch_all<T>(&self, table: Table<T>) -> Result<Vec<T>>
  where
    T: Send + 'static,
  {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(table.select)?;
        let rows = stmt
          .query_map([], table.decode)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  /// Insert a row and read it back by its generated id.
  async fn insert_returning<T>(
    &self,
    table:  Table<T>,
    sql:    &'static str,
    params: Vec<Value>,
  ) -> Result<T>
  where
    T: Send + 'static,
  {
    let row = self
      .conn
      .call(move |conn| {
        conn.execute(sql, params_from_iter(params.iter()))?;
        let id = conn.last_insert_rowid();
        Ok(conn.query_row(&table.select_by_id(), [id], table.decode)?)
      })
      .await?;
    Ok(row)
  }

  /// Run an update targeting `id` and re-read the row. A missing row yields
  /// `None`.
  async fn update_returning<T>(
    &self,
    table:  Table<T>,
    sql:    &'static str,
    id:     i64,
    params: Vec<Value>,
  ) -> Result<Option<T>>
  where
    T: Send + 'static,
  {
    let row = self
      .conn
      .call(move |conn| {
        conn.execute(sql, params_from_iter(params.iter()))?;
        Ok(
          conn
            .query_row(&table.select_by_id(), [id], table.decode)
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  /// Read a row, then delete it. Returns the pre-deletion snapshot.
  async fn delete_returning<T>(&self, table: Table<T>, id: i64) -> Result<Option<T>>
  where
    T: Send + 'static,
  {
    let row = self
      .conn
      .call(move |conn| {
        let row = conn
          .query_row(&table.select_by_id(), [id], table.decode)
          .optional()?;
        if row.is_some() {
          conn.execute(&table.delete_by_id(), [id])?;
        }
        Ok(row)
      })
      .await?;
    Ok(row)
  }

  /// Delete every row of a child table belonging to `parent_id`.
  async fn delete_children(&self, sql: &'static str, parent_id: i64) -> Result<u64> {
    let removed = self
      .conn
      .call(move |conn| Ok(conn.execute(sql, [parent_id])?))
      .await?;
    Ok(removed as u64)
  }
}

// ─── Operation boundary ──────────────────────────────────────────────────────

/// Collapse a storage error into the "no result" outcome, logging it.
fn settle<T>(op: &'static str, outcome: Result<Option<T>>) -> Option<T> {
  outcome.unwrap_or_else(|e| {
    tracing::warn!(op, error = %e, "store operation failed");
    None
  })
}

fn settle_created<T>(op: &'static str, outcome: Result<T>) -> Option<T> {
  settle(op, outcome.map(Some))
}

fn settle_count(op: &'static str, outcome: Result<u64>) -> u64 {
  outcome.unwrap_or_else(|e| {
    tracing::warn!(op, error = %e, "store operation failed");
    0
  })
}

// ─── TrackerStore impl ───────────────────────────────────────────────────────

impl TrackerStore for SqliteStore {
  type Error = crate::Error;

  // ── Colors ────────────────────────────────────────────────────────────────

  async fn list_colors(&self) -> Result<Vec<Color>> { self.fetch_all(COLORS).await }

  async fn add_color(&self, input: NewColor) -> Option<Color> {
    let outcome = self
      .insert_returning(
        COLORS,
        "INSERT INTO colors (color_name, color_value) VALUES (?1, ?2)",
        vec![Value::Text(input.color_name), Value::Text(input.color_value)],
      )
      .await;
    settle_created("add_color", outcome)
  }

  async fn delete_color(&self, color_id: i64) -> Option<Color> {
    settle("delete_color", self.delete_returning(COLORS, color_id).await)
  }

  // ── Lists ─────────────────────────────────────────────────────────────────

  async fn list_lists(&self) -> Result<Vec<List>> { self.fetch_all(LISTS).await }

  async fn add_list(&self, input: NewList) -> Option<List> {
    let outcome = self
      .insert_returning(
        LISTS,
        "INSERT INTO lists (list_name, list_color) VALUES (?1, ?2)",
        vec![Value::Text(input.list_name), Value::Integer(input.list_color)],
      )
      .await;
    settle_created("add_list", outcome)
  }

  async fn rename_list(&self, list_id: i64, list_name: String) -> Option<List> {
    let outcome = self
      .update_returning(
        LISTS,
        "UPDATE lists SET list_name = ?1 WHERE list_id = ?2",
        list_id,
        vec![Value::Text(list_name), Value::Integer(list_id)],
      )
      .await;
    settle("rename_list", outcome)
  }

  async fn recolor_list(&self, list_id: i64, list_color: i64) -> Option<List> {
    let outcome = self
      .update_returning(
        LISTS,
        "UPDATE lists SET list_color = ?1 WHERE list_id = ?2",
        list_id,
        vec![Value::Integer(list_color), Value::Integer(list_id)],
      )
      .await;
    settle("recolor_list", outcome)
  }

  async fn clear_list(&self, list_id: i64) -> u64 {
    let outcome = self
      .delete_children("DELETE FROM entries WHERE list_id = ?1", list_id)
      .await;
    settle_count("clear_list", outcome)
  }

  async fn delete_list(&self, list_id: i64) -> Option<List> {
    settle("delete_list", self.delete_returning(LISTS, list_id).await)
  }

  // ── Entries ───────────────────────────────────────────────────────────────

  async fn list_entries(&self) -> Result<Vec<Entry>> { self.fetch_all(ENTRIES).await }

  async fn add_entry(&self, input: NewEntry) -> Option<Entry> {
    let outcome = self
      .insert_returning(
        ENTRIES,
        "INSERT INTO entries (list_id, entry_text, entry_checked) VALUES (?1, ?2, ?3)",
        vec![
          Value::Integer(input.list_id),
          Value::Text(input.entry_text),
          Value::Integer(i64::from(input.entry_checked)),
        ],
      )
      .await;
    settle_created("add_entry", outcome)
  }

  async fn update_entry_text(&self, entry_id: i64, entry_text: String) -> Option<Entry> {
    let outcome = self
      .update_returning(
        ENTRIES,
        "UPDATE entries SET entry_text = ?1 WHERE entry_id = ?2",
        entry_id,
        vec![Value::Text(entry_text), Value::Integer(entry_id)],
      )
      .await;
    settle("update_entry_text", outcome)
  }

  async fn toggle_entry(&self, entry_id: i64) -> Option<Entry> {
    let outcome = self
      .update_returning(
        ENTRIES,
        "UPDATE entries SET entry_checked = NOT entry_checked WHERE entry_id = ?1",
        entry_id,
        vec![Value::Integer(entry_id)],
      )
      .await;
    settle("toggle_entry", outcome)
  }

  async fn delete_entry(&self, entry_id: i64) -> Option<Entry> {
    settle("delete_entry", self.delete_returning(ENTRIES, entry_id).await)
  }

  // ── Habits ────────────────────────────────────────────────────────────────

  async fn list_habits(&self) -> Result<Vec<Habit>> { self.fetch_all(HABITS).await }

  async fn add_habit(&self, input: NewHabit) -> Option<Habit> {
    let outcome = self
      .insert_returning(
        HABITS,
        "INSERT INTO habits (habit_name, habit_color) VALUES (?1, ?2)",
        vec![Value::Text(input.habit_name), Value::Integer(input.habit_color)],
      )
      .await;
    settle_created("add_habit", outcome)
  }

  async fn rename_habit(&self, habit_id: i64, habit_name: String) -> Option<Habit> {
    let outcome = self
      .update_returning(
        HABITS,
        "UPDATE habits SET habit_name = ?1 WHERE habit_id = ?2",
        habit_id,
        vec![Value::Text(habit_name), Value::Integer(habit_id)],
      )
      .await;
    settle("rename_habit", outcome)
  }

  async fn recolor_habit(&self, habit_id: i64, habit_color: i64) -> Option<Habit> {
    let outcome = self
      .update_returning(
        HABITS,
        "UPDATE habits SET habit_color = ?1 WHERE habit_id = ?2",
        habit_id,
        vec![Value::Integer(habit_color), Value::Integer(habit_id)],
      )
      .await;
    settle("recolor_habit", outcome)
  }

  async fn clear_habit(&self, habit_id: i64) -> u64 {
    let outcome = self
      .delete_children("DELETE FROM days WHERE habit_id = ?1", habit_id)
      .await;
    settle_count("clear_habit", outcome)
  }

  async fn delete_habit(&self, habit_id: i64) -> Option<Habit> {
    settle("delete_habit", self.delete_returning(HABITS, habit_id).await)
  }

  // ── Days ──────────────────────────────────────────────────────────────────

  async fn list_days(&self) -> Result<Vec<Day>> { self.fetch_all(DAYS).await }

  async fn add_day(&self, input: NewDay) -> Option<Day> {
    let outcome = self
      .insert_returning(
        DAYS,
        "INSERT INTO days (habit_id, day_value, day_completion) VALUES (?1, ?2, ?3)",
        vec![
          Value::Integer(input.habit_id),
          Value::Text(input.day_value),
          Value::Real(input.day_completion),
        ],
      )
      .await;
    settle_created("add_day", outcome)
  }

  async fn update_day_value(&self, day_id: i64, day_value: String) -> Option<Day> {
    let outcome = self
      .update_returning(
        DAYS,
        "UPDATE days SET day_value = ?1 WHERE day_id = ?2",
        day_id,
        vec![Value::Text(day_value), Value::Integer(day_id)],
      )
      .await;
    settle("update_day_value", outcome)
  }

  async fn update_day_completion(&self, day_id: i64, day_completion: f64) -> Option<Day> {
    let outcome = self
      .update_returning(
        DAYS,
        "UPDATE days SET day_completion = ?1 WHERE day_id = ?2",
        day_id,
        vec![Value::Real(day_completion), Value::Integer(day_id)],
      )
      .await;
    settle("update_day_completion", outcome)
  }

  async fn delete_day(&self, day_id: i64) -> Option<Day> {
    settle("delete_day", self.delete_returning(DAYS, day_id).await)
  }
}
