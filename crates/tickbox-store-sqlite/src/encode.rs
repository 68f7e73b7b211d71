//! Decoding helpers between SQLite rows and the core row types.
//!
//! Each `SELECT_*` constant lists columns in the order its decoder reads them.

use rusqlite::Row;
use tickbox_core::{Color, Day, Entry, Habit, List};

pub type Decode<T> = fn(&Row<'_>) -> rusqlite::Result<T>;

// ─── Color ────────────────────────────────────────────────────────────────────

pub const SELECT_COLORS: &str =
  "SELECT color_id, color_name, color_value FROM colors";

pub fn decode_color(row: &Row<'_>) -> rusqlite::Result<Color> {
  Ok(Color {
    color_id:    row.get(0)?,
    color_name:  row.get(1)?,
    color_value: row.get(2)?,
  })
}

// ─── List ─────────────────────────────────────────────────────────────────────

pub const SELECT_LISTS: &str = "SELECT list_id, list_name, list_color FROM lists";

pub fn decode_list(row: &Row<'_>) -> rusqlite::Result<List> {
  Ok(List {
    list_id:    row.get(0)?,
    list_name:  row.get(1)?,
    list_color: row.get(2)?,
  })
}

// ─── Entry ────────────────────────────────────────────────────────────────────

pub const SELECT_ENTRIES: &str =
  "SELECT entry_id, list_id, entry_text, entry_checked FROM entries";

pub fn decode_entry(row: &Row<'_>) -> rusqlite::Result<Entry> {
  Ok(Entry {
    entry_id:      row.get(0)?,
    list_id:       row.get(1)?,
    entry_text:    row.get(2)?,
    entry_checked: row.get(3)?,
  })
}

// ─── Habit ────────────────────────────────────────────────────────────────────

pub const SELECT_HABITS: &str =
  "SELECT habit_id, habit_name, habit_color FROM habits";

pub fn decode_habit(row: &Row<'_>) -> rusqlite::Result<Habit> {
  Ok(Habit {
    habit_id:    row.get(0)?,
    habit_name:  row.get(1)?,
    habit_color: row.get(2)?,
  })
}

// ─── Day ──────────────────────────────────────────────────────────────────────

pub const SELECT_DAYS: &str =
  "SELECT day_id, habit_id, day_value, day_completion FROM days";

pub fn decode_day(row: &Row<'_>) -> rusqlite::Result<Day> {
  Ok(Day {
    day_id:         row.get(0)?,
    habit_id:       row.get(1)?,
    day_value:      row.get(2)?,
    day_completion: row.get(3)?,
  })
}

// ─── Table descriptors ────────────────────────────────────────────────────────

/// Everything the generic store helpers need to read rows of one table.
pub struct Table<T> {
  pub name:   &'static str,
  pub id:     &'static str,
  pub select: &'static str,
  pub decode: Decode<T>,
}

impl<T> Clone for Table<T> {
  fn clone(&self) -> Self { *self }
}

impl<T> Copy for Table<T> {}

impl<T> Table<T> {
  pub fn select_by_id(&self) -> String {
    format!("{} WHERE {} = ?1", self.select, self.id)
  }

  pub fn delete_by_id(&self) -> String {
    format!("DELETE FROM {} WHERE {} = ?1", self.name, self.id)
  }
}

pub const COLORS: Table<Color> = Table {
  name:   "colors",
  id:     "color_id",
  select: SELECT_COLORS,
  decode: decode_color,
};

pub const LISTS: Table<List> = Table {
  name:   "lists",
  id:     "list_id",
  select: SELECT_LISTS,
  decode: decode_list,
};

pub const ENTRIES: Table<Entry> = Table {
  name:   "entries",
  id:     "entry_id",
  select: SELECT_ENTRIES,
  decode: decode_entry,
};

pub const HABITS: Table<Habit> = Table {
  name:   "habits",
  id:     "habit_id",
  select: SELECT_HABITS,
  decode: decode_habit,
};

pub const DAYS: Table<Day> = Table {
  name:   "days",
  id:     "day_id",
  select: SELECT_DAYS,
  decode: decode_day,
};
