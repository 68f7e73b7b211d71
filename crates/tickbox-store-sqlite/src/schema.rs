//! SQL schema for the Tickbox SQLite store.
//!
//! Executed at every connection startup. `foreign_keys` is a per-connection
//! setting, so it has to be re-enabled on each open for the cascades to fire.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS colors (
    color_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    color_name  TEXT NOT NULL,
    color_value TEXT NOT NULL
);

-- list_color and habit_color are deliberately not foreign keys: deleting a
-- color leaves the reference dangling.
CREATE TABLE IF NOT EXISTS lists (
    list_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    list_name  TEXT NOT NULL,
    list_color INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS entries (
    entry_id      INTEGER PRIMARY KEY AUTOINCREMENT,
    list_id       INTEGER NOT NULL REFERENCES lists(list_id) ON DELETE CASCADE,
    entry_text    TEXT NOT NULL,
    entry_checked BOOLEAN NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS habits (
    habit_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    habit_name  TEXT NOT NULL,
    habit_color INTEGER NOT NULL DEFAULT 1
);

-- No UNIQUE (habit_id, day_value): one row per date is a client convention.
CREATE TABLE IF NOT EXISTS days (
    day_id         INTEGER PRIMARY KEY AUTOINCREMENT,
    habit_id       INTEGER NOT NULL REFERENCES habits(habit_id) ON DELETE CASCADE,
    day_value      TEXT NOT NULL,
    day_completion REAL NOT NULL DEFAULT 1.0
);

CREATE INDEX IF NOT EXISTS entries_list_idx ON entries(list_id);
CREATE INDEX IF NOT EXISTS days_habit_idx   ON days(habit_id);

PRAGMA user_version = 1;
";
