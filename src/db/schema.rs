//! SQL DDL for initializing the snapshot store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `html_data`: one row per calendar date, `date` UNIQUE
/// - `endpoint_counter`: singleton row, `id` pinned to 1 via CHECK
/// - The counter row is seeded here so re-running the DDL stays idempotent
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS html_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL UNIQUE,
    html_content TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS endpoint_counter (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    count INTEGER NOT NULL DEFAULT 0
);

INSERT OR IGNORE INTO endpoint_counter (id, count) VALUES (1, 0);
"#;
