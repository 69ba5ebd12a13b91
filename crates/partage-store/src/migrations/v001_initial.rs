//! v001 -- Initial schema creation.
//!
//! Creates the single `kv` table.  Each row is one logical namespace
//! (`listings:v2`, `users:v1`, `session:v1`) whose payload is the JSON
//! serialization of the full collection stored under that key.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Key-value namespaces
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS kv (
    namespace  TEXT PRIMARY KEY NOT NULL,   -- e.g. "listings:v2"
    payload    TEXT NOT NULL,               -- JSON blob
    updated_at TEXT NOT NULL                -- ISO-8601 / RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
