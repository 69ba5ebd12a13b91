//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] and guarantees
//! that migrations are run before any other operation.  All namespace
//! accessors go through [`Database::read_namespace`] /
//! [`Database::write_namespace`], which treat the underlying table as a
//! plain key-value map.

use std::path::{Path, PathBuf};

use chrono::Utc;
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};
use crate::migrations;

/// Wrapper around a [`rusqlite::Connection`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/partage/partage.db`
    /// - macOS:   `~/Library/Application Support/com.partage.partage/partage.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\partage\partage\data\partage.db`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("com", "partage", "partage").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("partage.db");

        tracing::info!(path = %db_path.display(), "opening database");

        Self::open_at(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Recommended SQLite settings.
        conn.pragma_update(None, "journal_mode", "WAL")?;

        // Run schema migrations.
        migrations::run_migrations(&conn)?;

        Ok(Self { conn })
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    ///
    /// Callers should prefer the typed namespace accessors, but direct
    /// access is occasionally needed for ad-hoc queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }

    /// Read the raw payload stored under a namespace key, if any.
    pub(crate) fn read_namespace(&self, namespace: &str) -> Result<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM kv WHERE namespace = ?1",
                params![namespace],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }

    /// Replace the payload stored under a namespace key.
    pub(crate) fn write_namespace(&self, namespace: &str, payload: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (namespace, payload, updated_at)
             VALUES (?1, ?2, ?3)",
            params![namespace, payload, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
