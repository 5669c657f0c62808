use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::Config;

/// Handle on the SQLite file. It holds no open connection; every operation
/// asks for a [`session`](Store::session) and the connection closes when that
/// value drops, on success and error paths alike.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Point a handle at the configured database file. Nothing is opened yet.
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.db_path.clone(),
        }
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a short-lived connection scoped to one operation.
    pub fn session(&self) -> rusqlite::Result<Connection> {
        log::trace!("opening session on {}", self.path.display());
        Connection::open(&self.path)
    }
}

/// Create the database file and the `items` table if they are missing. Safe to
/// run on every startup.
pub fn ensure_schema(store: &Store) -> Result<()> {
    if let Some(parent) = store.path().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }
    }

    let conn = store
        .session()
        .context("failed to open SQLite database")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            quantity INTEGER NOT NULL,
            release_year INTEGER NOT NULL
        )",
        [],
    )
    .context("failed to create items table")?;

    log::debug!("schema ready at {}", store.path().display());
    Ok(())
}
