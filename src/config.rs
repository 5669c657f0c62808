//! Runtime settings handed to each component at construction.

use std::path::{Path, PathBuf};

use crate::messages::Language;

/// SQLite file name used when nothing else is configured. Resolved against the
/// working directory.
pub const DEFAULT_DB_FILE: &str = "store.db";

#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the database file.
    pub db_path: PathBuf,
    /// Language of every operator-facing string.
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            language: Language::default(),
        }
    }
}

impl Config {
    /// Use a different database file.
    pub fn with_db_path(mut self, path: impl AsRef<Path>) -> Self {
        self.db_path = path.as_ref().to_path_buf();
        self
    }

    /// Switch the console language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
