//! Board configuration derived from a single data directory.
//!
//! # Invariants
//! - All on-disk state (database, logs) lives under `data_dir`.
//! - No environment variables are consulted.

use crate::db::{open_db, DbResult};
use crate::logging::{default_log_level, init_logging};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

const DB_FILE_NAME: &str = "taskboard.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Where the board keeps its data and how it logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    data_dir: PathBuf,
    log_level: String,
}

impl BoardConfig {
    /// Uses `data_dir` for storage and the build-mode default log level.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            log_level: default_log_level().to_string(),
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Starts file logging under `log_dir()`.
    pub fn init_logging(&self) -> Result<(), String> {
        init_logging(&self.log_level, self.log_dir())
    }

    /// Creates `data_dir` if needed and opens the migrated board database.
    pub fn open_db(&self) -> DbResult<Connection> {
        std::fs::create_dir_all(&self.data_dir)?;
        open_db(self.db_path())
    }
}
