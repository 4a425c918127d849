//! Article persistence for contentforge
//!
//! An append-only SQLite table of generated articles. Rows are inserted once
//! and never updated or deleted.
//!
//! ## Submodules
//!
//! Methods on [`ArticleStore`] are organized by concern:
//! - [`migrations`] - Connection setup and schema creation
//! - [`articles`] - Article inserts and read-side queries
//!
//! Every call opens its own connection and closes it before returning. There
//! is no pool to share, so several processes may append to the same file;
//! SQLite's busy timeout and WAL journal serialize the writers.

use crate::config::PersistenceConfig;
use crate::types::{ArticleId, ArticleRecord};
use chrono::NaiveDateTime;
use sqlx::FromRow;
use std::path::{Path, PathBuf};
use std::time::Duration;

mod articles;
mod migrations;

/// Default time a connection waits on a locked database before failing
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the article database file
///
/// Cheap to clone; it only holds the path and connection settings.
#[derive(Clone, Debug)]
pub struct ArticleStore {
    path: PathBuf,
    busy_timeout: Duration,
}

impl ArticleStore {
    /// Create a store backed by the SQLite file at `path`
    ///
    /// Nothing is opened here. The file and schema are created on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Create a store from the persistence section of the configuration
    pub fn from_config(config: &PersistenceConfig) -> Self {
        Self::new(config.database_path.clone())
    }

    /// Override how long a call waits for a write lock held by another connection
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Article row as stored in SQLite
#[derive(Debug, FromRow)]
pub(crate) struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    topic: Option<String>,
    published_at: NaiveDateTime,
}

impl From<ArticleRow> for ArticleRecord {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: ArticleId(row.id),
            title: row.title,
            content: row.content,
            topic: row.topic,
            // CURRENT_TIMESTAMP is always UTC
            published_at: row.published_at.and_utc(),
        }
    }
}
