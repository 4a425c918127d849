//! Connection setup and schema creation.

use crate::error::DatabaseError;
use crate::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{ConnectOptions, SqliteConnection};

use super::ArticleStore;

impl ArticleStore {
    /// Open a fresh connection with the schema in place
    ///
    /// Creates the parent directory and database file if they don't exist.
    pub(crate) async fn connect(&self) -> Result<SqliteConnection> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::Database(DatabaseError::ConnectionFailed(format!(
                    "Failed to create database directory: {}",
                    e
                )))
            })?;
        }

        // Paths may contain `?`, so no sqlite: URL here
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(self.busy_timeout);

        let mut conn = options.connect().await.map_err(|e| {
            Error::Database(DatabaseError::ConnectionFailed(format!(
                "Failed to connect to database: {}",
                e
            )))
        })?;

        Self::ensure_schema(&mut conn).await?;

        Ok(conn)
    }

    /// Create the articles table if it is missing
    ///
    /// Safe to run on every connection and from several processes at once.
    async fn ensure_schema(conn: &mut SqliteConnection) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS articles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                topic TEXT,
                published_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::MigrationFailed(format!(
                "Failed to create articles table: {}",
                e
            )))
        })?;

        Ok(())
    }
}
