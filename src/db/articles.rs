//! Article inserts and read-side queries.

use crate::types::{ArticleId, ArticleRecord, StoreOutcome};
use crate::{Error, Result};
use sqlx::Connection;
use tracing::{debug, error, info, warn};

use super::{ArticleRow, ArticleStore};

impl ArticleStore {
    /// Store an article, logging and absorbing any failure
    ///
    /// An empty title or content is skipped without touching the database.
    /// Storage errors are logged and reported as [`StoreOutcome::Failed`].
    pub async fn store(&self, title: &str, content: &str, topic: Option<&str>) -> StoreOutcome {
        match self.try_store(title, content, topic).await {
            Ok(Some(id)) => StoreOutcome::Stored { id: ArticleId(id) },
            Ok(None) => StoreOutcome::Skipped,
            Err(e) => {
                error!(
                    path = %self.path.display(),
                    title = %title,
                    error = %e,
                    "failed to store article"
                );
                StoreOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Insert one article row
    ///
    /// Returns the new row id, or `None` when title or content is empty and
    /// nothing was written.
    pub async fn try_store(
        &self,
        title: &str,
        content: &str,
        topic: Option<&str>,
    ) -> Result<Option<i64>> {
        if title.trim().is_empty() || content.trim().is_empty() {
            debug!(title = %title, "skipping article with empty title or content");
            return Ok(None);
        }

        let mut conn = self.connect().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO articles (title, content, topic)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(topic)
        .execute(&mut conn)
        .await
        .map_err(Error::Sqlx)?;

        let id = committed(result.last_insert_rowid(), conn.close().await);

        info!(id, title = %title, "article stored");
        Ok(Some(id))
    }

    /// Fetch one article by id
    pub async fn get_article(&self, id: ArticleId) -> Result<Option<ArticleRecord>> {
        let mut conn = self.connect().await?;

        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, content, topic, published_at
            FROM articles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await
        .map_err(Error::Sqlx)?;

        conn.close().await.map_err(Error::Sqlx)?;

        Ok(row.map(ArticleRecord::from))
    }

    /// List the most recently stored articles, newest first
    pub async fn recent_articles(&self, limit: usize) -> Result<Vec<ArticleRecord>> {
        let mut conn = self.connect().await?;

        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, content, topic, published_at
            FROM articles
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&mut conn)
        .await
        .map_err(Error::Sqlx)?;

        conn.close().await.map_err(Error::Sqlx)?;

        Ok(rows.into_iter().map(ArticleRecord::from).collect())
    }

    /// Count stored articles
    pub async fn count_articles(&self) -> Result<i64> {
        let mut conn = self.connect().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(&mut conn)
            .await
            .map_err(Error::Sqlx)?;

        conn.close().await.map_err(Error::Sqlx)?;

        Ok(count)
    }
}

/// The row is already committed, so a failed close is logged and the id kept
pub(super) fn committed(id: i64, closed: std::result::Result<(), sqlx::Error>) -> i64 {
    if let Err(e) = closed {
        warn!(id, error = %e, "failed to close database connection after insert");
    }
    id
}
