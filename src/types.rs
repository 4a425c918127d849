//! Core types for contentforge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a stored article
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl PartialEq<i64> for ArticleId {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Implement sqlx Type, Encode, and Decode for database operations
impl sqlx::Type<sqlx::Sqlite> for ArticleId {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <i64 as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for ArticleId {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        sqlx::Encode::<sqlx::Sqlite>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for ArticleId {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let id = <i64 as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        Ok(Self(id))
    }
}

/// Identifier of an uploaded media item on the CMS
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(pub i64);

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a created post on the CMS
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which extraction rule produced an article title
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSource {
    /// First `<h1>` element
    Heading1,
    /// First `<h2>` element (no usable `<h1>`)
    Heading2,
    /// First `<p>` element, truncated
    Paragraph,
    /// First non-blank line of the tag-stripped text, truncated
    FirstLine,
    /// Nothing usable; the literal "Untitled Article"
    Fallback,
}

/// A cleaned (title, body) pair derived from raw model output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedArticle {
    /// Plain-text title, never empty
    pub title: String,
    /// HTML body with the title heading removed, never empty
    pub body: String,
    /// Rule the title was taken from
    pub title_source: TitleSource,
}

impl NormalizedArticle {
    /// Number of whitespace-separated tokens in the body (markup included)
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

/// A persisted article row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Auto-assigned, strictly increasing identifier
    pub id: ArticleId,
    /// Article title
    pub title: String,
    /// HTML body
    pub content: String,
    /// Topic the article was generated for
    pub topic: Option<String>,
    /// Insert time (UTC, second precision)
    pub published_at: DateTime<Utc>,
}

/// Post status on the CMS
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Saved but not visible
    Draft,
    /// Published immediately
    #[default]
    Publish,
}

impl PostStatus {
    /// Wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Publish => "publish",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for creating a post on the CMS
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublishRequest {
    /// Post title
    pub title: String,
    /// HTML body
    pub content: String,
    /// Draft or publish
    pub status: PostStatus,
    /// Featured image; omitted from the payload when absent
    #[serde(rename = "featured_media", skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<MediaId>,
}

impl PublishRequest {
    /// Build a request from a title and body
    pub fn new(title: impl Into<String>, content: impl Into<String>, status: PostStatus) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            status,
            featured_media: None,
        }
    }

    /// Attach a featured image
    pub fn with_featured_media(mut self, media_id: Option<MediaId>) -> Self {
        self.featured_media = media_id;
        self
    }
}

/// Result of a best-effort store call
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum StoreOutcome {
    /// Row inserted
    Stored {
        /// Assigned row id
        id: ArticleId,
    },
    /// Empty title or content; nothing written
    Skipped,
    /// Storage failed; the article was not persisted
    Failed {
        /// Error description
        reason: String,
    },
}

impl StoreOutcome {
    /// Whether a row was written
    pub fn is_stored(&self) -> bool {
        matches!(self, StoreOutcome::Stored { .. })
    }
}

/// Result of a create-post call
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PostOutcome {
    /// Post created; the id is absent only if the CMS omitted it
    Published {
        /// Remote post id
        post_id: Option<PostId>,
    },
    /// Post was not created
    Failed {
        /// Error description
        reason: String,
    },
}

impl PostOutcome {
    /// Whether the post was created
    pub fn is_published(&self) -> bool {
        matches!(self, PostOutcome::Published { .. })
    }
}

/// Per-topic result of a pipeline run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TopicReport {
    /// Topic as supplied
    pub topic: String,
    /// What happened
    pub outcome: TopicOutcome,
}

/// Outcome of processing one topic
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum TopicOutcome {
    /// Article generated and normalized; storage and publishing results attached
    Completed {
        /// Extracted title
        title: String,
        /// Body word count
        word_count: usize,
        /// Store result
        stored: StoreOutcome,
        /// Generated image, if requested and produced
        image_url: Option<String>,
        /// Uploaded featured image, if any
        featured_media: Option<MediaId>,
        /// Publish result, if publishing was requested
        post: Option<PostOutcome>,
    },
    /// Topic aborted before an article existed
    Failed {
        /// Machine-readable code from [`crate::Error::error_code`]
        code: String,
        /// Human-readable message
        message: String,
    },
}

impl TopicReport {
    /// Whether the topic produced an article
    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, TopicOutcome::Completed { .. })
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_request_omits_featured_media_when_absent() {
        let request = PublishRequest::new("Title", "<p>Body</p>", PostStatus::Draft);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Title",
                "content": "<p>Body</p>",
                "status": "draft",
            })
        );
    }

    #[test]
    fn publish_request_includes_featured_media_when_present() {
        let request = PublishRequest::new("Title", "<p>Body</p>", PostStatus::Publish)
            .with_featured_media(Some(MediaId(42)));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["featured_media"], 42);
        assert_eq!(json["status"], "publish");
    }

    #[test]
    fn word_count_counts_whitespace_tokens() {
        let article = NormalizedArticle {
            title: "T".into(),
            body: "<p>Solar power is\nclean.</p>".into(),
            title_source: TitleSource::Heading1,
        };
        assert_eq!(article.word_count(), 4);
    }

    #[test]
    fn post_status_defaults_to_publish() {
        assert_eq!(PostStatus::default(), PostStatus::Publish);
        assert_eq!(PostStatus::Draft.to_string(), "draft");
    }
}
