//! Error types for contentforge
//!
//! This module provides the error taxonomy for the library:
//! - Configuration errors (missing credentials, unparseable settings)
//! - Database errors from the article store
//! - Publishing errors from the CMS client (remote status, empty or malformed responses)
//! - Provider errors surfaced by the generative content provider
//!
//! Every variant maps to a stable, machine-readable code via [`Error::error_code`],
//! which is what per-topic pipeline reports carry.

use thiserror::Error;

/// Result type alias for contentforge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for contentforge
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is missing or invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "WP_URL")
        key: Option<String>,
    },

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// SQLx database error
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Publishing endpoint rejected or mangled a request
    #[error("publishing error: {0}")]
    Publish(#[from] PublishError),

    /// Generative provider failed to produce content
    #[error("provider error: {0}")]
    Provider(String),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Model output normalized to nothing usable
    #[error("model output did not contain a usable article")]
    EmptyArticle,
}

impl Error {
    /// Create a configuration error for a missing setting
    pub fn missing_setting(key: impl Into<String>) -> Self {
        let key = key.into();
        Error::Config {
            message: format!("{key} is not set"),
            key: Some(key),
        }
    }

    /// Get the machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Database(_) => "database_error",
            Error::Sqlx(_) => "database_error",
            Error::Publish(e) => match e {
                PublishError::ImageFetch { .. } => "image_fetch_failed",
                PublishError::HttpStatus { .. } => "remote_status",
                PublishError::EmptyResponse { .. } => "empty_response",
                PublishError::InvalidResponse { .. } => "invalid_response",
            },
            Error::Provider(_) => "provider_error",
            Error::Network(_) => "network_error",
            Error::Io(_) => "io_error",
            Error::EmptyArticle => "empty_article",
        }
    }
}

/// Database-related errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to connect to database
    #[error("failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create the schema
    #[error("failed to create schema: {0}")]
    MigrationFailed(String),
}

/// Errors returned by the publishing endpoint or the image host
#[derive(Debug, Error)]
pub enum PublishError {
    /// Downloading the generated image failed
    #[error("failed to fetch image from {url}: {reason}")]
    ImageFetch {
        /// The image URL that could not be fetched
        url: String,
        /// The reason the fetch failed
        reason: String,
    },

    /// Endpoint answered with a non-success status
    #[error("{endpoint} returned status {status}: {body}")]
    HttpStatus {
        /// Endpoint name (e.g., "posts", "media")
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Endpoint answered with an empty body
    #[error("{endpoint} returned an empty response")]
    EmptyResponse {
        /// Endpoint name (e.g., "posts", "media")
        endpoint: String,
    },

    /// Endpoint answered with something that is not the expected JSON
    #[error("{endpoint} returned an invalid response: {reason}")]
    InvalidResponse {
        /// Endpoint name (e.g., "posts", "media")
        endpoint: String,
        /// What was wrong with the body
        reason: String,
    },
}
