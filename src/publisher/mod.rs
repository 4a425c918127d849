//! Publishing client for a WordPress-style REST API
//!
//! Two operations, each a single attempt with no retry:
//! - [`PublishingClient::upload_image`] - fetch a generated image and upload it as media
//! - [`PublishingClient::create_post`] - create a post, optionally with a featured image
//!
//! Both have a fallible `try_` form that returns a typed [`PublishError`]. The
//! plain forms log the failure and hand back `None` or [`PostOutcome::Failed`].
//!
//! [`PublishError`]: crate::error::PublishError
//! [`PostOutcome::Failed`]: crate::types::PostOutcome::Failed

use crate::config::PublishingConfig;
use crate::error::PublishError;
use crate::types::PostStatus;
use crate::{Error, Result};
use tracing::debug;

mod credentials;
mod media;
mod posts;

pub use credentials::Credentials;

/// HTTP client bound to one CMS site and login
#[derive(Clone, Debug)]
pub struct PublishingClient {
    http: reqwest::Client,
    credentials: Credentials,
    default_status: PostStatus,
}

impl PublishingClient {
    /// Build a client from the publishing configuration
    ///
    /// Credentials are resolved here, so missing settings fail before any
    /// request is made.
    pub fn from_config(config: &PublishingConfig) -> Result<Self> {
        let credentials = Credentials::resolve(config)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("contentforge/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(
            api = %credentials.api_base(),
            user = %credentials.username(),
            "publishing client ready"
        );

        Ok(Self {
            http,
            credentials,
            default_status: config.default_status,
        })
    }

    /// REST API root the client talks to
    pub fn api_base(&self) -> &str {
        self.credentials.api_base()
    }

    /// Post status configured for new posts
    pub fn default_status(&self) -> PostStatus {
        self.default_status
    }
}

/// Turn an API response into JSON, treating non-2xx, empty and unparseable
/// bodies as errors
async fn read_json(endpoint: &str, response: reqwest::Response) -> Result<serde_json::Value> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(Error::Publish(PublishError::HttpStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        }));
    }

    if body.trim().is_empty() {
        return Err(Error::Publish(PublishError::EmptyResponse {
            endpoint: endpoint.to_string(),
        }));
    }

    serde_json::from_str(&body).map_err(|e| {
        Error::Publish(PublishError::InvalidResponse {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    })
}
