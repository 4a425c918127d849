//! Post creation.

use crate::types::{PostId, PostOutcome, PublishRequest};
use crate::Result;
use reqwest::header::AUTHORIZATION;
use tracing::{info, warn};

use super::{PublishingClient, read_json};

impl PublishingClient {
    /// Create a post, logging and absorbing any failure
    pub async fn create_post(&self, request: &PublishRequest) -> PostOutcome {
        match self.try_create_post(request).await {
            Ok(post_id) => PostOutcome::Published { post_id },
            Err(e) => {
                warn!(
                    title = %request.title,
                    code = e.error_code(),
                    error = %e,
                    "post creation failed"
                );
                PostOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Create a post
    ///
    /// Success needs a 2xx status and a non-empty JSON body. The post id is
    /// `None` only when the body lacks one.
    pub async fn try_create_post(&self, request: &PublishRequest) -> Result<Option<PostId>> {
        let response = self
            .http
            .post(self.credentials.endpoint("posts"))
            .header(AUTHORIZATION, self.credentials.authorization_header())
            .json(request)
            .send()
            .await?;

        let json = read_json("posts", response).await?;
        let post_id = json.get("id").and_then(|v| v.as_i64()).map(PostId);

        info!(
            post_id = ?post_id,
            status = %request.status,
            featured_media = ?request.featured_media,
            "post created"
        );
        Ok(post_id)
    }
}
