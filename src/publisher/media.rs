//! Featured image upload.

use crate::error::PublishError;
use crate::types::MediaId;
use crate::utils::media_filename;
use crate::{Error, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};
use tracing::{info, warn};

use super::{PublishingClient, read_json};

impl PublishingClient {
    /// Upload an image by URL, returning its media id
    ///
    /// An empty URL returns `None` without touching the network. Any fetch,
    /// upload or response failure is logged and also returns `None`.
    pub async fn upload_image(&self, image_url: &str, article_title: &str) -> Option<MediaId> {
        if image_url.is_empty() {
            return None;
        }

        match self.try_upload_image(image_url, article_title).await {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(
                    url = %image_url,
                    code = e.error_code(),
                    error = %e,
                    "image upload failed"
                );
                None
            }
        }
    }

    /// Fetch the image at `image_url` and upload it to the media library
    pub async fn try_upload_image(&self, image_url: &str, article_title: &str) -> Result<MediaId> {
        let image = self.fetch_image(image_url).await?;
        let filename = media_filename(article_title);

        let response = self
            .http
            .post(self.credentials.endpoint("media"))
            .header(AUTHORIZATION, self.credentials.authorization_header())
            .header(
                CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            )
            .header(CONTENT_TYPE, "image/png")
            .body(image)
            .send()
            .await?;

        let json = read_json("media", response).await?;
        let id = json.get("id").and_then(|v| v.as_i64()).ok_or_else(|| {
            Error::Publish(PublishError::InvalidResponse {
                endpoint: "media".to_string(),
                reason: "response has no numeric id".to_string(),
            })
        })?;

        info!(media_id = id, filename = %filename, "image uploaded");
        Ok(MediaId(id))
    }

    async fn fetch_image(&self, image_url: &str) -> Result<Vec<u8>> {
        let image_fetch = |reason: String| {
            Error::Publish(PublishError::ImageFetch {
                url: image_url.to_string(),
                reason,
            })
        };

        let response = self
            .http
            .get(image_url)
            .send()
            .await
            .map_err(|e| image_fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| image_fetch(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| image_fetch(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
