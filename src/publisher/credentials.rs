//! Credential resolution and request addressing for the CMS.

use crate::config::PublishingConfig;
use crate::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use url::Url;

/// Path of the REST API below the site root
const API_PATH: &str = "wp-json/wp/v2";

/// Resolved site address and login for the publishing endpoint
#[derive(Clone)]
pub struct Credentials {
    api_base: String,
    username: String,
    application_password: String,
}

impl Credentials {
    /// Resolve credentials from configuration
    ///
    /// Fails with a configuration error naming the first missing or blank
    /// setting, or when the site URL is not an absolute http(s) URL.
    pub fn resolve(config: &PublishingConfig) -> Result<Self> {
        let base_url = required(config.base_url.as_deref(), "WP_URL")?;
        let username = required(config.username.as_deref(), "WP_USER")?;
        let application_password =
            required(config.application_password.as_deref(), "WP_PASSWORD")?;

        let parsed = Url::parse(base_url).map_err(|e| Error::Config {
            message: format!("WP_URL is not a valid URL: {e}"),
            key: Some("WP_URL".to_string()),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config {
                message: format!("WP_URL must use http or https, got {}", parsed.scheme()),
                key: Some("WP_URL".to_string()),
            });
        }

        Ok(Self {
            api_base: format!("{}/{}", base_url.trim_end_matches('/'), API_PATH),
            username: username.to_string(),
            application_password: application_password.to_string(),
        })
    }

    /// REST API root, e.g. `https://blog.example.com/wp-json/wp/v2`
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Full URL of an API collection such as `posts` or `media`
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.api_base, name)
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.application_password));
        format!("Basic {token}")
    }

    /// Login name
    pub fn username(&self) -> &str {
        &self.username
    }
}

// Keep the password out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_base", &self.api_base)
            .field("username", &self.username)
            .field("application_password", &"<redacted>")
            .finish()
    }
}

fn required<'a>(value: Option<&'a str>, key: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::missing_setting(key)),
    }
}
