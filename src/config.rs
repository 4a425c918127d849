//! Configuration types for contentforge
//!
//! Configuration is an explicit value handed to each component. Nothing is
//! read from process-wide state after construction; [`Config::from_env`] is a
//! convenience for hosts that keep their settings in environment variables.

use crate::error::{Error, Result};
use crate::types::PostStatus;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// Content generation settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Model identifier passed to the provider (default: "openai/gpt-5-chat-latest")
    #[serde(default = "default_model")]
    pub model: String,

    /// Target article length in words (default: 800)
    #[serde(default = "default_word_count")]
    pub word_count: u32,

    /// Generate a featured image for each article
    #[serde(default)]
    pub generate_image: bool,

    /// Provider API key
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            word_count: default_word_count(),
            generate_image: false,
            api_key: None,
        }
    }
}

/// CMS publishing settings
///
/// All three credentials are optional here; they are only required once a
/// publishing client is built from this config.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublishingConfig {
    /// Site URL, e.g. "https://blog.example.com"
    #[serde(default)]
    pub base_url: Option<String>,

    /// CMS username
    #[serde(default)]
    pub username: Option<String>,

    /// CMS application password
    #[serde(default)]
    pub application_password: Option<String>,

    /// Timeout for every publishing request (default: 60 seconds)
    #[serde(default = "default_publish_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// Status given to posts created by the pipeline (default: publish)
    #[serde(default)]
    pub default_status: PostStatus,
}

impl Default for PublishingConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            username: None,
            application_password: None,
            timeout: default_publish_timeout(),
            default_status: PostStatus::default(),
        }
    }
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Database path (default: "articles.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

/// Main configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Content generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// CMS publishing settings
    #[serde(default)]
    pub publishing: PublishingConfig,

    /// Article database settings
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl Config {
    /// Build a configuration from environment variables
    ///
    /// Recognized variables: `SELECTED_MODEL`, `WORD_COUNT`, `GENERATE_IMAGE`,
    /// `AIML_API_KEY`, `WP_URL`, `WP_USER`, `WP_PASSWORD` (or `WP_APP_PASSWORD`)
    /// and `ARTICLES_DB`. Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Config::default();

        if let Some(model) = get("SELECTED_MODEL") {
            config.generation.model = model;
        }
        if let Some(raw) = get("WORD_COUNT") {
            config.generation.word_count = raw.parse().map_err(|_| Error::Config {
                message: format!("WORD_COUNT must be a positive integer, got {raw:?}"),
                key: Some("WORD_COUNT".to_string()),
            })?;
        }
        if let Some(raw) = get("GENERATE_IMAGE") {
            config.generation.generate_image = parse_flag(&raw).ok_or_else(|| Error::Config {
                message: format!("GENERATE_IMAGE must be a boolean, got {raw:?}"),
                key: Some("GENERATE_IMAGE".to_string()),
            })?;
        }
        config.generation.api_key = get("AIML_API_KEY");

        config.publishing.base_url = get("WP_URL");
        config.publishing.username = get("WP_USER");
        config.publishing.application_password =
            get("WP_PASSWORD").or_else(|| get("WP_APP_PASSWORD"));

        if let Some(path) = get("ARTICLES_DB") {
            config.persistence.database_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Check that everything a run needs is configured
    ///
    /// The provider API key is always required. Publishing credentials are
    /// only checked when `publish` is set.
    pub fn validate(&self, publish: bool) -> Result<()> {
        let has_key = self
            .generation
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());
        if !has_key {
            return Err(Error::missing_setting("AIML_API_KEY"));
        }

        if publish {
            crate::publisher::Credentials::resolve(&self.publishing)?;
        }

        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Default value functions
fn default_model() -> String {
    "openai/gpt-5-chat-latest".to_string()
}

fn default_word_count() -> u32 {
    800
}

fn default_publish_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_database_path() -> PathBuf {
    PathBuf::from("articles.db")
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
