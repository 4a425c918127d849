//! # contentforge
//!
//! Library for turning topics into published blog articles.
//!
//! ## Design Philosophy
//!
//! contentforge is designed to be:
//! - **Forgiving of model output** - Fenced, wrapped or plain text is normalized into a title and HTML body
//! - **Append-only** - Every generated article lands in a local SQLite file
//! - **Explicitly configured** - Components take a [`Config`]; nothing reads global state
//! - **Library-first** - Bring your own model backend via [`ContentProvider`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use async_trait::async_trait;
//! use contentforge::{ArticlePipeline, ArticleStore, Config, ContentProvider, PublishingClient};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ContentProvider for MyProvider {
//!     async fn generate_text(&self, prompt: &str) -> contentforge::Result<String> {
//!         Ok(format!("<h1>Draft</h1><p>{prompt}</p>"))
//!     }
//!
//!     async fn generate_image(&self, _prompt: &str) -> contentforge::Result<Option<String>> {
//!         Ok(None)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let store = ArticleStore::from_config(&config.persistence);
//!     let publisher = PublishingClient::from_config(&config.publishing)?;
//!
//!     let pipeline = ArticlePipeline::new(config, MyProvider, store).with_publisher(publisher);
//!     for report in pipeline.process_batch(&["Benefits of Solar Energy"], true).await? {
//!         println!("{}: {:?}", report.topic, report.outcome);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Article persistence layer
pub mod db;
/// Error types
pub mod error;
/// Markup normalization
pub mod normalize;
/// Topic-to-article pipeline
pub mod pipeline;
/// Generative provider interface
pub mod provider;
/// CMS publishing client
pub mod publisher;
/// Topic list input
pub mod topics;
/// Core types
pub mod types;
/// Utility functions
pub mod utils;

// Re-export commonly used types
pub use config::{Config, GenerationConfig, PersistenceConfig, PublishingConfig};
pub use db::ArticleStore;
pub use error::{DatabaseError, Error, PublishError, Result};
pub use normalize::normalize;
pub use pipeline::ArticlePipeline;
pub use provider::{ContentProvider, build_prompt};
pub use publisher::{Credentials, PublishingClient};
pub use types::{
    ArticleId, ArticleRecord, MediaId, NormalizedArticle, PostId, PostOutcome, PostStatus,
    PublishRequest, StoreOutcome, TitleSource, TopicOutcome, TopicReport,
};
