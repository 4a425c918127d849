//! Topic-to-article pipeline
//!
//! For each topic the pipeline runs, in order:
//! 1. Generate - build the prompt and ask the provider for article text
//! 2. Normalize - extract title and body; nothing usable fails the topic
//! 3. Store - append the article to the record store
//! 4. Image - optionally ask the provider for a featured image
//! 5. Publish - optionally upload the image and create the post
//!
//! Steps 3 to 5 never fail a topic. Their results are recorded in the
//! [`TopicReport`] and logged.

use crate::config::Config;
use crate::db::ArticleStore;
use crate::normalize::normalize;
use crate::provider::{ContentProvider, build_prompt};
use crate::publisher::PublishingClient;
use crate::types::{
    MediaId, NormalizedArticle, PostOutcome, PublishRequest, TopicOutcome, TopicReport,
};
use crate::{Error, Result};
use tracing::{error, info, warn};

/// Runs topics through generation, storage and publishing
pub struct ArticlePipeline<P> {
    config: Config,
    provider: P,
    store: ArticleStore,
    publisher: Option<PublishingClient>,
}

impl<P: ContentProvider> ArticlePipeline<P> {
    /// Create a pipeline that stores articles but has no publisher
    pub fn new(config: Config, provider: P, store: ArticleStore) -> Self {
        Self {
            config,
            provider,
            store,
            publisher: None,
        }
    }

    /// Attach a publishing client
    pub fn with_publisher(mut self, publisher: PublishingClient) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Configuration the pipeline runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Store articles are written to
    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    /// Process a list of topics one after another
    ///
    /// Configuration is checked before any topic runs. After that a failing
    /// topic is reported and the batch moves on.
    pub async fn process_batch<S: AsRef<str>>(
        &self,
        topics: &[S],
        publish: bool,
    ) -> Result<Vec<TopicReport>> {
        self.config.validate(publish)?;
        if publish && self.publisher.is_none() {
            return Err(Error::Config {
                message: "publishing requested but no publishing client is attached".to_string(),
                key: None,
            });
        }

        info!(
            count = topics.len(),
            model = %self.config.generation.model,
            publish,
            "starting batch"
        );

        let mut reports = Vec::with_capacity(topics.len());
        for (i, topic) in topics.iter().enumerate() {
            let topic: &str = topic.as_ref();
            info!(
                topic = %topic,
                position = i + 1,
                total = topics.len(),
                "processing topic"
            );
            reports.push(self.process_topic(topic, publish).await);
        }

        let completed = reports.iter().filter(|r| r.is_completed()).count();
        info!(
            completed,
            failed = reports.len() - completed,
            "batch finished"
        );

        Ok(reports)
    }

    /// Process a single topic
    pub async fn process_topic(&self, topic: &str, publish: bool) -> TopicReport {
        let prompt = build_prompt(topic, self.config.generation.word_count);
        let raw = match self.provider.generate_text(&prompt).await {
            Ok(raw) => raw,
            Err(e) => return failed(topic, e),
        };

        let Some(article) = normalize(&raw) else {
            return failed(topic, Error::EmptyArticle);
        };

        let stored = self
            .store
            .store(&article.title, &article.body, Some(topic))
            .await;

        let image_url = if self.config.generation.generate_image {
            self.generate_image(&article.title).await
        } else {
            None
        };

        let (featured_media, post) = if publish {
            let (media, post) = self.publish(&article, image_url.as_deref()).await;
            (media, Some(post))
        } else {
            (None, None)
        };

        info!(
            topic = %topic,
            title = %article.title,
            stored = stored.is_stored(),
            published = post.as_ref().is_some_and(PostOutcome::is_published),
            "topic completed"
        );

        TopicReport {
            topic: topic.to_string(),
            outcome: TopicOutcome::Completed {
                word_count: article.word_count(),
                title: article.title,
                stored,
                image_url,
                featured_media,
                post,
            },
        }
    }

    async fn generate_image(&self, title: &str) -> Option<String> {
        match self.provider.generate_image(title).await {
            Ok(url) => url.filter(|u| !u.is_empty()),
            Err(e) => {
                warn!(title = %title, error = %e, "image generation failed");
                None
            }
        }
    }

    async fn publish(
        &self,
        article: &NormalizedArticle,
        image_url: Option<&str>,
    ) -> (Option<MediaId>, PostOutcome) {
        let Some(publisher) = &self.publisher else {
            warn!(title = %article.title, "no publishing client attached");
            return (
                None,
                PostOutcome::Failed {
                    reason: "no publishing client attached".to_string(),
                },
            );
        };

        let featured_media = match image_url {
            Some(url) => publisher.upload_image(url, &article.title).await,
            None => None,
        };

        let request = PublishRequest::new(
            article.title.as_str(),
            article.body.as_str(),
            self.config.publishing.default_status,
        )
        .with_featured_media(featured_media);

        (featured_media, publisher.create_post(&request).await)
    }
}

fn failed(topic: &str, e: Error) -> TopicReport {
    error!(topic = %topic, code = e.error_code(), error = %e, "topic failed");
    TopicReport {
        topic: topic.to_string(),
        outcome: TopicOutcome::Failed {
            code: e.error_code().to_string(),
            message: e.to_string(),
        },
    }
}
