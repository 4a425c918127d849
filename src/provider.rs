//! Generative content provider interface
//!
//! The pipeline never talks to a model API directly. Hosts plug in any
//! backend by implementing [`ContentProvider`].

use crate::Result;
use async_trait::async_trait;

/// Backend that turns prompts into article text and images
///
/// Implementations should report failures as [`crate::Error::Provider`].
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Generate article text for a prompt
    ///
    /// The output is untrusted and may be fenced, wrapped in a full document,
    /// or plain text. It is normalized before use.
    async fn generate_text(&self, prompt: &str) -> Result<String>;

    /// Generate an image for a prompt and return its URL
    ///
    /// `Ok(None)` means the provider produced no image.
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>>;
}

/// Build the article prompt for a topic
pub fn build_prompt(topic: &str, word_count: u32) -> String {
    format!(
        "Write an original, well-structured blog article of about {word_count} words on the topic: \"{topic}\".\n\
         Format the article as HTML. Put the article title in a single <h1> element at the top, \
         use <h2> elements for section headings and <p> elements for paragraphs.\n\
         Return only the HTML fragment. Do not wrap it in a code block and do not include \
         <html>, <head> or <body> tags."
    )
}
