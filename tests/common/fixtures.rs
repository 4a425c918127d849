//! Model output fixtures and a provider that serves them

use async_trait::async_trait;
use contentforge::{ContentProvider, Error, Result};
use std::collections::HashMap;

/// Fenced document with a level-1 heading
pub const FENCED_SOLAR: &str =
    "```html\n<h1>Solar Power Basics</h1>\n<p>Solar power is clean.</p>\n```";

/// Full document with wrapper tags and only level-2 headings
pub const WRAPPED_WIND: &str = "<html lang=\"en\">\n<body>\n<h2>Wind Energy Today</h2>\n<p>Turbines keep getting taller.</p>\n<h2>Offshore</h2>\n<p>Stronger winds at sea.</p>\n</body>\n</html>";

/// Paragraph-only output with a long first paragraph
pub const LONG_PARAGRAPH: &str = "<p>Just some text with no heading at all that runs long enough to exceed fifty characters for sure</p>";

/// Output that loses everything once the heading is removed
pub const HEADING_ONLY: &str = "```html\n<h1>Nothing Else</h1>\n```";

/// Provider keyed by topic; prompts mention their topic in quotes
pub struct FixtureProvider {
    outputs: HashMap<String, String>,
    image_url: Option<String>,
}

impl FixtureProvider {
    /// Provider that answers each `(topic, output)` pair
    pub fn new(outputs: &[(&str, &str)]) -> Self {
        Self {
            outputs: outputs
                .iter()
                .map(|(topic, output)| (topic.to_string(), output.to_string()))
                .collect(),
            image_url: None,
        }
    }

    /// Return this URL for every image request
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

#[async_trait]
impl ContentProvider for FixtureProvider {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.outputs
            .iter()
            .find(|(topic, _)| prompt.contains(&format!("\"{topic}\"")))
            .map(|(_, output)| output.clone())
            .ok_or_else(|| Error::Provider(format!("no fixture for prompt: {prompt}")))
    }

    async fn generate_image(&self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.image_url.clone())
    }
}
