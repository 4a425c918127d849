//! Test configuration builders

use contentforge::Config;
use std::path::Path;
use wiremock::MockServer;

/// Configuration with an API key and a database under `dir`
pub fn local_config(dir: &Path) -> Config {
    Config::from_lookup(|key| match key {
        "AIML_API_KEY" => Some("sk-integration".to_string()),
        "ARTICLES_DB" => Some(dir.join("articles.db").display().to_string()),
        _ => None,
    })
    .expect("test configuration is valid")
}

/// Configuration that also publishes to the mock CMS at `server`
pub fn publishing_config(dir: &Path, server: &MockServer) -> Config {
    let mut config = local_config(dir);
    config.publishing.base_url = Some(server.uri());
    config.publishing.username = Some("editor".to_string());
    config.publishing.application_password = Some("xxxx yyyy zzzz".to_string());
    config
}
