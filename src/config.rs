//! Runtime configuration.
//!
//! A [`RunConfig`] carries the collection knobs: inter-query delay bounds,
//! the per-query article cap, the HTTP timeout, and the user agent sent to
//! Google News. Defaults match the values the collection has always run
//! with; an optional YAML file overrides them field by field.

use serde::Deserialize;
use std::error::Error;
use tracing::info;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Collection knobs, loadable from YAML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Lower bound of the random delay between queries, in milliseconds.
    pub delay_min_ms: u64,
    /// Upper bound of the random delay between queries, in milliseconds.
    pub delay_max_ms: u64,
    /// At most this many articles are taken from one results page.
    pub max_articles_per_query: usize,
    /// HTTP request timeout in seconds.
    pub http_timeout_secs: u64,
    /// User agent header sent with every request.
    pub user_agent: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: 1000,
            delay_max_ms: 2000,
            max_articles_per_query: 8,
            http_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl RunConfig {
    /// Load from an optional YAML file; defaults when no path is given.
    pub async fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(p) => {
                let raw = tokio::fs::read_to_string(p).await?;
                let config: RunConfig = serde_yaml::from_str(&raw)?;
                info!(path = %p, "Loaded configuration");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}
