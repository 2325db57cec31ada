//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::error::EmbedError;
use crate::query::{NotionClient, RecordSource};

/// Shared application state available to all request handlers.
///
/// Immutable after startup; handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Database the embeds read from.
    pub source: Arc<dyn RecordSource>,
}

impl AppState {
    /// Create application state backed by the Notion API.
    pub fn new(config: Config) -> Result<Self, EmbedError> {
        let client = NotionClient::new(&config.notion_api_url, config.request_timeout)?;

        tracing::info!(
            api_url = %config.notion_api_url,
            timeout_secs = config.request_timeout.as_secs(),
            "notion client initialized"
        );

        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create application state around an existing record source.
    pub fn with_source(config: Config, source: Arc<dyn RecordSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }
}
