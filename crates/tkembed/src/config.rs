//! Application configuration loaded from environment variables.

use std::time::Duration;

use crate::error::EmbedError;
use crate::mode::Mode;

/// Default Notion REST API base URL.
pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";

/// Application configuration.
///
/// Built once at startup and shared by reference. The Notion credentials are
/// optional here: their absence is reported per request, not at boot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:3000").
    pub bind_addr: String,

    /// Notion integration token, shared by both modes.
    pub notion_token: Option<String>,

    /// Database backing the live embed.
    pub live_database_id: Option<String>,

    /// Database backing the builder embed.
    pub builder_database_id: Option<String>,

    /// Notion API base URL, without trailing slash.
    pub notion_api_url: String,

    /// Per-request timeout for Notion API calls.
    pub request_timeout: Duration,
}

/// Credentials and database for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<'a> {
    pub token: &'a str,
    pub database_id: &'a str,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required per request (absence renders an inline error):
    /// - `NOTION_TOKEN`: Notion integration token
    /// - `DATABASE_ID`: live database id
    /// - `TKBUILDER_DATABASE_ID`: builder database id
    ///
    /// Optional:
    /// - `EMBED_BIND_ADDR`: Server bind address (default: "0.0.0.0:$PORT")
    /// - `PORT`: Port used when `EMBED_BIND_ADDR` is unset (default: 3000)
    /// - `NOTION_API_URL`: API base URL (default: "https://api.notion.com/v1")
    /// - `NOTION_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = match non_empty_var("EMBED_BIND_ADDR") {
            Some(addr) => addr,
            None => {
                let port = non_empty_var("PORT").unwrap_or_else(|| "3000".to_string());
                let port: u16 = port
                    .parse()
                    .map_err(|_| anyhow::anyhow!("PORT must be a port number, got '{port}'"))?;
                format!("0.0.0.0:{port}")
            }
        };

        let notion_api_url = non_empty_var("NOTION_API_URL")
            .unwrap_or_else(|| DEFAULT_NOTION_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = match non_empty_var("NOTION_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("NOTION_TIMEOUT_SECS must be a whole number, got '{raw}'")
            })?,
            None => 30,
        };

        let config = Self {
            bind_addr,
            notion_token: non_empty_var("NOTION_TOKEN"),
            live_database_id: non_empty_var(Mode::Live.database_env()),
            builder_database_id: non_empty_var(Mode::Builder.database_env()),
            notion_api_url,
            request_timeout: Duration::from_secs(timeout_secs),
        };

        tracing::info!(
            bind_addr = %config.bind_addr,
            notion_api_url = %config.notion_api_url,
            token_set = config.notion_token.is_some(),
            live_database_set = config.live_database_id.is_some(),
            builder_database_set = config.builder_database_id.is_some(),
            timeout_secs,
            "embed configuration loaded"
        );

        Ok(config)
    }

    /// Resolve the credentials and database for `mode`.
    ///
    /// Fails with [`EmbedError::Configuration`] listing every unset variable.
    pub fn target(&self, mode: Mode) -> Result<Target<'_>, EmbedError> {
        let database_id = match mode {
            Mode::Live => self.live_database_id.as_deref(),
            Mode::Builder => self.builder_database_id.as_deref(),
        };

        match (self.notion_token.as_deref(), database_id) {
            (Some(token), Some(database_id)) => Ok(Target { token, database_id }),
            (token, database_id) => {
                let mut missing = Vec::new();
                if token.is_none() {
                    missing.push("NOTION_TOKEN");
                }
                if database_id.is_none() {
                    missing.push(mode.database_env());
                }
                Err(EmbedError::Configuration { missing })
            }
        }
    }
}

/// Read an environment variable, treating empty values as unset.
fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
