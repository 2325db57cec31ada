//! Notion database query layer.
//!
//! The resolver only needs two lookups: a formula `contains` filter and the
//! most recently edited page. [`RecordSource`] exposes exactly those so the
//! HTTP client can be swapped for an in-memory source in tests.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::config::Target;
use crate::error::EmbedError;
use crate::property::Record;

/// Notion API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Read access to a Notion-style document database.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Pages whose formula `property` evaluates to a string containing `needle`.
    async fn query_contains(
        &self,
        target: Target<'_>,
        property: &str,
        needle: &str,
    ) -> Result<Vec<Record>, EmbedError>;

    /// The single most recently edited page, if the database has any.
    async fn query_most_recent(&self, target: Target<'_>) -> Result<Option<Record>, EmbedError>;
}

/// Response body of `POST /databases/{id}/query`.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Record>,
}

/// Error body returned by the Notion API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// [`RecordSource`] backed by the Notion REST API.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    api_url: String,
}

impl NotionClient {
    /// Build a client for `api_url` (e.g. `https://api.notion.com/v1`).
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, EmbedError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tkembed/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run a database query and return its page results.
    async fn query(
        &self,
        target: Target<'_>,
        body: serde_json::Value,
    ) -> Result<Vec<Record>, EmbedError> {
        let url = format!("{}/databases/{}/query", self.api_url, target.database_id);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(target.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let api_error = resp.json::<ApiError>().await.ok();
            let message = api_error
                .as_ref()
                .and_then(|e| e.message.clone())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            tracing::debug!(
                status = status.as_u16(),
                code = ?api_error.and_then(|e| e.code),
                "notion query returned an error status"
            );
            return Err(EmbedError::ExternalQuery {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: QueryResponse = resp.json().await?;
        Ok(parsed.results)
    }
}

#[async_trait::async_trait]
impl RecordSource for NotionClient {
    async fn query_contains(
        &self,
        target: Target<'_>,
        property: &str,
        needle: &str,
    ) -> Result<Vec<Record>, EmbedError> {
        self.query(target, contains_filter(property, needle)).await
    }

    async fn query_most_recent(&self, target: Target<'_>) -> Result<Option<Record>, EmbedError> {
        let results = self.query(target, most_recent_query()).await?;
        Ok(results.into_iter().next())
    }
}

/// Body for a formula-string `contains` filter.
fn contains_filter(property: &str, needle: &str) -> serde_json::Value {
    json!({
        "filter": {
            "property": property,
            "formula": {
                "string": { "contains": needle }
            }
        }
    })
}

/// Body selecting the latest edited page.
fn most_recent_query() -> serde_json::Value {
    json!({
        "page_size": 1,
        "sorts": [{ "timestamp": "last_edited_time", "direction": "descending" }]
    })
}

/// In-memory [`RecordSource`] for tests.
#[cfg(test)]
pub(crate) mod memory {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::property::extract_text;

    /// Databases keyed by id. Records the number of calls made.
    #[derive(Default)]
    pub struct MemorySource {
        databases: HashMap<String, Vec<Record>>,
        fail_with: Option<(u16, String)>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl MemorySource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_records(mut self, database_id: &str, records: Vec<Record>) -> Self {
            self.databases.insert(database_id.to_string(), records);
            self
        }

        pub fn failing(status: u16, message: &str) -> Self {
            Self {
                fail_with: Some((status, message.to_string())),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn check(&self, call: &'static str) -> Result<(), EmbedError> {
            self.calls.lock().unwrap().push(call);
            match &self.fail_with {
                Some((status, message)) => Err(EmbedError::ExternalQuery {
                    status: *status,
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }

        fn records(&self, target: Target<'_>) -> &[Record] {
            self.databases
                .get(target.database_id)
                .map(Vec::as_slice)
                .unwrap_or_default()
        }
    }

    #[async_trait::async_trait]
    impl RecordSource for MemorySource {
        async fn query_contains(
            &self,
            target: Target<'_>,
            property: &str,
            needle: &str,
        ) -> Result<Vec<Record>, EmbedError> {
            self.check("contains")?;
            Ok(self
                .records(target)
                .iter()
                .filter(|r| extract_text(r.property(property)).contains(needle))
                .cloned()
                .collect())
        }

        async fn query_most_recent(
            &self,
            target: Target<'_>,
        ) -> Result<Option<Record>, EmbedError> {
            self.check("most_recent")?;
            Ok(self
                .records(target)
                .iter()
                .max_by_key(|r| r.last_edited_time)
                .cloned())
        }
    }
}
