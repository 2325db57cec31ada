//! Error types for the embed service.
//!
//! Errors never reach the client as an HTTP status. The embed handlers log
//! them and render the message as an inline banner inside a normal page.

/// Embed service error type.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// A required setting for the active mode is absent.
    #[error("Missing environment variables")]
    Configuration {
        /// Names of the unset environment variables.
        missing: Vec<&'static str>,
    },

    /// The Notion API rejected a query.
    #[error("Notion query failed ({status}): {message}")]
    ExternalQuery {
        /// HTTP status returned by the API.
        status: u16,
        /// Error message from the API body, or the status reason.
        message: String,
    },

    /// The request to the Notion API could not be sent or decoded.
    ///
    /// The request URL is stripped so database ids stay out of the banner.
    #[error("Notion query failed: {0}")]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for EmbedError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

impl EmbedError {
    /// Log the error with a level matching its kind.
    pub fn report(&self) {
        match self {
            Self::Configuration { missing } => {
                tracing::warn!(missing = ?missing, "embed configuration incomplete");
            }
            Self::ExternalQuery { status, message } => {
                tracing::error!(status, message = %message, "notion query rejected");
            }
            Self::Http(err) => {
                tracing::error!(error = %err, "notion request failed");
            }
        }
    }

    /// Whether the error came from the external database.
    pub fn is_external(&self) -> bool {
        !matches!(self, Self::Configuration { .. })
    }
}
