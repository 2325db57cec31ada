//! Record resolution for embed requests.
//!
//! A request names a page either through its referrer or an explicit `id`.
//! Resolution tries a suffix match on the mode's identifier property first
//! and falls back to the most recently edited page.

use crate::config::Config;
use crate::error::EmbedError;
use crate::identifier;
use crate::mode::Mode;
use crate::property::{Record, extract_html, extract_text};
use crate::query::RecordSource;
use crate::sanitize::sanitize;

/// Shown in the tile slot when the record has no tile HTML.
pub const TILE_PLACEHOLDER: &str =
    r#"<div style="color:#999; font-size:14px; padding:8px;">No tile content found</div>"#;

/// Shown in the modal slot when the record has no modal HTML.
pub const MODAL_PLACEHOLDER: &str =
    r#"<div style="color:#999; font-size:14px; padding:8px;">No modal content found</div>"#;

/// Client label used when the identifier property carries none.
pub const DEFAULT_CLIENT: &str = "Client";

/// Number of trailing identifier characters matched against the id property.
const SUFFIX_LEN: usize = 8;

/// What an inbound embed request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub mode: Mode,
    /// Page identifier from the referrer, or the explicit `id` fallback.
    pub page_id: Option<String>,
}

impl RequestContext {
    /// Build a context, preferring the referrer over the explicit id.
    pub fn new(mode: Mode, referrer: Option<&str>, explicit_id: Option<&str>) -> Self {
        let page_id = identifier::extract_page_id(referrer).or_else(|| {
            explicit_id
                .filter(|id| !id.is_empty())
                .map(str::to_string)
        });
        Self { mode, page_id }
    }
}

/// Sanitized slot content ready for rendering.
///
/// `tile` and `modal` are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub tile: String,
    pub modal: String,
    pub client: String,
}

impl ResolvedContent {
    /// Assemble content, substituting placeholders for empty slots.
    pub fn new(tile: String, modal: String, client: String) -> Self {
        let tile = if tile.is_empty() {
            TILE_PLACEHOLDER.to_string()
        } else {
            tile
        };
        let modal = if modal.is_empty() {
            MODAL_PLACEHOLDER.to_string()
        } else {
            modal
        };
        Self {
            tile,
            modal,
            client,
        }
    }

    /// Both slots as placeholders with the default client.
    pub fn placeholder() -> Self {
        Self::new(String::new(), String::new(), DEFAULT_CLIENT.to_string())
    }

    /// Extract and sanitize the mode's slots from a record.
    pub fn from_record(record: &Record, mode: Mode) -> Self {
        let tile = sanitize(&extract_html(record.property(mode.tile_property())));
        let modal = sanitize(&extract_html(record.property(mode.modal_property())));
        let client = client_label(&extract_text(record.property(mode.id_property())));
        Self::new(tile, modal, client)
    }
}

/// Outcome of resolving one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A record was found.
    Found(ResolvedContent),
    /// Neither lookup returned a record.
    Placeholder,
    /// Resolution failed; the message is shown inline.
    Failed(String),
}

impl Resolution {
    /// Convert a resolver result, logging failures.
    pub fn from_result(result: Result<Option<Record>, EmbedError>, mode: Mode) -> Self {
        match result {
            Ok(Some(record)) => Self::Found(ResolvedContent::from_record(&record, mode)),
            Ok(None) => Self::Placeholder,
            Err(err) => {
                err.report();
                Self::Failed(err.to_string())
            }
        }
    }

    /// Content and optional error banner for the renderer.
    pub fn into_payload(self) -> RenderPayload {
        match self {
            Self::Found(content) => RenderPayload {
                content,
                error: None,
            },
            Self::Placeholder => RenderPayload {
                content: ResolvedContent::placeholder(),
                error: None,
            },
            Self::Failed(message) => RenderPayload {
                content: ResolvedContent::placeholder(),
                error: Some(message),
            },
        }
    }
}

/// Everything the renderer needs for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPayload {
    pub content: ResolvedContent,
    pub error: Option<String>,
}

/// Label shown in export file names: the text before the first `.` of the
/// identifier property, or [`DEFAULT_CLIENT`] when there is no `.`.
pub fn client_label(id_text: &str) -> String {
    match id_text.split_once('.') {
        Some((client, _)) => client.to_string(),
        None => DEFAULT_CLIENT.to_string(),
    }
}

/// Last [`SUFFIX_LEN`] characters of an identifier, or all of a shorter one.
fn id_suffix(page_id: &str) -> &str {
    let count = page_id.chars().count();
    if count <= SUFFIX_LEN {
        return page_id;
    }
    match page_id.char_indices().nth(count - SUFFIX_LEN) {
        Some((idx, _)) => &page_id[idx..],
        None => page_id,
    }
}

/// Find the record an embed request should display.
///
/// Fails before any query when the mode's configuration is incomplete.
pub async fn resolve(
    config: &Config,
    source: &dyn RecordSource,
    ctx: &RequestContext,
) -> Result<Option<Record>, EmbedError> {
    let target = config.target(ctx.mode)?;
    let property = ctx.mode.id_property();

    if let Some(page_id) = ctx.page_id.as_deref() {
        let suffix = id_suffix(page_id);
        let matches = source.query_contains(target, property, suffix).await?;
        if let Some(record) = matches.into_iter().next() {
            tracing::debug!(mode = %ctx.mode, suffix, record = %record.id, "matched by identifier");
            return Ok(Some(record));
        }
        tracing::debug!(mode = %ctx.mode, suffix, "no identifier match, using most recent");
    }

    let latest = source.query_most_recent(target).await?;
    match &latest {
        Some(record) => tracing::debug!(mode = %ctx.mode, record = %record.id, "using most recent record"),
        None => tracing::debug!(mode = %ctx.mode, "database has no records"),
    }
    Ok(latest)
}
