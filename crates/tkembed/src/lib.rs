//! tkembed - Notion-backed tile/modal embeds.
//!
//! A small HTTP service that renders a TripKicks tile and modal, stored as
//! HTML in a Notion database, into a page meant to be embedded back into
//! Notion. The page carries copy/export controls that run client-side.
//!
//! # Architecture
//!
//! - **Identify**: the embedding Notion page is read from the `Referer` URL
//!   (or an explicit `?id=`)
//! - **Resolve**: a formula-suffix match on the mode's id property, falling
//!   back to the most recently edited record
//! - **Extract**: tile and modal HTML are flattened from property values and
//!   scrubbed of `javascript:` and inline handlers
//! - **Render**: a fixed maud scaffold with the content inserted verbatim
//!
//! # Routes
//!
//! ```text
//! GET /embed           live database, `tkid1` / `Tile HTML` / `Modal HTML`
//! GET /embed-builder   builder database, `bldrID` / `TileContent` / `ModalContent`
//! ```
//!
//! Embed routes always answer 200. Configuration and query failures are shown
//! as an inline banner above placeholder content.

pub mod config;
pub mod error;
pub mod identifier;
pub mod mode;
pub mod property;
pub mod query;
pub mod render;
pub mod resolve;
pub mod routes;
pub mod sanitize;
pub mod state;

pub use config::Config;
pub use mode::Mode;
pub use routes::router;
pub use state::AppState;
