//! HTML rendering for the embed page.
//!
//! The page is a fixed scaffold around two HTML fragments (tile and modal)
//! that were sanitized during resolution. They are inserted verbatim here.
//! Only the title, the export file names and the live/builder flag vary.

pub mod components;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;

use crate::mode::Mode;
use crate::resolve::RenderPayload;

use components::{
    BOOTSTRAP_CSS_URL, EMBED_CSS, EMBED_SCRIPT, HTML2CANVAS_URL, LUCIDE_URL, TRIPKICKS_CSS_URL,
};

/// File names and flags handed to the client-side export script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportNames {
    /// Base name for "Save Tile".
    pub tile: String,
    /// Base name for "Save Modal".
    pub modal: String,
    /// Base name for "Export HTML".
    pub full: String,
    pub builder: bool,
    pub bootstrap_css: &'static str,
    pub tripkicks_css: &'static str,
}

impl ExportNames {
    pub fn new(client: &str, mode: Mode) -> Self {
        Self {
            tile: format!("{client}_tile"),
            modal: format!("{client}_modal"),
            full: format!("{client}_{}_Export", mode.export_tag()),
            builder: mode.is_builder(),
            bootstrap_css: BOOTSTRAP_CSS_URL,
            tripkicks_css: TRIPKICKS_CSS_URL,
        }
    }

    /// `const EXPORT = {...};` with markup-significant characters escaped so
    /// the client label cannot close the surrounding script element.
    pub fn to_script(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string());
        let json = json
            .replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026");
        format!("const EXPORT = {json};\n")
    }
}

/// Render the complete embed document.
pub fn render_embed(payload: &RenderPayload, mode: Mode) -> Markup {
    let content = &payload.content;
    let exports = ExportNames::new(&content.client, mode);
    let title = format!("tkAuto Embed - {} {}", content.client, mode.export_tag());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                title { (title) }
                link href=(BOOTSTRAP_CSS_URL) rel="stylesheet";
                link href=(TRIPKICKS_CSS_URL) rel="stylesheet";
                script src=(HTML2CANVAS_URL) {}
                script src=(LUCIDE_URL) {}
                style { (PreEscaped(EMBED_CSS)) }
            }
            body data-mode=(mode.to_string()) {
                div class="success" id="success" { "Copied!" }

                @if let Some(message) = &payload.error {
                    (components::error_banner(message))
                }

                div class="embed-container" {
                    div class="tile-section" {
                        div class="tile-wrapper" {
                            div class="tile-block" id="tile" { (PreEscaped(&content.tile)) }
                        }
                    }

                    div class="divider" {}

                    div class="modal-section" {
                        div class="modal-block" id="modal" { (PreEscaped(&content.modal)) }
                        (components::controls())
                    }
                }

                (components::inline_script(&exports.to_script()))
                (components::inline_script(EMBED_SCRIPT))
            }
        }
    }
}
