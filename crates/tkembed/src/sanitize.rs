//! Denylist scrubbing for HTML pulled from Notion.
//!
//! This is not an HTML sanitizer. It removes `javascript:` URLs and inline
//! event-handler attributes by pattern, without parsing markup.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static JAVASCRIPT_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("scheme regex should compile"));

static EVENT_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bon\w+\s*=").expect("handler regex should compile"));

/// Strip `javascript:` tokens and `on<event>=` attributes.
///
/// Removal repeats until nothing matches, so fragments that join into a new
/// token after one pass are removed too.
pub fn sanitize(html: &str) -> String {
    let mut current = html.to_string();
    loop {
        let stripped = match strip_once(&current) {
            Cow::Borrowed(_) => break,
            Cow::Owned(stripped) => stripped,
        };
        current = stripped;
    }
    current
}

fn strip_once(html: &str) -> Cow<'_, str> {
    match JAVASCRIPT_SCHEME.replace_all(html, "") {
        Cow::Borrowed(unchanged) => EVENT_HANDLER.replace_all(unchanged, ""),
        Cow::Owned(stripped) => Cow::Owned(EVENT_HANDLER.replace_all(&stripped, "").into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn clean_input_is_unchanged() {
        let html = r#"<div class="tile"><a href="https://tripkicks.com">Book</a> button=ok</div>"#;
        assert_eq!(sanitize(html), html);
    }

    #[test]
    fn removes_javascript_scheme_any_case() {
        assert_eq!(
            sanitize(r#"<a href="javascript:alert(1)">x</a>"#),
            r#"<a href="alert(1)">x</a>"#
        );
        assert_eq!(sanitize("JaVaScRiPt:go()"), "go()");
    }

    #[test]
    fn removes_event_handlers() {
        assert_eq!(
            sanitize(r#"<img src="a.png" onerror="steal()">"#),
            r#"<img src="a.png" "steal()">"#
        );
        assert_eq!(
            sanitize(r#"<div ONCLICK = "x()">"#),
            r#"<div  "x()">"#
        );
        assert_eq!(sanitize("<body onload=run()>"), "<body run()>");
    }

    #[test]
    fn handler_must_start_a_word() {
        // "button=" and "action=" contain "on" but are not handlers.
        let html = r#"<form action="/go" data-button="primary">"#;
        assert_eq!(sanitize(html), html);
    }

    #[test]
    fn nested_tokens_are_fully_removed() {
        let out = sanitize("javajavascript:script:alert(1)");
        assert_eq!(out, "alert(1)");
        assert!(!out.to_lowercase().contains("javascript:"));
    }
}
