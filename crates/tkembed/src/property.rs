//! Notion page records and their typed property values.
//!
//! Property parsing is total: a value whose shape we do not understand
//! becomes [`PropertyValue::Other`] instead of failing the whole page.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A page from a Notion database.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    /// Page id (dashed UUID).
    pub id: String,
    /// Last edit timestamp.
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    /// Properties keyed by name.
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Record {
    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// One run of rich text. Annotations and links are not needed here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub plain_text: String,
}

/// The computed result of a formula property.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaValue {
    String(Option<String>),
    Number(Option<f64>),
    Other,
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum PropertyValue {
    Title(Vec<TextRun>),
    RichText(Vec<TextRun>),
    Formula(FormulaValue),
    PlainText(Option<String>),
    Other,
}

/// Wire shape of a property, tagged by its `type` field.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TaggedProperty {
    Title {
        title: Option<Vec<TextRun>>,
    },
    RichText {
        rich_text: Option<Vec<TextRun>>,
    },
    Formula {
        formula: Option<TaggedFormula>,
    },
    PlainText {
        plain_text: Option<String>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TaggedFormula {
    String {
        string: Option<String>,
    },
    Number {
        number: Option<f64>,
    },
    #[serde(other)]
    Other,
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        let Ok(tagged) = TaggedProperty::deserialize(&value) else {
            return Self::Other;
        };

        match tagged {
            TaggedProperty::Title { title } => Self::Title(title.unwrap_or_default()),
            TaggedProperty::RichText { rich_text } => Self::RichText(rich_text.unwrap_or_default()),
            TaggedProperty::Formula { formula } => Self::Formula(match formula {
                Some(TaggedFormula::String { string }) => FormulaValue::String(string),
                Some(TaggedFormula::Number { number }) => FormulaValue::Number(number),
                Some(TaggedFormula::Other) | None => FormulaValue::Other,
            }),
            TaggedProperty::PlainText { plain_text } => Self::PlainText(plain_text),
            TaggedProperty::Other => Self::Other,
        }
    }
}

fn join_runs(runs: &[TextRun]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}

/// Flatten a property to plain text.
///
/// Title and rich text join their runs; formulas yield their string result,
/// falling back to the number result. Everything else is empty.
pub fn extract_text(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::Title(runs) | PropertyValue::RichText(runs)) if !runs.is_empty() => {
            join_runs(runs)
        }
        Some(PropertyValue::Formula(FormulaValue::String(Some(s)))) => s.clone(),
        Some(PropertyValue::Formula(FormulaValue::Number(Some(n)))) => n.to_string(),
        _ => String::new(),
    }
}

/// Flatten a property holding HTML source.
///
/// Unlike [`extract_text`], this reads plain-text properties and ignores
/// numeric formula results.
pub fn extract_html(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::Title(runs) | PropertyValue::RichText(runs)) => join_runs(runs),
        Some(PropertyValue::Formula(FormulaValue::String(Some(s)))) => s.clone(),
        Some(PropertyValue::PlainText(Some(s))) => s.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn runs(parts: &[&str]) -> Vec<TextRun> {
        parts
            .iter()
            .map(|p| TextRun {
                plain_text: p.to_string(),
            })
            .collect()
    }

    fn parse(value: serde_json::Value) -> PropertyValue {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn parses_notion_page() {
        let page = json!({
            "object": "page",
            "id": "abcdef01-2345-6789-abcd-ef0123456789",
            "last_edited_time": "2024-05-01T12:30:00.000Z",
            "properties": {
                "Name": {
                    "id": "title",
                    "type": "title",
                    "title": [{"type": "text", "plain_text": "Acme "}, {"type": "text", "plain_text": "Corp"}]
                },
                "tkid1": {
                    "id": "abc",
                    "type": "formula",
                    "formula": {"type": "string", "string": "Acme.XYZ123"}
                },
                "Tags": {
                    "id": "def",
                    "type": "multi_select",
                    "multi_select": []
                }
            }
        });

        let record: Record = serde_json::from_value(page).unwrap();
        assert_eq!(record.id, "abcdef01-2345-6789-abcd-ef0123456789");
        assert!(record.last_edited_time.is_some());
        assert_eq!(extract_text(record.property("Name")), "Acme Corp");
        assert_eq!(extract_text(record.property("tkid1")), "Acme.XYZ123");
        assert_eq!(record.property("Tags"), Some(&PropertyValue::Other));
    }

    #[test]
    fn malformed_properties_become_other() {
        assert_eq!(parse(json!({"type": "title", "title": "not a list"})), PropertyValue::Other);
        assert_eq!(parse(json!({"no_type": true})), PropertyValue::Other);
        assert_eq!(parse(json!(null)), PropertyValue::Other);
        assert_eq!(parse(json!(42)), PropertyValue::Other);
        assert_eq!(parse(json!({"type": "title", "title": null})), PropertyValue::Title(vec![]));
        assert_eq!(
            parse(json!({"type": "formula", "formula": {"type": "boolean", "boolean": true}})),
            PropertyValue::Formula(FormulaValue::Other)
        );
        assert_eq!(
            parse(json!({"type": "formula"})),
            PropertyValue::Formula(FormulaValue::Other)
        );
    }

    #[test]
    fn text_joins_runs() {
        let title = PropertyValue::Title(runs(&["a", "b", "c"]));
        let rich = PropertyValue::RichText(runs(&["<p>", "hi", "</p>"]));
        assert_eq!(extract_text(Some(&title)), "abc");
        assert_eq!(extract_text(Some(&rich)), "<p>hi</p>");
        assert_eq!(extract_html(Some(&title)), "abc");
        assert_eq!(extract_html(Some(&rich)), "<p>hi</p>");
    }

    #[test]
    fn formula_results() {
        let string = PropertyValue::Formula(FormulaValue::String(Some("x.y".into())));
        let empty_string = PropertyValue::Formula(FormulaValue::String(None));
        let int = PropertyValue::Formula(FormulaValue::Number(Some(3.0)));
        let frac = PropertyValue::Formula(FormulaValue::Number(Some(1.5)));
        let null_number = PropertyValue::Formula(FormulaValue::Number(None));

        assert_eq!(extract_text(Some(&string)), "x.y");
        assert_eq!(extract_text(Some(&empty_string)), "");
        assert_eq!(extract_text(Some(&int)), "3");
        assert_eq!(extract_text(Some(&frac)), "1.5");
        assert_eq!(extract_text(Some(&null_number)), "");

        assert_eq!(extract_html(Some(&string)), "x.y");
        assert_eq!(extract_html(Some(&int)), "");
        assert_eq!(extract_html(Some(&frac)), "");
    }

    #[test]
    fn plain_text_only_in_html_path() {
        let plain = PropertyValue::PlainText(Some("<b>bold</b>".into()));
        assert_eq!(extract_html(Some(&plain)), "<b>bold</b>");
        assert_eq!(extract_text(Some(&plain)), "");
        assert_eq!(extract_html(Some(&PropertyValue::PlainText(None))), "");
    }

    #[test]
    fn absent_and_unknown_are_empty() {
        let variants = [
            PropertyValue::Title(vec![]),
            PropertyValue::RichText(vec![]),
            PropertyValue::Formula(FormulaValue::Other),
            PropertyValue::PlainText(None),
            PropertyValue::Other,
        ];
        for variant in &variants {
            assert_eq!(extract_text(Some(variant)), "", "{variant:?}");
            assert_eq!(extract_html(Some(variant)), "", "{variant:?}");
        }
        assert_eq!(extract_text(None), "");
        assert_eq!(extract_html(None), "");
    }
}
