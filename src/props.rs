//! Typed property model for Notion pages, with bidirectional conversion.
//!
//! The API returns property values as verbose tagged objects
//! (`{"type": "select", "select": {"name": "Done"}}`). [`simplify`] reduces
//! a property map to flat scalars and arrays for display; [`build_properties`]
//! goes the other way for create/update calls. Simplification is lossy: the
//! kind tag is discarded, so updates must supply values already in the
//! API's native shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Default name of a database's title property.
///
/// Notion schemas conventionally call it "Name", but the title property can
/// be renamed per database; callers override via `--title-property`.
pub const DEFAULT_TITLE_PROPERTY: &str = "Name";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
}

/// One fragment of a rich-text sequence.
///
/// Plain text fragments carry `text.content`; mentions and equations only
/// carry `plain_text`, which serves as the fallback when concatenating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextFragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
}

impl RichTextFragment {
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            text: Some(TextContent {
                content: content.into(),
                link: None,
            }),
            plain_text: None,
        }
    }

    fn content(&self) -> &str {
        match (&self.text, &self.plain_text) {
            (Some(text), _) => &text.content,
            (None, Some(plain)) => plain,
            (None, None) => "",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Property kinds this tool interprets, dispatched on the API's `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KnownProperty {
    Title { title: Vec<RichTextFragment> },
    RichText { rich_text: Vec<RichTextFragment> },
    Select { select: Option<SelectOption> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Status { status: Option<SelectOption> },
    Date { date: Option<DateValue> },
    Number { number: Option<f64> },
    Checkbox { checkbox: bool },
    Email { email: Option<String> },
    Url { url: Option<String> },
}

/// A property value as returned by the API.
///
/// Kinds without a [`KnownProperty`] variant (formula, relation, rollup,
/// people, files, ...) deserialize as `Opaque` and pass through
/// simplification untouched, so new API kinds never break this tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Known(KnownProperty),
    Opaque(Value),
}

/// The reduced form of a property value.
///
/// `Null` stands in for an unset select/status/date/number/email/url so the
/// property name stays visible in the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SimplifiedValue {
    Text(String),
    List(Vec<String>),
    Number(f64),
    Bool(bool),
    Date(DateValue),
    Raw(Value),
    Null,
}

/// Concatenates fragment contents in sequence order, with no separator.
pub fn concat_fragments(fragments: &[RichTextFragment]) -> String {
    fragments.iter().map(RichTextFragment::content).collect()
}

/// Reduces one typed property value per the simplification rules.
/// Total: never fails for a well-formed value.
pub fn simplify_value(value: &PropertyValue) -> SimplifiedValue {
    match value {
        PropertyValue::Known(known) => match known {
            KnownProperty::Title { title } => SimplifiedValue::Text(concat_fragments(title)),
            KnownProperty::RichText { rich_text } => {
                SimplifiedValue::Text(concat_fragments(rich_text))
            }
            KnownProperty::Select { select } => option_name(select),
            KnownProperty::MultiSelect { multi_select } => SimplifiedValue::List(
                multi_select.iter().map(|option| option.name.clone()).collect(),
            ),
            KnownProperty::Status { status } => option_name(status),
            KnownProperty::Date { date } => match date {
                Some(date) => SimplifiedValue::Date(date.clone()),
                None => SimplifiedValue::Null,
            },
            // 0 and false are values, not absences
            KnownProperty::Number { number } => match number {
                Some(n) => SimplifiedValue::Number(*n),
                None => SimplifiedValue::Null,
            },
            KnownProperty::Checkbox { checkbox } => SimplifiedValue::Bool(*checkbox),
            KnownProperty::Email { email } => optional_text(email),
            KnownProperty::Url { url } => optional_text(url),
        },
        PropertyValue::Opaque(raw) => SimplifiedValue::Raw(raw.clone()),
    }
}

fn option_name(option: &Option<SelectOption>) -> SimplifiedValue {
    match option {
        Some(option) => SimplifiedValue::Text(option.name.clone()),
        None => SimplifiedValue::Null,
    }
}

fn optional_text(value: &Option<String>) -> SimplifiedValue {
    match value {
        Some(value) => SimplifiedValue::Text(value.clone()),
        None => SimplifiedValue::Null,
    }
}

/// Reduces a full property map for display.
pub fn simplify(props: &BTreeMap<String, PropertyValue>) -> BTreeMap<String, SimplifiedValue> {
    props
        .iter()
        .map(|(name, value)| (name.clone(), simplify_value(value)))
        .collect()
}

/// Assembles the property map for a create/update call.
///
/// `title` is wrapped as a title-kind value under `title_property`; `extra`
/// is a JSON fragment already in the API's native shape, merged over the
/// title entry (extra wins on key collision). An empty map is valid; the
/// API enforces schema completeness, not this function.
pub fn build_properties(
    title: Option<&str>,
    extra: Option<&str>,
    title_property: &str,
) -> Result<Map<String, Value>> {
    let mut props = Map::new();

    if let Some(title) = title {
        let value = PropertyValue::Known(KnownProperty::Title {
            title: vec![RichTextFragment::from_content(title)],
        });
        let value = serde_json::to_value(value).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize title property".to_string()))
        })?;
        props.insert(title_property.to_string(), value);
    }

    if let Some(extra) = extra {
        let parsed: Map<String, Value> = serde_json::from_str(extra)
            .map_err(|e| Error::validation_invalid_json(e, Some("parse --properties".to_string())))?;
        for (name, value) in parsed {
            props.insert(name, value);
        }
    }

    Ok(props)
}
