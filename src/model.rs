//! The report data model and its decoding from a generic JSON data tree.
//!
//! A report is an ordered list of sections. Each section declares a content
//! type, and that tag decides the shape every one of its items must have.
//! Decoding checks each item against its section's shape up front, so the
//! rendering stages only ever see well-typed content.

use crate::config::SectionErrorPolicy;
use crate::error::ReportError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    NameValue,
    UserTimestampDescription,
    UserTimestampLink,
    Links,
    Text,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::NameValue,
        ContentType::UserTimestampDescription,
        ContentType::UserTimestampLink,
        ContentType::Links,
        ContentType::Text,
    ];

    /// The name used for this content type in report data.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::NameValue => "name-value",
            ContentType::UserTimestampDescription => "user-timestamp-description",
            ContentType::UserTimestampLink => "user-timestamp-link",
            ContentType::Links => "links",
            ContentType::Text => "text",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str() == s)
            .ok_or_else(|| format!("unknown content type '{}'", s))
    }
}

/// Value of the `styles-page-width` item attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageWidth {
    Full,
    Half,
}

fn deserialize_full_width<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Option::<PageWidth>::deserialize(deserializer)?, Some(PageWidth::Full)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameValueItem {
    pub name: String,
    pub value: String,
    /// The value spans every column after the name.
    #[serde(rename = "styles-page-width", default, deserialize_with = "deserialize_full_width")]
    pub full_width: bool,
}

impl NameValueItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), full_width: false }
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserTimestampDescriptionItem {
    pub user: String,
    pub timestamp: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserTimestampLinkItem {
    pub user: String,
    pub timestamp: String,
    pub hypertext: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkItem {
    pub hypertext: String,
    pub url: String,
}

impl LinkItem {
    pub fn new(hypertext: impl Into<String>, url: impl Into<String>) -> Self {
        Self { hypertext: hypertext.into(), url: url.into() }
    }
}

/// A section's items, tagged by content type.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    NameValue(Vec<NameValueItem>),
    UserTimestampDescription(Vec<UserTimestampDescriptionItem>),
    UserTimestampLink(Vec<UserTimestampLinkItem>),
    Links(Vec<LinkItem>),
    /// Carried through undecoded; no item shape is defined for text.
    Text(Vec<Value>),
}

impl SectionContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            SectionContent::NameValue(_) => ContentType::NameValue,
            SectionContent::UserTimestampDescription(_) => ContentType::UserTimestampDescription,
            SectionContent::UserTimestampLink(_) => ContentType::UserTimestampLink,
            SectionContent::Links(_) => ContentType::Links,
            SectionContent::Text(_) => ContentType::Text,
        }
    }

    /// Number of enumerable items, or `None` when the content type has no
    /// item list semantics.
    pub fn item_count(&self) -> Option<usize> {
        match self {
            SectionContent::NameValue(items) => Some(items.len()),
            SectionContent::UserTimestampDescription(items) => Some(items.len()),
            SectionContent::UserTimestampLink(items) => Some(items.len()),
            SectionContent::Links(items) => Some(items.len()),
            SectionContent::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub header: String,
    pub content: SectionContent,
}

impl Section {
    pub fn new(header: impl Into<String>, content: SectionContent) -> Self {
        Self { header: header.into(), content }
    }

    pub fn name_value(header: impl Into<String>, items: Vec<NameValueItem>) -> Self {
        Self::new(header, SectionContent::NameValue(items))
    }

    pub fn links(header: impl Into<String>, items: Vec<LinkItem>) -> Self {
        Self::new(header, SectionContent::Links(items))
    }

    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }

    /// Decodes one section object. `position` is only used in messages.
    pub fn from_value(value: &Value, position: usize) -> Result<Self, ReportError> {
        let obj = value
            .as_object()
            .ok_or_else(|| ReportError::InvalidReport(format!("section {} is not an object", position)))?;

        let header = obj
            .get("header")
            .and_then(Value::as_str)
            .ok_or_else(|| ReportError::InvalidReport(format!("section {} has no string 'header'", position)))?
            .to_string();

        let type_name = obj
            .get("contents-type")
            .and_then(Value::as_str)
            .ok_or_else(|| ReportError::InvalidReport(format!("section '{}' has no string 'contents-type'", header)))?;
        let content_type = type_name
            .parse::<ContentType>()
            .map_err(|_| ReportError::UnsupportedContentType {
                header: header.clone(),
                content_type: type_name.to_string(),
            })?;

        let contents = match obj.get("contents") {
            Some(Value::Array(items)) => items.as_slice(),
            None if content_type == ContentType::Text => &[],
            _ => {
                return Err(ReportError::InvalidReport(format!(
                    "section '{}' has no 'contents' array",
                    header
                )));
            }
        };

        let content = match content_type {
            ContentType::NameValue => SectionContent::NameValue(decode_items(&header, content_type, contents)?),
            ContentType::UserTimestampDescription => {
                SectionContent::UserTimestampDescription(decode_items(&header, content_type, contents)?)
            }
            ContentType::UserTimestampLink => {
                SectionContent::UserTimestampLink(decode_items(&header, content_type, contents)?)
            }
            ContentType::Links => SectionContent::Links(decode_items(&header, content_type, contents)?),
            ContentType::Text => SectionContent::Text(contents.to_vec()),
        };
        Ok(Section { header, content })
    }
}

fn decode_items<T>(header: &str, content_type: ContentType, items: &[Value]) -> Result<Vec<T>, ReportError>
where
    T: for<'de> Deserialize<'de>,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            T::deserialize(item).map_err(|e| ReportError::ContentValidation {
                header: header.to_string(),
                content_type,
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// An ordered sequence of sections; immutable once decoded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Decodes a report, failing on the first invalid section.
    pub fn from_value(value: &Value) -> Result<Self, ReportError> {
        Self::from_value_with_policy(value, SectionErrorPolicy::Abort)
    }

    /// Decodes a report. With [`SectionErrorPolicy::Skip`], sections whose
    /// content type or items are invalid are logged and left out.
    pub fn from_value_with_policy(value: &Value, policy: SectionErrorPolicy) -> Result<Self, ReportError> {
        let sections = value
            .get("sections")
            .and_then(Value::as_array)
            .ok_or_else(|| ReportError::InvalidReport("missing 'sections' array".into()))?;

        let mut decoded = Vec::with_capacity(sections.len());
        for (position, section) in sections.iter().enumerate() {
            match Section::from_value(section, position) {
                Ok(section) => decoded.push(section),
                Err(e) if e.is_section_error() && policy == SectionErrorPolicy::Skip => {
                    log::warn!("Skipping section {}: {}", position, e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Report { sections: decoded })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }
}

impl FromStr for Report {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}
