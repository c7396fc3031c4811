//! Generation settings: document metadata, page geometry and failure policy.

use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tabloid_render_core::{Margins, PageSettings, PageSize};

pub const DEFAULT_TITLE: &str = "Report";

/// What to do when a single section cannot be decoded or rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionErrorPolicy {
    /// Fail the whole generation call with the section's error. (Default)
    #[default]
    Abort,
    /// Log the error and leave the section out of the document.
    /// Output I/O errors always abort.
    Skip,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub page_size: PageSize,
    pub margins: Margins,
    pub on_section_error: SectionErrorPolicy,
    /// Extra entries for the document information dictionary.
    pub custom_metadata: BTreeMap<String, String>,
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(|e| ReportError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn page_settings(&self) -> PageSettings {
        PageSettings { size: self.page_size, margins: self.margins }
    }

    /// Rejects geometry that leaves no room for content.
    pub fn validate(&self) -> Result<(), ReportError> {
        let settings = self.page_settings();
        if settings.content_width() <= 0.0 || settings.content_height() <= 0.0 {
            return Err(ReportError::Config(format!(
                "margins {:?} leave no content area on a {:?} page",
                self.margins, self.page_size
            )));
        }
        Ok(())
    }
}
