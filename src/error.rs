// src/error.rs
use crate::model::ContentType;
use tabloid_render_core::RenderError;
use thiserror::Error;

/// A comprehensive error type for one report generation call.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Section '{header}': content type '{content_type}' is not supported")]
    UnsupportedContentType { header: String, content_type: String },

    #[error("Section '{header}' ({content_type}), item {index}: {reason}")]
    ContentValidation {
        header: String,
        content_type: ContentType,
        index: usize,
        reason: String,
    },

    #[error("Report is malformed: {0}")]
    InvalidReport(String),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}

impl ReportError {
    /// Header of the section this error is attributed to, if any.
    pub fn section_header(&self) -> Option<&str> {
        match self {
            ReportError::UnsupportedContentType { header, .. }
            | ReportError::ContentValidation { header, .. } => Some(header),
            _ => None,
        }
    }

    /// Whether the error concerns a single section's content rather than
    /// the whole generation call.
    pub fn is_section_error(&self) -> bool {
        self.section_header().is_some()
    }
}
