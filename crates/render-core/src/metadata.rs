use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Document-level information attached when the document is finalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    /// Left unset for byte-for-byte reproducible output.
    pub creation_date: Option<DateTime<Utc>>,
    /// Additional info-dictionary entries.
    pub custom: BTreeMap<String, String>,
}

impl DocumentMetadata {
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Default::default() }
    }

    /// Formats the creation date as a PDF date string (`D:YYYYMMDDHHmmSSZ`).
    pub fn pdf_creation_date(&self) -> Option<String> {
        self.creation_date
            .map(|d| d.format("D:%Y%m%d%H%M%SZ").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn creation_date_uses_pdf_format() {
        let meta = DocumentMetadata {
            creation_date: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).single(),
            ..Default::default()
        };
        assert_eq!(meta.pdf_creation_date().as_deref(), Some("D:20240309140500Z"));
        assert_eq!(DocumentMetadata::default().pdf_creation_date(), None);
    }
}
