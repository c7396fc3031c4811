//! Renders structured reports into paginated PDF documents.
//!
//! A report is a list of sections, each declaring a content type
//! (`name-value`, `user-timestamp-description`, `user-timestamp-link` or
//! `links`). Every content type has a fixed table layout; the generator
//! places each section as a header, a separating rule and its table.
//!
//! ```no_run
//! use tabloid::{Report, ReportGenerator};
//!
//! # fn main() -> Result<(), tabloid::ReportError> {
//! let report: Report = std::fs::read_to_string("report.json")?.parse()?;
//! ReportGenerator::builder()
//!     .with_title("Case summary")
//!     .build()?
//!     .generate_to_file(&report, "report.pdf")?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod generator;
pub mod model;
pub mod renderers;
pub mod styling;

pub use config::{GeneratorConfig, SectionErrorPolicy};
pub use dispatcher::{render_section, RenderedSection};
pub use error::ReportError;
pub use generator::{AssemblySummary, ReportGenerator, ReportGeneratorBuilder};
pub use model::{
    ContentType, LinkItem, NameValueItem, PageWidth, Report, Section, SectionContent,
    UserTimestampDescriptionItem, UserTimestampLinkItem,
};
pub use styling::RowStyle;

// Re-export the rendering vocabulary so callers need only one dependency.
pub use tabloid_render_core::{
    Block, DocumentMetadata, DocumentRenderer, Margins, PageSettings, PageSize, RenderError, TableBlock,
};
pub use tabloid_render_lopdf::LopdfRenderer;
