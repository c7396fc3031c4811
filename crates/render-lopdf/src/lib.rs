//! Paginating PDF renderer using lopdf.
//!
//! This crate turns the abstract blocks produced by the report engine into
//! positioned text, rules and link annotations, breaking tables across pages
//! row by row.

pub mod encoding;
mod layout;
pub mod metrics;
mod renderer;

pub use layout::{layout_phrase, LineFragment, TextLine, LINE_HEIGHT_FACTOR};
pub use renderer::LopdfRenderer;
