//! Core rendering abstractions for tabloid report documents.
//!
//! This crate provides the vocabulary shared by the report engine and the
//! rendering backends:
//! - `Block`, `TableBlock`, `Cell` and friends describing "tables of styled cells"
//! - `DocumentRenderer` trait for abstracting the paginating/serializing backend
//! - Page geometry and document metadata
//! - Error types for rendering operations

mod block;
mod error;
pub mod font;
mod metadata;
pub mod page;
mod traits;

pub use block::{
    Block, Borders, Cell, Chunk, HorizontalAlign, Padding, Phrase, RuleBlock, TableBlock, TableRow,
    VerticalAlign,
};
pub use error::RenderError;
pub use font::{Font, FontStyle, FontWeight};
pub use metadata::DocumentMetadata;
pub use page::{Margins, PageSettings, PageSize};
pub use traits::DocumentRenderer;
