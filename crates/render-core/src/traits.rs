use crate::block::Block;
use crate::error::RenderError;
use crate::metadata::DocumentMetadata;
use std::io::Write;

/// A trait defining the API for a document renderer.
///
/// The report assembler feeds blocks in document order; the renderer owns
/// pagination and serialization. Implementations must not write anything to
/// the output until `finish` is called, so that a failed generation leaves
/// the destination untouched.
pub trait DocumentRenderer {
    /// Prepares the renderer for a new document.
    fn begin_document(&mut self, metadata: DocumentMetadata) -> Result<(), RenderError>;

    /// Places the next block after everything added so far.
    fn add_block(&mut self, block: Block) -> Result<(), RenderError>;

    /// Finalizes the document and writes it to the provided output stream.
    fn finish<W: Write>(self, writer: W) -> Result<W, RenderError>;
}
