#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use std::io::Write;
use tabloid::{Block, DocumentMetadata, DocumentRenderer, RenderError, Report, ReportError, ReportGenerator};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Generate a PDF from a report with the default generator
pub fn generate_pdf(report: &Report) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf_with(&ReportGenerator::default(), report)
}

/// Generate a PDF from a report with the given generator
pub fn generate_pdf_with(
    generator: &ReportGenerator,
    report: &Report,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = generator.generate_to_bytes(report)?;
    GeneratedPdf::from_bytes(bytes)
}

/// A renderer that keeps every block it receives instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub metadata: Option<DocumentMetadata>,
    pub blocks: Vec<Block>,
}

impl DocumentRenderer for RecordingRenderer {
    fn begin_document(&mut self, metadata: DocumentMetadata) -> Result<(), RenderError> {
        self.metadata = Some(metadata);
        Ok(())
    }

    fn add_block(&mut self, block: Block) -> Result<(), RenderError> {
        if self.metadata.is_none() {
            return Err(RenderError::NotStarted);
        }
        self.blocks.push(block);
        Ok(())
    }

    fn finish<W: Write>(self, writer: W) -> Result<W, RenderError> {
        Ok(writer)
    }
}

/// Assemble a report into a recorder, returning the captured blocks
pub fn record_blocks(generator: &ReportGenerator, report: &Report) -> Result<RecordingRenderer, ReportError> {
    let mut recorder = RecordingRenderer::default();
    recorder.begin_document(generator.metadata())?;
    generator.assemble(report, &mut recorder)?;
    Ok(recorder)
}
