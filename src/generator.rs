// src/generator.rs

use crate::config::{GeneratorConfig, SectionErrorPolicy};
use crate::dispatcher::{self, RenderedSection};
use crate::error::ReportError;
use crate::model::Report;
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;
use tabloid_render_core::{Block, DocumentMetadata, DocumentRenderer, Margins, PageSize, RuleBlock};
use tabloid_render_lopdf::LopdfRenderer;

/// Outcome of one assembly pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblySummary {
    pub sections_rendered: usize,
    pub sections_skipped: usize,
}

/// Turns a [`Report`] into a finished document.
///
/// Sections are rendered strictly in order. Each contributes its header
/// block, a separating rule and its content table. The output is only
/// written once every section has been placed.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: GeneratorConfig,
    creation_date: Option<DateTime<Utc>>,
}

impl ReportGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        ReportGenerator { config, creation_date: None }
    }

    pub fn builder() -> ReportGeneratorBuilder {
        ReportGeneratorBuilder::new()
    }

    pub fn metadata(&self) -> DocumentMetadata {
        DocumentMetadata {
            title: Some(self.config.title().to_string()),
            author: self.config.author.clone(),
            subject: self.config.subject.clone(),
            creator: None,
            creation_date: self.creation_date,
            custom: self.config.custom_metadata.clone(),
        }
    }

    /// Feeds every section of `report` to `renderer` in order.
    ///
    /// The renderer must already have begun its document. Section failures
    /// abort the pass unless the configuration asks to skip them.
    pub fn assemble<R: DocumentRenderer>(
        &self,
        report: &Report,
        renderer: &mut R,
    ) -> Result<AssemblySummary, ReportError> {
        let mut summary = AssemblySummary::default();
        for section in &report.sections {
            let rendered = match dispatcher::render_section(section) {
                Ok(rendered) => rendered,
                Err(e) if self.config.on_section_error == SectionErrorPolicy::Skip => {
                    log::warn!("Skipping section '{}': {}", section.header, e);
                    summary.sections_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };
            let RenderedSection { header, table } = rendered;
            renderer.add_block(Block::Table(header))?;
            renderer.add_block(Block::Rule(RuleBlock::default()))?;
            renderer.add_block(Block::Table(table))?;
            summary.sections_rendered += 1;
        }
        Ok(summary)
    }

    /// Renders `report` with `renderer` and writes the finished document to `writer`.
    pub fn generate_with<R: DocumentRenderer, W: Write>(
        &self,
        report: &Report,
        mut renderer: R,
        writer: W,
    ) -> Result<W, ReportError> {
        log::info!("Generating '{}' from {} section(s)", self.config.title(), report.sections.len());
        renderer.begin_document(self.metadata())?;
        let summary = self.assemble(report, &mut renderer)?;
        let writer = renderer.finish(writer)?;
        log::info!(
            "Generated document: {} section(s) rendered, {} skipped",
            summary.sections_rendered,
            summary.sections_skipped
        );
        Ok(writer)
    }

    /// Renders `report` to PDF and writes it to `writer`.
    pub fn generate<W: Write>(&self, report: &Report, writer: W) -> Result<W, ReportError> {
        self.config.validate()?;
        let renderer = LopdfRenderer::new(self.config.page_settings());
        self.generate_with(report, renderer, writer)
    }

    pub fn generate_to_bytes(&self, report: &Report) -> Result<Vec<u8>, ReportError> {
        self.generate(report, Vec::new())
    }

    /// Renders `report` and stores it at `path`.
    ///
    /// The destination is replaced only after the whole document has been
    /// written, so a failure never leaves a truncated file behind.
    pub fn generate_to_file<P: AsRef<Path>>(&self, report: &Report, path: P) -> Result<(), ReportError> {
        let pdf_bytes = self.generate_to_bytes(report)?;
        write_atomically(path.as_ref(), &pdf_bytes)?;
        log::info!("Wrote {} bytes to {}", pdf_bytes.len(), path.as_ref().display());
        Ok(())
    }
}

#[cfg(feature = "native")]
fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(not(feature = "native"))]
fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, bytes)
}

/// Fluent construction of a [`ReportGenerator`].
#[derive(Debug, Default)]
pub struct ReportGeneratorBuilder {
    config: GeneratorConfig,
    creation_date: Option<DateTime<Utc>>,
}

impl ReportGeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ReportError> {
        self.config = GeneratorConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.config.page_size = page_size;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.config.margins = margins;
        self
    }

    pub fn with_section_error_policy(mut self, policy: SectionErrorPolicy) -> Self {
        self.config.on_section_error = policy;
        self
    }

    pub fn with_metadata_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.custom_metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    pub fn build(self) -> Result<ReportGenerator, ReportError> {
        self.config.validate()?;
        Ok(ReportGenerator { config: self.config, creation_date: self.creation_date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinkItem, NameValueItem, Section, SectionContent};
    use tabloid_render_core::RenderError;

    /// Keeps the block kinds in arrival order.
    #[derive(Default)]
    struct KindRecorder {
        kinds: Vec<&'static str>,
    }

    impl DocumentRenderer for KindRecorder {
        fn begin_document(&mut self, _metadata: DocumentMetadata) -> Result<(), RenderError> {
            Ok(())
        }

        fn add_block(&mut self, block: Block) -> Result<(), RenderError> {
            self.kinds.push(block.kind());
            Ok(())
        }

        fn finish<W: Write>(self, mut writer: W) -> Result<W, RenderError> {
            writer.write_all(self.kinds.join(",").as_bytes())?;
            Ok(writer)
        }
    }

    fn report_with_text() -> Report {
        Report::new(vec![
            Section::name_value("First", vec![NameValueItem::new("a", "1")]),
            Section::new("Notes", SectionContent::Text(vec![])),
            Section::links("Last", vec![LinkItem::new("x", "y")]),
        ])
    }

    #[test]
    fn each_section_emits_header_rule_table() {
        let report = Report::new(vec![
            Section::name_value("A", vec![NameValueItem::new("a", "1")]),
            Section::links("B", vec![LinkItem::new("x", "y")]),
        ]);
        let mut recorder = KindRecorder::default();
        let summary = ReportGenerator::default().assemble(&report, &mut recorder).unwrap();
        assert_eq!(summary, AssemblySummary { sections_rendered: 2, sections_skipped: 0 });
        assert_eq!(recorder.kinds, vec!["table", "rule", "table", "table", "rule", "table"]);
    }

    #[test]
    fn abort_policy_writes_nothing() {
        let generator = ReportGenerator::default();
        let out = generator.generate_with(&report_with_text(), KindRecorder::default(), Vec::new());
        assert!(matches!(out, Err(ReportError::UnsupportedContentType { .. })));
    }

    #[test]
    fn skip_policy_omits_failing_sections() {
        let generator = ReportGenerator::builder()
            .with_section_error_policy(SectionErrorPolicy::Skip)
            .build()
            .unwrap();
        let mut recorder = KindRecorder::default();
        let summary = generator.assemble(&report_with_text(), &mut recorder).unwrap();
        assert_eq!(summary, AssemblySummary { sections_rendered: 2, sections_skipped: 1 });
        assert_eq!(recorder.kinds.len(), 6);
    }

    #[test]
    fn metadata_reflects_config() {
        let generator = ReportGenerator::builder()
            .with_title("Quarterly")
            .with_metadata_entry("header1", "hello world")
            .build()
            .unwrap();
        let meta = generator.metadata();
        assert_eq!(meta.title.as_deref(), Some("Quarterly"));
        assert_eq!(meta.custom.get("header1").map(String::as_str), Some("hello world"));
        assert!(meta.creation_date.is_none());
    }

    #[test]
    fn builder_rejects_unusable_margins() {
        let result = ReportGenerator::builder().with_margins(Margins::all(1000.0)).build();
        assert!(matches!(result, Err(ReportError::Config(_))));
    }
}
