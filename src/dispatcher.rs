//! Maps a section's content type to its renderer and builds the header block.

use crate::error::ReportError;
use crate::model::{Section, SectionContent};
use crate::renderers;
use tabloid_render_core::{Cell, Font, HorizontalAlign, Phrase, TableBlock, TableRow, VerticalAlign};

pub const HEADER_COLUMNS: [f32; 2] = [4.0, 5.0];
const HEADER_FONT: Font = Font::bold_italic(16.0);
const COUNT_FONT: Font = Font::regular(12.0);

/// One section ready for placement: its header block and its content table.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub header: TableBlock,
    pub table: TableBlock,
}

/// Two borderless cells: the section title and its right-aligned item count.
/// The count cell is empty when `count` is `None`.
pub fn header_block(title: &str, count: Option<usize>) -> TableBlock {
    let title_cell = Cell::new(Phrase::text(title, HEADER_FONT)).with_padding_bottom(0.0);
    let count_text = count.map(|n| n.to_string()).unwrap_or_default();
    let count_cell = Cell::new(Phrase::text(count_text, COUNT_FONT))
        .with_padding_bottom(0.0)
        .with_align(HorizontalAlign::Right, VerticalAlign::Bottom);

    let mut table = TableBlock::new(HEADER_COLUMNS.to_vec());
    table.push_row(TableRow::new(vec![title_cell, count_cell]));
    table
}

/// Renders one section.
///
/// Fails with [`ReportError::UnsupportedContentType`] for content types that
/// have no renderer (currently `text`).
pub fn render_section(section: &Section) -> Result<RenderedSection, ReportError> {
    let table = match &section.content {
        SectionContent::NameValue(items) => renderers::render_name_value(items),
        SectionContent::UserTimestampDescription(items) => renderers::render_user_timestamp_description(items),
        SectionContent::UserTimestampLink(items) => renderers::render_user_timestamp_link(items),
        SectionContent::Links(items) => renderers::render_links(items),
        SectionContent::Text(_) => {
            return Err(ReportError::UnsupportedContentType {
                header: section.header.clone(),
                content_type: section.content_type().to_string(),
            });
        }
    };
    log::debug!(
        "Rendered section '{}' ({}) with {} row(s)",
        section.header,
        section.content_type(),
        table.rows.len()
    );
    Ok(RenderedSection {
        header: header_block(&section.header, section.content.item_count()),
        table,
    })
}
