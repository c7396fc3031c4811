// src/renderer.rs
use crate::encoding::{to_uri_bytes, to_win_ansi};
use crate::layout::{layout_phrase, lines_height, TextLine};
use crate::metrics::{ascent, descent};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::io::Write;
use tabloid_render_core::{
    Block, Cell, DocumentMetadata, DocumentRenderer, Font, HorizontalAlign, PageSettings,
    RenderError, RuleBlock, TableBlock, TableRow, VerticalAlign,
};

const BORDER_WIDTH: f32 = 0.5;
const RULE_GAP: f32 = 2.0;
const PRODUCER: &str = "tabloid";

/// A paginating PDF renderer built on an in-memory `lopdf` document.
///
/// Blocks are laid out top to bottom inside the page's content box. Tables
/// break between rows; nothing is written to the output until [`finish`].
///
/// [`finish`]: DocumentRenderer::finish
pub struct LopdfRenderer {
    document: Document,
    settings: PageSettings,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page: Option<PageContext>,
    metadata: Option<DocumentMetadata>,
}

struct LinkArea {
    rect: [f32; 4],
    url: String,
}

/// Drawing state of the page currently being filled.
struct PageContext {
    content: Content,
    links: Vec<LinkArea>,
    /// Distance from the top edge of the page to the next free line.
    cursor_y: f32,
    font_key: Option<(usize, u32)>,
}

impl PageContext {
    fn new(top: f32) -> Self {
        Self {
            content: Content { operations: vec![] },
            links: Vec::new(),
            cursor_y: top,
            font_key: None,
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }
}

/// A cell resolved against the table's column widths.
struct PlacedCell<'a> {
    cell: &'a Cell,
    x: f32,
    width: f32,
    lines: Vec<TextLine>,
}

impl PlacedCell<'_> {
    fn height(&self) -> f32 {
        self.cell.padding.vertical() + lines_height(&self.lines)
    }
}

impl LopdfRenderer {
    pub fn new(settings: PageSettings) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self {
            document,
            settings,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            page: None,
            metadata: None,
        }
    }

    /// Pages completed so far, plus the one being filled.
    pub fn page_count(&self) -> usize {
        self.page_ids.len() + usize::from(self.page.is_some())
    }

    fn font_resource_name(index: usize) -> String {
        format!("F{}", index + 1)
    }

    fn page_bottom(&self) -> f32 {
        self.settings.height() - self.settings.margins.bottom
    }

    fn pdf_y(&self, y: f32) -> f32 {
        self.settings.height() - y
    }

    fn current_page(&mut self) -> &mut PageContext {
        let top = self.settings.margins.top;
        self.page.get_or_insert_with(|| PageContext::new(top))
    }

    fn at_page_top(&self) -> bool {
        self.page
            .as_ref()
            .is_none_or(|p| p.cursor_y <= self.settings.margins.top)
    }

    fn flush_page(&mut self) -> Result<(), RenderError> {
        let Some(page) = self.page.take() else {
            return Ok(());
        };
        let content_id = self
            .document
            .add_object(Stream::new(dictionary! {}, page.content.encode()?));

        let annotations: Vec<Object> = page
            .links
            .into_iter()
            .map(|link| {
                let action = dictionary! {
                    "Type" => "Action",
                    "S" => "URI",
                    "URI" => Object::String(to_uri_bytes(&link.url), StringFormat::Literal),
                };
                let annot = dictionary! {
                    "Type" => "Annot",
                    "Subtype" => "Link",
                    "Rect" => link.rect.iter().map(|v| Object::Real(*v)).collect::<Vec<Object>>(),
                    "Border" => vec![0.into(), 0.into(), 0.into()],
                    "A" => action,
                };
                Object::Reference(self.document.add_object(annot))
            })
            .collect();

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), self.settings.width().into(), self.settings.height().into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        if !annotations.is_empty() {
            page_dict.set("Annots", Object::Array(annotations));
        }
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        log::debug!("Finished page {}", self.page_ids.len());
        Ok(())
    }

    /// Starts a new page when `height` does not fit below the cursor.
    fn ensure_space(&mut self, height: f32) -> Result<(), RenderError> {
        if height > self.settings.content_height() {
            log::warn!(
                "Element of height {:.2} exceeds the page content height {:.2}; it will overflow",
                height,
                self.settings.content_height()
            );
        }
        let bottom = self.page_bottom();
        let cursor = self.current_page().cursor_y;
        if cursor + height > bottom && !self.at_page_top() {
            self.flush_page()?;
            self.current_page();
        }
        Ok(())
    }

    fn place_row<'a>(row: &'a TableRow, col_widths: &[f32], left: f32) -> Vec<PlacedCell<'a>> {
        let mut column = 0;
        let mut x = left;
        row.cells
            .iter()
            .map(|cell| {
                let end = (column + cell.colspan).min(col_widths.len());
                let width: f32 = col_widths[column..end].iter().sum();
                let inner = (width - cell.padding.horizontal()).max(0.0);
                let placed = PlacedCell { cell, x, width, lines: layout_phrase(&cell.phrase, inner) };
                column = end;
                x += width;
                placed
            })
            .collect()
    }

    fn draw_table(&mut self, table: &TableBlock) -> Result<(), RenderError> {
        table.validate()?;
        let content_width = self.settings.content_width();
        let col_widths = table.column_widths(content_width);
        let table_width: f32 = col_widths.iter().sum();
        let left = self.settings.margins.left + (content_width - table_width) / 2.0;

        if !self.at_page_top() {
            self.current_page().cursor_y += table.spacing_before;
        }

        for row in &table.rows {
            let cells = Self::place_row(row, &col_widths, left);
            let row_height = cells.iter().map(PlacedCell::height).fold(0.0, f32::max);
            self.ensure_space(row_height)?;
            let top = self.current_page().cursor_y;
            for cell in &cells {
                self.draw_cell(cell, top, row_height);
            }
            self.current_page().cursor_y = top + row_height;
        }
        Ok(())
    }

    fn draw_cell(&mut self, placed: &PlacedCell, row_top: f32, row_height: f32) {
        let cell = placed.cell;
        let slack = row_height - placed.height();
        let mut line_top = row_top
            + cell.padding.top
            + match cell.v_align {
                VerticalAlign::Top => 0.0,
                VerticalAlign::Middle => slack / 2.0,
                VerticalAlign::Bottom => slack,
            };

        for line in &placed.lines {
            let Some(tallest) = line.tallest_font().copied() else {
                line_top += line.height;
                continue;
            };
            let inner_left = placed.x + cell.padding.left;
            let inner_width = placed.width - cell.padding.horizontal();
            let mut x = match cell.h_align {
                HorizontalAlign::Left => inner_left,
                HorizontalAlign::Center => inner_left + (inner_width - line.width) / 2.0,
                HorizontalAlign::Right => inner_left + inner_width - line.width,
            };
            let baseline = line_top + (line.height - tallest.size) / 2.0 + ascent(&tallest);
            for fragment in &line.fragments {
                self.draw_text(&fragment.text, &fragment.font, x, baseline);
                if let Some(url) = &fragment.anchor {
                    let rect = [
                        x,
                        self.pdf_y(baseline) - descent(&fragment.font),
                        x + fragment.width,
                        self.pdf_y(baseline) + ascent(&fragment.font),
                    ];
                    self.current_page().links.push(LinkArea { rect, url: url.clone() });
                }
                x += fragment.width;
            }
            line_top += line.height;
        }

        let (x0, x1) = (placed.x, placed.x + placed.width);
        let (top, bottom) = (row_top, row_top + row_height);
        let borders = cell.borders;
        if borders.top {
            self.stroke_line(x0, top, x1, top, BORDER_WIDTH);
        }
        if borders.bottom {
            self.stroke_line(x0, bottom, x1, bottom, BORDER_WIDTH);
        }
        if borders.left {
            self.stroke_line(x0, top, x0, bottom, BORDER_WIDTH);
        }
        if borders.right {
            self.stroke_line(x1, top, x1, bottom, BORDER_WIDTH);
        }
    }

    fn draw_text(&mut self, text: &str, font: &Font, x: f32, baseline: f32) {
        if text.trim().is_empty() {
            return;
        }
        let pdf_y = self.pdf_y(baseline);
        let page = self.current_page();
        page.push("BT", vec![]);
        let key = (font.face_index(), font.size.to_bits());
        if page.font_key != Some(key) {
            let name = Self::font_resource_name(font.face_index());
            page.push("Tf", vec![Object::Name(name.into_bytes()), font.size.into()]);
            page.font_key = Some(key);
        }
        page.push("Td", vec![x.into(), pdf_y.into()]);
        page.push("Tj", vec![Object::String(to_win_ansi(text), StringFormat::Literal)]);
        page.push("ET", vec![]);
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32) {
        let (py0, py1) = (self.pdf_y(y0), self.pdf_y(y1));
        let page = self.current_page();
        page.push("w", vec![width.into()]);
        page.push("m", vec![x0.into(), py0.into()]);
        page.push("l", vec![x1.into(), py1.into()]);
        page.push("S", vec![]);
    }

    fn draw_rule(&mut self, rule: &RuleBlock) -> Result<(), RenderError> {
        self.ensure_space(rule.line_width + 2.0 * RULE_GAP)?;
        let content_width = self.settings.content_width();
        let width = content_width * rule.width_percent / 100.0;
        let x0 = self.settings.margins.left + (content_width - width) / 2.0;
        let y = self.current_page().cursor_y + RULE_GAP + rule.line_width / 2.0;
        self.stroke_line(x0, y, x0 + width, y, rule.line_width);
        self.current_page().cursor_y = y + rule.line_width / 2.0 + RULE_GAP;
        Ok(())
    }

    fn font_resources() -> Dictionary {
        let mut fonts = Dictionary::new();
        for (i, (weight, style)) in Font::FACES.iter().enumerate() {
            let base_font = tabloid_render_core::font::base_font_name(*weight, *style);
            fonts.set(
                Self::font_resource_name(i).into_bytes(),
                Object::Dictionary(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => base_font,
                    "Encoding" => "WinAnsiEncoding",
                }),
            );
        }
        fonts
    }

    fn info_dictionary(metadata: &DocumentMetadata) -> Dictionary {
        let mut info = Dictionary::new();
        let entries = [
            ("Title", metadata.title.as_deref()),
            ("Author", metadata.author.as_deref()),
            ("Subject", metadata.subject.as_deref()),
            ("Creator", metadata.creator.as_deref()),
            ("Producer", Some(PRODUCER)),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                info.set(key, lopdf::text_string(value));
            }
        }
        if let Some(date) = metadata.pdf_creation_date() {
            info.set("CreationDate", Object::String(date.into_bytes(), StringFormat::Literal));
        }
        for (key, value) in &metadata.custom {
            info.set(key.as_bytes().to_vec(), lopdf::text_string(value));
        }
        info
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn begin_document(&mut self, metadata: DocumentMetadata) -> Result<(), RenderError> {
        let resources = dictionary! { "Font" => Self::font_resources() };
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let pages_dict = dictionary! { "Type" => "Pages", "Kids" => vec![], "Count" => 0 };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);
        self.metadata = Some(metadata);
        Ok(())
    }

    fn add_block(&mut self, block: Block) -> Result<(), RenderError> {
        if self.metadata.is_none() {
            return Err(RenderError::NotStarted);
        }
        match &block {
            Block::Table(table) => self.draw_table(table),
            Block::Rule(rule) => self.draw_rule(rule),
        }
    }

    fn finish<W: Write>(mut self, mut writer: W) -> Result<W, RenderError> {
        let metadata = self.metadata.take().ok_or(RenderError::NotStarted)?;
        self.current_page();
        self.flush_page()?;

        if let Some(Object::Dictionary(pages_dict)) = self.document.objects.get_mut(&self.pages_id) {
            let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
            pages_dict.set("Kids", kids);
            pages_dict.set("Count", self.page_ids.len() as i64);
        }
        let info_id = self.document.add_object(Self::info_dictionary(&metadata));
        self.document.trailer.set("Info", info_id);

        log::debug!("Serializing PDF with {} page(s)", self.page_ids.len());
        self.document.save_to(&mut writer)?;
        Ok(writer)
    }
}
