//! Abstract document blocks: tables of styled cells and separating rules.

use crate::error::RenderError;
use crate::font::Font;

/// A run of text in a single font, optionally acting as a hyperlink.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub text: String,
    pub font: Font,
    /// Target URL when this chunk is a hyperlink.
    pub anchor: Option<String>,
}

impl Chunk {
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self { text: text.into(), font, anchor: None }
    }

    pub fn link(text: impl Into<String>, font: Font, url: impl Into<String>) -> Self {
        Self { text: text.into(), font, anchor: Some(url.into()) }
    }
}

/// An ordered sequence of chunks flowing together inside one cell.
/// A `\n` in chunk text is a hard line break.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Phrase {
    pub chunks: Vec<Chunk>,
}

impl Phrase {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>, font: Font) -> Self {
        Self { chunks: vec![Chunk::new(text, font)] }
    }

    pub fn link(text: impl Into<String>, font: Font, url: impl Into<String>) -> Self {
        Self { chunks: vec![Chunk::link(text, font, url)] }
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(|c| c.text.is_empty())
    }

    /// Concatenated text of all chunks.
    pub fn plain_text(&self) -> String {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }

    pub fn links(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(|c| c.anchor.is_some())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Which edges of a cell are stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Borders {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Borders {
    pub const NONE: Borders = Borders { top: false, right: false, bottom: false, left: false };
    pub const BOTTOM: Borders = Borders { top: false, right: false, bottom: true, left: false };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const DEFAULT: f32 = 2.0;

    pub const fn all(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::all(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub phrase: Phrase,
    pub colspan: usize,
    pub borders: Borders,
    pub padding: Padding,
    pub h_align: HorizontalAlign,
    pub v_align: VerticalAlign,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            phrase: Phrase::empty(),
            colspan: 1,
            borders: Borders::NONE,
            padding: Padding::default(),
            h_align: HorizontalAlign::default(),
            v_align: VerticalAlign::default(),
        }
    }
}

impl Cell {
    pub fn new(phrase: Phrase) -> Self {
        Self { phrase, ..Default::default() }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn with_colspan(mut self, colspan: usize) -> Self {
        self.colspan = colspan;
        self
    }

    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    pub fn with_padding_bottom(mut self, bottom: f32) -> Self {
        self.padding.bottom = bottom;
        self
    }

    pub fn with_align(mut self, h_align: HorizontalAlign, v_align: VerticalAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<Cell>,
}

impl TableRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Number of grid columns this row occupies.
    pub fn span(&self) -> usize {
        self.cells.iter().map(|c| c.colspan).sum()
    }
}

/// A grid of cells whose column widths are proportional to `column_ratios`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub column_ratios: Vec<f32>,
    pub rows: Vec<TableRow>,
    /// Share of the content width the table occupies, in percent.
    pub width_percent: f32,
    /// Vertical gap inserted above the table.
    pub spacing_before: f32,
}

impl TableBlock {
    pub const DEFAULT_SPACING_BEFORE: f32 = 8.0;

    pub fn new(column_ratios: Vec<f32>) -> Self {
        Self {
            column_ratios,
            rows: Vec::new(),
            width_percent: 100.0,
            spacing_before: Self::DEFAULT_SPACING_BEFORE,
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_ratios.len()
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Column widths for a table laid out in `available_width` points.
    pub fn column_widths(&self, available_width: f32) -> Vec<f32> {
        let table_width = available_width * self.width_percent / 100.0;
        let total: f32 = self.column_ratios.iter().sum();
        if total <= 0.0 {
            return vec![0.0; self.column_ratios.len()];
        }
        self.column_ratios
            .iter()
            .map(|r| table_width * r / total)
            .collect()
    }

    /// Checks that every row fills the grid exactly.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.column_ratios.is_empty() {
            return Err(RenderError::MalformedTable("table has no columns".into()));
        }
        if let Some(bad) = self.column_ratios.iter().find(|r| !r.is_finite() || **r <= 0.0) {
            return Err(RenderError::MalformedTable(format!("invalid column ratio {}", bad)));
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.cells.iter().any(|c| c.colspan == 0) {
                return Err(RenderError::MalformedTable(format!("row {} has a cell with colspan 0", i)));
            }
            if row.span() != self.column_count() {
                return Err(RenderError::MalformedTable(format!(
                    "row {} spans {} columns, table has {}",
                    i,
                    row.span(),
                    self.column_count()
                )));
            }
        }
        Ok(())
    }
}

/// A horizontal separating line across the content width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleBlock {
    pub line_width: f32,
    pub width_percent: f32,
}

impl Default for RuleBlock {
    fn default() -> Self {
        Self { line_width: 1.0, width_percent: 100.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Table(TableBlock),
    Rule(RuleBlock),
}

impl Block {
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Table(_) => "table",
            Block::Rule(_) => "rule",
        }
    }

    pub fn as_table(&self) -> Option<&TableBlock> {
        match self {
            Block::Table(t) => Some(t),
            Block::Rule(_) => None,
        }
    }
}
