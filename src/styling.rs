//! The cell styling policy shared by every content table.
//!
//! Rows are separated by a bottom rule and a little extra padding; the last
//! row of a section drops both so the table sits flush against whatever
//! follows.

use tabloid_render_core::{Borders, Cell, Padding};

/// Extra bottom padding applied to every row except the last.
pub const PADDING_BOOST: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub has_bottom_border: bool,
    pub padding_boost: u8,
}

impl RowStyle {
    /// Style of the item at 0-based `index` among `count` items.
    pub fn for_position(index: usize, count: usize) -> Self {
        let has_bottom_border = index + 1 != count;
        Self {
            has_bottom_border,
            padding_boost: if has_bottom_border { PADDING_BOOST } else { 0 },
        }
    }

    pub fn borders(&self) -> Borders {
        if self.has_bottom_border { Borders::BOTTOM } else { Borders::NONE }
    }

    /// Applies border and padding to `cell`, on top of the default padding.
    pub fn apply(&self, cell: Cell) -> Cell {
        cell.with_borders(self.borders())
            .with_padding_bottom(Padding::DEFAULT + f32::from(self.padding_boost))
    }
}
