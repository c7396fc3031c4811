//! Content renderers: one table layout per content type.
//!
//! Every renderer emits one row per item and routes each cell through the
//! shared [`RowStyle`] policy, so border and padding rules stay identical
//! across section kinds.

use crate::model::{LinkItem, NameValueItem, UserTimestampDescriptionItem, UserTimestampLinkItem};
use crate::styling::RowStyle;
use tabloid_render_core::{Cell, Font, Phrase, TableBlock, TableRow};

pub const NAME_VALUE_COLUMNS: [f32; 3] = [3.0, 3.0, 3.0];
pub const TWO_COLUMN_LAYOUT: [f32; 2] = [3.0, 6.0];

const BODY_SIZE: f32 = 12.0;

fn plain_font() -> Font {
    Font::regular(BODY_SIZE)
}

fn emphasized_font() -> Font {
    Font::bold(BODY_SIZE)
}

/// Builds a table with `ratios`, turning each item into one row of cells.
fn build_table<T>(ratios: &[f32], items: &[T], row_cells: impl Fn(&T, usize) -> Vec<Cell>) -> TableBlock {
    let mut table = TableBlock::new(ratios.to_vec());
    let columns = table.column_count();
    let count = items.len();
    for (index, item) in items.iter().enumerate() {
        let style = RowStyle::for_position(index, count);
        let cells = row_cells(item, columns).into_iter().map(|c| style.apply(c)).collect();
        table.push_row(TableRow::new(cells));
    }
    table
}

fn timestamp_user(timestamp: &str, user: &str) -> Phrase {
    Phrase::text(format!("{}\n{}", timestamp, user), plain_font())
}

/// Name | value | filler. A full-width item's value spans every column
/// after the name and the filler cell is left out.
pub fn render_name_value(items: &[NameValueItem]) -> TableBlock {
    build_table(&NAME_VALUE_COLUMNS, items, |item, columns| {
        let name = Cell::new(Phrase::text(&item.name, plain_font()));
        let value = Cell::new(Phrase::text(&item.value, emphasized_font()));
        if item.full_width {
            vec![name, value.with_colspan(columns - 1)]
        } else {
            vec![name, value, Cell::blank()]
        }
    })
}

pub fn render_user_timestamp_description(items: &[UserTimestampDescriptionItem]) -> TableBlock {
    build_table(&TWO_COLUMN_LAYOUT, items, |item, _| {
        vec![
            Cell::new(timestamp_user(&item.timestamp, &item.user)),
            Cell::new(Phrase::text(&item.description, emphasized_font())),
        ]
    })
}

pub fn render_user_timestamp_link(items: &[UserTimestampLinkItem]) -> TableBlock {
    build_table(&TWO_COLUMN_LAYOUT, items, |item, _| {
        vec![
            Cell::new(timestamp_user(&item.timestamp, &item.user)),
            Cell::new(Phrase::link(&item.hypertext, emphasized_font(), &item.url)),
        ]
    })
}

pub fn render_links(items: &[LinkItem]) -> TableBlock {
    build_table(&TWO_COLUMN_LAYOUT, items, |item, _| {
        vec![
            Cell::blank(),
            Cell::new(Phrase::link(&item.hypertext, emphasized_font(), &item.url)),
        ]
    })
}
