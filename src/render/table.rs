//! Long-format (`-l`) table: flags, size, date, time, name.

use ratatui::text::{Line, Span};

use super::entry_label;
use crate::entry::{format_size, Inspection};
use crate::listing::ListingOptions;

/// Minimum width of the flag column.
pub const FLAG_WIDTH: usize = 10;

const COLUMN_GAP: &str = "  ";
const PLACEHOLDER: &str = "?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Alignment of the four text columns; the name column is always left.
const ALIGN: [Align; 4] = [Align::Left, Align::Right, Align::Right, Align::Right];

struct Row {
    cells: [String; 4],
    name: Line<'static>,
}

/// Render one aligned row per entry. Failed lookups keep their row, with
/// `?` placeholders in place of metadata.
pub fn render_table(entries: &[Inspection], options: &ListingOptions) -> Vec<Line<'static>> {
    let rows: Vec<Row> = entries.iter().map(|e| build_row(e, options)).collect();

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(visible_width(cell));
        }
    }

    rows.into_iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(9 + row.name.spans.len());
            for ((cell, width), align) in row.cells.iter().zip(widths).zip(ALIGN) {
                spans.push(Span::raw(pad(cell, width, align)));
                spans.push(Span::raw(COLUMN_GAP));
            }
            spans.extend(row.name.spans);
            Line::from(spans)
        })
        .collect()
}

fn build_row(inspection: &Inspection, options: &ListingOptions) -> Row {
    let name = entry_label(inspection, options);
    let cells = match inspection {
        Ok(entry) => {
            let attributes = entry
                .attributes
                .map(|a| a.flags())
                .unwrap_or_else(|| "----".to_string());
            let flags = format!("{}{}", entry.kind.type_char(), attributes);
            let time = entry.display_time();
            [
                format!("{:<width$}", flags, width = FLAG_WIDTH),
                format_size(entry.size_bytes, options.human_readable),
                time.map(|t| t.format("%b %d").to_string())
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
                time.map(|t| t.format("%I:%M").to_string())
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
            ]
        }
        Err(_) => [
            format!("{:<width$}", "?????", width = FLAG_WIDTH),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
        ],
    };
    Row { cells, name }
}

fn visible_width(text: &str) -> usize {
    Span::raw(text).width()
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_width(cell)));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Right => format!("{fill}{cell}"),
    }
}
