//! Packing labels into a bounded terminal width.

use ratatui::text::{Line, Span};

/// Blank columns that follow every label in the default layout.
pub const SEPARATOR_WIDTH: usize = 4;

const SEPARATOR: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// A single packed line when it fits, otherwise an aligned grid.
    Default,
    /// Comma separated, wrapped at the terminal width.
    Comma,
    /// One label per line.
    SingleColumn,
}

/// Lay out `labels` for a terminal `terminal_width` columns wide.
///
/// Labels are opaque: they are never split, and only their visible width
/// counts. An empty label list yields one blank line.
pub fn layout(
    labels: &[Line<'static>],
    terminal_width: usize,
    mode: LayoutMode,
) -> Vec<Line<'static>> {
    if labels.is_empty() {
        return vec![Line::default()];
    }
    match mode {
        LayoutMode::Default => grid(labels, terminal_width),
        LayoutMode::Comma => comma_lines(labels, terminal_width),
        LayoutMode::SingleColumn => labels.to_vec(),
    }
}

fn grid(labels: &[Line<'static>], terminal_width: usize) -> Vec<Line<'static>> {
    let widths: Vec<usize> = labels.iter().map(Line::width).collect();
    let max_label_width = (widths.iter().copied().max().unwrap_or(0) + SEPARATOR_WIDTH).max(1);
    let packed_width: usize = widths.iter().sum::<usize>() + labels.len() * SEPARATOR_WIDTH;

    if packed_width < terminal_width {
        let mut spans = Vec::new();
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(SEPARATOR));
            }
            spans.extend(label.spans.iter().cloned());
        }
        return vec![Line::from(spans)];
    }

    let labels_per_line = (terminal_width.saturating_sub(1) / max_label_width).max(1);
    labels
        .chunks(labels_per_line)
        .zip(widths.chunks(labels_per_line))
        .map(|(row, row_widths)| {
            let mut spans = Vec::new();
            for (i, (label, width)) in row.iter().zip(row_widths).enumerate() {
                spans.extend(label.spans.iter().cloned());
                // No trailing padding after the last cell of a row.
                if i + 1 < row.len() {
                    spans.push(Span::raw(" ".repeat(max_label_width - width)));
                }
            }
            Line::from(spans)
        })
        .collect()
}

fn comma_lines(labels: &[Line<'static>], terminal_width: usize) -> Vec<Line<'static>> {
    let limit = terminal_width.saturating_sub(2);
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for (i, label) in labels.iter().enumerate() {
        let width = label.width();
        if !current.is_empty() {
            if used + width + 2 >= limit {
                lines.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            } else {
                current.push(Span::raw(" "));
            }
        }
        current.extend(label.spans.iter().cloned());
        if i + 1 < labels.len() {
            current.push(Span::raw(","));
        }
        used += width + 2;
    }
    lines.push(Line::from(current));
    lines
}
