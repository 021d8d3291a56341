//! Entry labels and layout using ratatui Line/Span styling.
//!
//! Styling lives on spans, separate from their text, so every width
//! computation in [`columns`] and [`table`] sees only visible characters.

pub mod columns;
pub mod table;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::entry::{EntryKind, Inspection};
use crate::listing::ListingOptions;

const DIR_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);
const SYMLINK_STYLE: Style = Style::new().fg(Color::Cyan);
const EXEC_STYLE: Style = Style::new().fg(Color::Yellow);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// A span carrying `style` only when color is on.
pub(crate) fn styled(text: String, style: Style, use_color: bool) -> Span<'static> {
    if use_color {
        Span::styled(text, style)
    } else {
        Span::raw(text)
    }
}

/// Build the label for one entry: styled name plus any type indicator.
pub fn entry_label(inspection: &Inspection, options: &ListingOptions) -> Line<'static> {
    let entry = match inspection {
        Ok(entry) => entry,
        Err(failure) => {
            let name = display_text(&failure.name, options);
            return Line::from(styled(name, ERROR_STYLE, options.use_color));
        }
    };

    let name = display_text(&entry.name, options);
    let (style, suffix) = match entry.kind {
        EntryKind::Directory => {
            let suffix = (options.classify || options.indicator_dirs).then_some("/");
            (Some(DIR_STYLE), suffix)
        }
        EntryKind::SymbolicLink => (Some(SYMLINK_STYLE), options.classify.then_some("@")),
        _ if entry.executable && options.classify => (Some(EXEC_STYLE), Some("*")),
        _ => (None, None),
    };

    let mut spans = vec![match style {
        Some(style) => styled(name, style, options.use_color),
        None => Span::raw(name),
    }];
    // Indicators are never styled.
    if let Some(suffix) = suffix {
        spans.push(Span::raw(suffix));
    }
    Line::from(spans)
}

fn display_text(name: &str, options: &ListingOptions) -> String {
    if options.show_control_chars {
        name.to_string()
    } else {
        sanitize_terminal_text(name)
    }
}

/// Extract plain text from a `Line` (useful for testing).
pub fn line_to_plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
