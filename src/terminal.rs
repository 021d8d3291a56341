//! Terminal width queries and styled line output.

use crossterm::style::{
    Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{queue, terminal};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use std::io::{self, IsTerminal, Stdout, Write};

/// Width used when stdout is not a terminal or the query fails.
pub const FALLBACK_WIDTH: usize = 80;

/// Source of the line width, queried once per rendered directory.
pub trait WidthSource {
    fn columns(&self) -> usize;
}

/// Live terminal width.
pub struct TerminalWidth;

impl WidthSource for TerminalWidth {
    fn columns(&self) -> usize {
        terminal_width()
    }
}

/// A constant width (`--width`, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub usize);

impl WidthSource for FixedWidth {
    fn columns(&self) -> usize {
        self.0
    }
}

/// Get the current terminal width, falling back to 80 if unavailable.
pub fn terminal_width() -> usize {
    if !io::stdout().is_terminal() {
        return FALLBACK_WIDTH;
    }
    match terminal::size() {
        Ok((w, _)) if w > 0 => w as usize,
        _ => FALLBACK_WIDTH,
    }
}

/// Write `lines` followed by newlines, turning span styles into ANSI escapes
/// when `use_color` is set. The caller is responsible for flushing.
///
/// Returns the number of lines written.
pub fn write_lines<W: Write>(
    writer: &mut W,
    lines: &[Line<'_>],
    use_color: bool,
) -> io::Result<usize> {
    for line in lines {
        for span in &line.spans {
            if use_color && span.style != Style::default() {
                queue_styled(writer, span.style, span.content.as_ref())?;
            } else {
                writer.write_all(span.content.as_bytes())?;
            }
        }
        writer.write_all(b"\n")?;
    }
    Ok(lines.len())
}

fn queue_styled<W: Write>(writer: &mut W, style: Style, text: &str) -> io::Result<()> {
    if let Some(fg) = style.fg {
        queue!(writer, SetForegroundColor(term_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(writer, SetBackgroundColor(term_color(bg)))?;
    }
    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::REVERSED, Attribute::Reverse),
    ] {
        if style.add_modifier.contains(modifier) {
            queue!(writer, SetAttribute(attribute))?;
        }
    }
    queue!(writer, Print(text), SetAttribute(Attribute::Reset))
}

/// Map a ratatui color onto the crossterm palette.
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

/// Create a BufWriter wrapping stdout with a generous buffer.
pub fn buffered_stdout() -> io::BufWriter<Stdout> {
    io::BufWriter::with_capacity(64 * 1024, io::stdout())
}
