use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use std::path::{Component, Path};

use super::{filter_entries, sort_entries, DirectoryLister, Listing, ListingOptions};
use crate::entry::{inspect_as, DirectoryEntry, Inspection};
use crate::error::ListingStatus;
use crate::render::columns::layout;
use crate::render::table::render_table;
use crate::render::{entry_label, sanitize_terminal_text, styled};
use crate::terminal::WidthSource;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);

/// Read-only state shared by every directory visited in one run.
pub(crate) struct WalkContext<'a> {
    pub root: &'a Path,
    pub options: &'a ListingOptions,
    pub lister: &'a dyn DirectoryLister,
    pub width: &'a dyn WidthSource,
}

/// Render `dir` from its already enumerated children, then recurse.
///
/// The directory's own lines come first; subdirectories follow depth-first
/// in listing order, each behind a blank line and a `./path:` header.
pub(crate) fn walk_directory(
    ctx: &WalkContext<'_>,
    dir: &Path,
    children: Vec<Inspection>,
) -> Listing {
    let options = ctx.options;

    let mut entries = Vec::with_capacity(children.len() + 2);
    if options.show_hidden && !options.show_almost_all {
        entries.push(inspect_as(dir, ".", ctx.root));
        entries.push(inspect_as(&dir.join(".."), "..", ctx.root));
    }
    entries.extend(children);

    let entries = sort_entries(filter_entries(entries, options), options.reverse);
    tracing::debug!(dir = %dir.display(), entries = entries.len(), "rendering directory");

    let mut listing = Listing {
        lines: render_entries(&entries, ctx),
        status: status_of(&entries),
    };

    if !options.recursive {
        return listing;
    }

    for entry in entries.iter().filter_map(|e| e.as_ref().ok()) {
        if !entry.is_dir() || is_implied(entry) {
            continue;
        }
        listing.lines.push(Line::default());
        listing.lines.push(header_line(entry, options));

        match ctx.lister.list(&entry.path, ctx.root) {
            Ok(grandchildren) => listing.append(walk_directory(ctx, &entry.path, grandchildren)),
            Err(e) => {
                tracing::warn!(dir = %entry.path.display(), error = %e, "cannot open directory");
                let text = format!(
                    "cannot open directory '{}': {}",
                    header_path(entry, options),
                    e
                );
                listing.lines.push(Line::from(styled(text, ERROR_STYLE, options.use_color)));
                listing.status = listing.status.merge(ListingStatus::PartialFailure);
            }
        }
    }

    listing
}

/// Dispatch to the table or the column layout, reading the width now.
pub(crate) fn render_entries(entries: &[Inspection], ctx: &WalkContext<'_>) -> Vec<Line<'static>> {
    if ctx.options.long_format {
        return render_table(entries, ctx.options);
    }
    let labels: Vec<Line<'static>> = entries
        .iter()
        .map(|e| entry_label(e, ctx.options))
        .collect();
    layout(&labels, ctx.width.columns(), ctx.options.layout_mode())
}

/// A shown entry whose metadata is missing makes the run a partial failure.
pub(crate) fn status_of(entries: &[Inspection]) -> ListingStatus {
    if entries.iter().any(Result::is_err) {
        ListingStatus::PartialFailure
    } else {
        ListingStatus::Ok
    }
}

fn is_implied(entry: &DirectoryEntry) -> bool {
    entry.name == "." || entry.name == ".."
}

/// `./a/b` style path of a subdirectory, `/`-separated on every platform.
fn header_path(entry: &DirectoryEntry, options: &ListingOptions) -> String {
    let parts: Vec<String> = entry
        .relative_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    let path = format!("./{}", parts.join("/"));
    if options.show_control_chars {
        path
    } else {
        sanitize_terminal_text(&path)
    }
}

fn header_line(entry: &DirectoryEntry, options: &ListingOptions) -> Line<'static> {
    let text = format!("{}:", header_path(entry, options));
    Line::from(vec![styled(text, HEADER_STYLE, options.use_color)])
}
