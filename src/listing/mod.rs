//! Listing pipeline: enumerate, filter, sort, render, recurse.

pub mod filter;
pub mod sort;
pub(crate) mod walk;

use globset::GlobSet;
use ratatui::text::Line;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::entry::{display_name, inspect, inspect_as, InspectFailure, Inspection};
use crate::error::{ListingError, ListingStatus};
use crate::render::columns::LayoutMode;
use crate::render::line_to_plain_text;
use crate::terminal::WidthSource;

pub use filter::{build_ignore_set, filter_entries};
pub use sort::sort_entries;

/// Immutable snapshot of the flags that shape one listing run.
#[derive(Debug, Clone)]
pub struct ListingOptions {
    /// `-a`: show hidden entries plus the implied `.` and `..`.
    pub show_hidden: bool,
    /// `-A`: show hidden entries, but not `.` and `..`.
    pub show_almost_all: bool,
    /// `-l`: long table format.
    pub long_format: bool,
    /// `-m`: comma separated lines.
    pub comma_format: bool,
    /// `-1`: one entry per line.
    pub one_per_line: bool,
    /// `-F`: append `/`, `@` or `*` indicators.
    pub classify: bool,
    /// `-p`: append `/` to directories.
    pub indicator_dirs: bool,
    /// `-h`: human-readable sizes in the long format.
    pub human_readable: bool,
    /// `-r`: reverse the listing order.
    pub reverse: bool,
    /// `-R`: list subdirectories recursively.
    pub recursive: bool,
    /// Whether to emit color styling.
    pub use_color: bool,
    /// Print names without escaping control characters.
    pub show_control_chars: bool,
    /// Glob patterns for entries to exclude.
    pub ignore_patterns: GlobSet,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            show_hidden: false,
            show_almost_all: false,
            long_format: false,
            comma_format: false,
            one_per_line: false,
            classify: false,
            indicator_dirs: false,
            human_readable: false,
            reverse: false,
            recursive: false,
            use_color: false,
            show_control_chars: false,
            ignore_patterns: GlobSet::empty(),
        }
    }
}

impl ListingOptions {
    /// Layout used when the long format is off.
    pub fn layout_mode(&self) -> LayoutMode {
        if self.comma_format {
            LayoutMode::Comma
        } else if self.one_per_line {
            LayoutMode::SingleColumn
        } else {
            LayoutMode::Default
        }
    }
}

/// Rendered output of a run, plus how well it went.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub lines: Vec<Line<'static>>,
    pub status: ListingStatus,
}

impl Listing {
    /// Append another listing's lines and fold in its status.
    pub fn append(&mut self, other: Listing) {
        self.lines.extend(other.lines);
        self.status = self.status.merge(other.status);
    }

    /// Lines without styling (useful for testing).
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(line_to_plain_text).collect()
    }
}

/// Abstraction over directory enumeration so it can be swapped or mocked.
pub trait DirectoryLister {
    /// Inspect the immediate children of `dir` in enumeration order.
    ///
    /// Fails only when `dir` itself cannot be read; unreadable children come
    /// back as `Err` items.
    fn list(&self, dir: &Path, root: &Path) -> io::Result<Vec<Inspection>>;
}

/// Default `DirectoryLister` backed by a depth-1 walkdir iterator.
pub struct WalkdirLister;

impl DirectoryLister for WalkdirLister {
    fn list(&self, dir: &Path, root: &Path) -> io::Result<Vec<Inspection>> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        let mut entries = Vec::new();
        for entry_result in walker {
            match entry_result {
                Ok(entry) => entries.push(inspect(entry.path(), root)),
                // The directory itself could not be opened.
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    let relative_path = path
                        .strip_prefix(root)
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|_| path.clone());
                    let reason = match e.io_error() {
                        Some(io_err) => io_err.to_string(),
                        None => e.to_string(),
                    };
                    entries.push(Err(InspectFailure {
                        name: display_name(&path),
                        path,
                        relative_path,
                        reason,
                    }));
                }
            }
        }
        Ok(entries)
    }
}

/// List `root` with the default walkdir-based enumeration.
pub fn render_listing(
    root: &Path,
    options: &ListingOptions,
    width: &dyn WidthSource,
) -> Result<Listing, ListingError> {
    render_listing_with(root, options, &WalkdirLister, width)
}

/// List `root` using the given enumeration primitive.
///
/// Only an inaccessible root is fatal; everything below it degrades to
/// placeholder output and [`ListingStatus::PartialFailure`].
pub fn render_listing_with(
    root: &Path,
    options: &ListingOptions,
    lister: &dyn DirectoryLister,
    width: &dyn WidthSource,
) -> Result<Listing, ListingError> {
    let invalid_root = |source: io::Error| ListingError::InvalidRoot {
        path: root.to_path_buf(),
        source,
    };

    // Follow a symlinked root, like `ls some-link`.
    let metadata = fs::metadata(root).map_err(invalid_root)?;
    let ctx = walk::WalkContext {
        root,
        options,
        lister,
        width,
    };

    if !metadata.is_dir() {
        let parent = root.parent().unwrap_or(root);
        let entry = inspect_as(root, &root.to_string_lossy(), parent);
        let status = walk::status_of(std::slice::from_ref(&entry));
        return Ok(Listing {
            lines: walk::render_entries(&[entry], &ctx),
            status,
        });
    }

    let children = lister.list(root, root).map_err(invalid_root)?;
    Ok(walk::walk_directory(&ctx, root, children))
}
