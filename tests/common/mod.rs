#![allow(dead_code)]

use cli_ls::entry::{DirectoryEntry, EntryKind, InspectFailure, Inspection};
use cli_ls::listing::{DirectoryLister, ListingOptions};
use cli_ls::render::line_to_plain_text;
use ratatui::text::Line;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default options with color disabled.
pub fn plain_options() -> ListingOptions {
    ListingOptions::default()
}

/// Default options with color enabled.
pub fn color_options() -> ListingOptions {
    ListingOptions {
        use_color: true,
        ..ListingOptions::default()
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Create a successful inspection for testing purposes.
pub fn make_entry(name: &str, kind: EntryKind, size_bytes: u64) -> Inspection {
    Ok(DirectoryEntry {
        name: name.to_string(),
        path: PathBuf::from(format!("/tmp/test/{}", name)),
        relative_path: PathBuf::from(name),
        kind,
        size_bytes,
        created_at: None,
        modified_at: None,
        attributes: None,
        executable: false,
    })
}

/// Create a failed inspection for testing purposes.
pub fn make_failure(name: &str) -> Inspection {
    Err(InspectFailure {
        name: name.to_string(),
        path: PathBuf::from(format!("/tmp/test/{}", name)),
        relative_path: PathBuf::from(name),
        reason: "Permission denied (os error 13)".to_string(),
    })
}

/// Plain-text labels for layout tests.
pub fn labels(names: &[&str]) -> Vec<Line<'static>> {
    names.iter().map(|n| Line::raw(n.to_string())).collect()
}

/// Plain text of every line.
pub fn plain(lines: &[Line<'_>]) -> Vec<String> {
    lines.iter().map(line_to_plain_text).collect()
}

/// Names of successful inspections, in order.
pub fn names(entries: &[Inspection]) -> Vec<String> {
    entries
        .iter()
        .map(|e| match e {
            Ok(entry) => entry.name.clone(),
            Err(failure) => failure.name.clone(),
        })
        .collect()
}

/// In-memory `DirectoryLister` with a fixed, deterministic order.
///
/// Directories are keyed by absolute path; a missing key lists as empty,
/// an `Err` kind simulates an unreadable directory. Failed children are
/// listed after the readable ones.
#[derive(Default)]
pub struct MockLister {
    dirs: HashMap<PathBuf, Result<Vec<(String, EntryKind)>, io::ErrorKind>>,
    failed: HashMap<PathBuf, Vec<String>>,
}

impl MockLister {
    pub fn with_dir(mut self, dir: &Path, children: &[(&str, EntryKind)]) -> Self {
        let children = children
            .iter()
            .map(|(name, kind)| (name.to_string(), *kind))
            .collect();
        self.dirs.insert(dir.to_path_buf(), Ok(children));
        self
    }

    /// A child of `dir` whose metadata lookup fails.
    pub fn with_failed_child(mut self, dir: &Path, name: &str) -> Self {
        self.failed
            .entry(dir.to_path_buf())
            .or_default()
            .push(name.to_string());
        self
    }

    pub fn with_unreadable(mut self, dir: &Path) -> Self {
        self.dirs
            .insert(dir.to_path_buf(), Err(io::ErrorKind::PermissionDenied));
        self
    }
}

impl DirectoryLister for MockLister {
    fn list(&self, dir: &Path, root: &Path) -> io::Result<Vec<Inspection>> {
        let mut entries: Vec<Inspection> = match self.dirs.get(dir) {
            None => Vec::new(),
            Some(Err(kind)) => return Err(io::Error::new(*kind, "Permission denied")),
            Some(Ok(children)) => children
                .iter()
                .map(|(name, kind)| {
                    let path = dir.join(name);
                    Ok(DirectoryEntry {
                        name: name.clone(),
                        relative_path: path.strip_prefix(root).unwrap().to_path_buf(),
                        path,
                        kind: *kind,
                        size_bytes: 0,
                        created_at: None,
                        modified_at: None,
                        attributes: None,
                        executable: false,
                    })
                })
                .collect(),
        };
        for name in self.failed.get(dir).into_iter().flatten() {
            let path = dir.join(name);
            entries.push(Err(InspectFailure {
                name: name.clone(),
                relative_path: path.strip_prefix(root).unwrap().to_path_buf(),
                path,
                reason: "No such file or directory (os error 2)".to_string(),
            }));
        }
        Ok(entries)
    }
}
