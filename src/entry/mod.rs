//! Entry inspection: one metadata query per path, with failures kept per entry.

pub mod attributes;
mod size;

use chrono::{DateTime, Local};
use std::fs::{self, FileType, Metadata};
use std::path::{Path, PathBuf};

pub use attributes::AttributeBits;
pub use size::format_size;

/// Extensions treated as executable when classifying entries.
const EXECUTABLE_EXTENSIONS: &[&str] = &[
    "bat", "bin", "cmd", "com", "cpl", "exe", "gadget", "ins", "inx", "isu", "job", "jse", "msc",
    "msi", "msp", "mst", "paf", "pif", "ps1", "reg", "rgs", "sct", "sh", "shb", "shs", "u3p",
    "vb", "vbe", "vbs", "vbscript", "ws", "wsf",
];

/// Kind of filesystem object, as reported by a non-following stat call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    RegularFile,
    Directory,
    SymbolicLink,
    Unknown,
}

impl EntryKind {
    fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::SymbolicLink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::RegularFile
        } else {
            EntryKind::Unknown
        }
    }

    /// Leading character of the long-format flag column.
    pub fn type_char(self) -> char {
        match self {
            EntryKind::Directory => 'd',
            EntryKind::SymbolicLink => 'l',
            EntryKind::RegularFile | EntryKind::Unknown => '-',
        }
    }
}

/// Metadata snapshot of a single directory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    /// Basename shown in listings.
    pub name: String,
    /// Full filesystem path.
    pub path: PathBuf,
    /// Path relative to the listing root.
    pub relative_path: PathBuf,
    pub kind: EntryKind,
    pub size_bytes: u64,
    /// Creation time, `None` where the platform does not record it.
    pub created_at: Option<DateTime<Local>>,
    pub modified_at: Option<DateTime<Local>>,
    /// Platform attribute bits, `None` when the platform has none.
    pub attributes: Option<AttributeBits>,
    /// Whether `-F` should mark this entry with `*`.
    pub executable: bool,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Hidden by attribute bit, or by the portable dot-prefix convention.
    /// The implied `.` and `..` entries are never hidden.
    pub fn is_hidden(&self) -> bool {
        if self.name == "." || self.name == ".." {
            return false;
        }
        self.attributes.is_some_and(|a| a.hidden) || self.name.starts_with('.')
    }

    /// Timestamp shown in the long format: creation time, else modification time.
    pub fn display_time(&self) -> Option<DateTime<Local>> {
        self.created_at.or(self.modified_at)
    }
}

/// An entry whose metadata could not be read.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("cannot access '{}': {reason}", .path.display())]
pub struct InspectFailure {
    pub name: String,
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub reason: String,
}

/// Result of inspecting one entry.
pub type Inspection = Result<DirectoryEntry, InspectFailure>;

/// Inspect `path`, naming it after its last path component.
pub fn inspect(path: &Path, root: &Path) -> Inspection {
    inspect_as(path, &display_name(path), root)
}

/// Inspect `path` but show it as `name` (used for the implied `.` and `..`).
pub fn inspect_as(path: &Path, name: &str, root: &Path) -> Inspection {
    let relative_path = relative_to(path, root);
    match fs::symlink_metadata(path) {
        Ok(metadata) => Ok(from_metadata(path, name, relative_path, &metadata)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "metadata unavailable");
            Err(InspectFailure {
                name: name.to_string(),
                path: path.to_path_buf(),
                relative_path,
                reason: e.to_string(),
            })
        }
    }
}

fn from_metadata(
    path: &Path,
    name: &str,
    relative_path: PathBuf,
    metadata: &Metadata,
) -> DirectoryEntry {
    let kind = EntryKind::from_file_type(metadata.file_type());
    DirectoryEntry {
        name: name.to_string(),
        path: path.to_path_buf(),
        relative_path,
        kind,
        size_bytes: metadata.len(),
        created_at: metadata.created().ok().map(DateTime::<Local>::from),
        modified_at: metadata.modified().ok().map(DateTime::<Local>::from),
        attributes: attributes::lookup(name, metadata),
        executable: kind == EntryKind::RegularFile
            && (has_exec_bits(metadata) || has_executable_extension(name)),
    }
}

/// Basename of `path`, or the whole path when it has none (e.g. `/`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

fn has_executable_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    match lower.rfind('.') {
        // A leading dot marks a hidden file, not an extension.
        Some(idx) if idx > 0 => EXECUTABLE_EXTENSIONS.contains(&&lower[idx + 1..]),
        _ => false,
    }
}

#[cfg(unix)]
fn has_exec_bits(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_exec_bits(_metadata: &Metadata) -> bool {
    false
}
