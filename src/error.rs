//! Error taxonomy and exit-status classification for a listing run.

use std::io;
use std::path::PathBuf;

/// Outcome classification of a whole listing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ListingStatus {
    /// Everything was listed.
    #[default]
    Ok,
    /// Some directory or entry could not be read; the rest was listed.
    PartialFailure,
    /// The root could not be listed at all.
    FatalFailure,
}

impl ListingStatus {
    /// Process exit code for this status.
    pub fn code(self) -> i32 {
        match self {
            ListingStatus::Ok => 0,
            ListingStatus::PartialFailure => 1,
            ListingStatus::FatalFailure => 2,
        }
    }

    /// Combine two statuses, keeping the more severe one.
    pub fn merge(self, other: ListingStatus) -> ListingStatus {
        self.max(other)
    }
}

/// Errors that abort a listing run.
///
/// Per-entry and per-directory failures never show up here: they are turned
/// into placeholder output and a [`ListingStatus::PartialFailure`].
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("cannot access '{}'", .path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output")]
    Output(#[from] io::Error),
}

impl ListingError {
    /// Fatal errors always classify as [`ListingStatus::FatalFailure`].
    pub fn status(&self) -> ListingStatus {
        ListingStatus::FatalFailure
    }
}
