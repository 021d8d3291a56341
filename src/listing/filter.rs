use globset::{Glob, GlobSet, GlobSetBuilder};

use super::ListingOptions;
use crate::entry::Inspection;

/// Build a GlobSet from user `--ignore` patterns.
/// Invalid patterns are skipped and reported as warnings.
pub fn build_ignore_set(user_patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    let mut invalid = Vec::new();
    for pattern in user_patterns {
        match Glob::new(pattern) {
            Ok(g) => {
                builder.add(g);
            }
            Err(_) => {
                invalid.push(pattern.clone());
            }
        }
    }
    if !invalid.is_empty() {
        tracing::warn!("invalid ignore pattern(s), skipped: {:?}", invalid);
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!("failed to build ignore set: {}", e);
        GlobSet::empty()
    })
}

/// Drop the entries that should not be shown for this directory.
///
/// With `-a`/`-A` every entry is kept. Otherwise hidden entries (attribute
/// bit or leading `.`) are dropped. An entry whose lookup failed has no
/// attribute bits, so only its name decides; a visible one stays and renders
/// with placeholders. `--ignore` patterns always apply.
pub fn filter_entries(entries: Vec<Inspection>, options: &ListingOptions) -> Vec<Inspection> {
    let show_all = options.show_hidden || options.show_almost_all;
    let ignore = &options.ignore_patterns;

    entries
        .into_iter()
        .filter(|inspection| {
            let name = match inspection {
                Ok(entry) => entry.name.as_str(),
                Err(failure) => failure.name.as_str(),
            };
            if !ignore.is_empty() && ignore.is_match(name) {
                return false;
            }
            if show_all {
                return true;
            }
            match inspection {
                Ok(entry) => !entry.is_hidden(),
                Err(failure) => !failure.name.starts_with('.'),
            }
        })
        .collect()
}
