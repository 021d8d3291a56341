/// Order a directory listing.
///
/// Entries keep their enumeration order; no alphabetic resort is applied.
/// `reverse` flips the final sequence.
pub fn sort_entries<T>(mut entries: Vec<T>, reverse: bool) -> Vec<T> {
    if reverse {
        entries.reverse();
    }
    entries
}
