mod common;

use cli_ls::entry::EntryKind;
use cli_ls::listing::ListingOptions;
use cli_ls::render::table::render_table;
use cli_ls::render::{entry_label, line_to_plain_text};
use common::{make_entry, make_failure, plain_options};

const HOSTILE: &str = "evil\u{001B}[31mname\twith\ncontrols\r";

fn assert_escaped(rendered: &str) {
    // No raw ESC/control chars should remain.
    assert!(!rendered.contains('\u{001B}'));
    assert!(!rendered.contains('\n'));
    assert!(!rendered.contains('\r'));
    assert!(!rendered.contains('\t'));

    // Escaped forms should be visible for debugging/auditing.
    assert!(rendered.contains("\\x1B"));
    assert!(rendered.contains("\\n"));
    assert!(rendered.contains("\\r"));
    assert!(rendered.contains("\\t"));
}

#[test]
fn test_terminal_control_chars_are_sanitized_in_labels() {
    let options = ListingOptions {
        classify: true,
        ..plain_options()
    };
    for kind in [EntryKind::RegularFile, EntryKind::Directory, EntryKind::SymbolicLink] {
        let label = entry_label(&make_entry(HOSTILE, kind, 0), &options);
        assert_escaped(&line_to_plain_text(&label));
    }
    assert_escaped(&line_to_plain_text(&entry_label(&make_failure(HOSTILE), &options)));
}

#[test]
fn test_terminal_control_chars_are_sanitized_in_table() {
    let entries = vec![make_entry(HOSTILE, EntryKind::RegularFile, 1), make_failure(HOSTILE)];
    for line in render_table(&entries, &plain_options()) {
        assert_escaped(&line_to_plain_text(&line));
    }
}

#[test]
fn test_show_control_chars_passes_names_through() {
    let options = ListingOptions {
        show_control_chars: true,
        ..plain_options()
    };
    let label = entry_label(&make_entry(HOSTILE, EntryKind::RegularFile, 0), &options);
    assert_eq!(line_to_plain_text(&label), HOSTILE);
}
