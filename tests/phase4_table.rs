mod common;

use cli_ls::entry::{inspect, EntryKind};
use cli_ls::listing::ListingOptions;
use cli_ls::render::table::{render_table, FLAG_WIDTH};
use common::{create_fixture, make_entry, make_failure, plain, plain_options};
use std::fs;

fn human() -> ListingOptions {
    ListingOptions {
        human_readable: true,
        ..plain_options()
    }
}

#[test]
fn test_human_readable_size_of_real_file() {
    let tmp = create_fixture(&[]);
    let path = tmp.path().join("blob.bin");
    fs::write(&path, vec![1u8; 1536]).unwrap();
    let entries = vec![inspect(&path, tmp.path())];

    let text = plain(&render_table(&entries, &human()));
    assert!(text[0].contains(" 1.5K "), "got {:?}", text[0]);
    assert!(text[0].ends_with("blob.bin"));

    let text = plain(&render_table(&entries, &plain_options()));
    assert!(text[0].contains(" 1536 "), "got {:?}", text[0]);
}

#[test]
fn test_directory_flag_column() {
    let tmp = create_fixture(&["src/", "main.rs"]);
    let entries = vec![
        inspect(&tmp.path().join("src"), tmp.path()),
        inspect(&tmp.path().join("main.rs"), tmp.path()),
    ];
    let text = plain(&render_table(&entries, &plain_options()));
    assert!(text[0].starts_with('d'));
    assert!(text[1].starts_with('-'));
}

#[test]
fn test_flag_column_padded_to_minimum_width() {
    let entries = vec![make_entry("a", EntryKind::RegularFile, 0)];
    let text = plain(&render_table(&entries, &plain_options()));
    // No attribute support: type char plus "----".
    assert!(text[0].starts_with("-----"));
    assert_eq!(&text[0][5..FLAG_WIDTH], "     ");
}

#[test]
fn test_missing_timestamps_use_placeholders() {
    let entries = vec![make_entry("a", EntryKind::RegularFile, 42)];
    let text = plain(&render_table(&entries, &plain_options()));
    assert_eq!(text[0], "-----       42  ?  ?  a");
}

#[test]
fn test_failed_entry_keeps_its_row() {
    let entries = vec![
        make_entry("good", EntryKind::RegularFile, 10),
        make_failure("bad"),
    ];
    let text = plain(&render_table(&entries, &plain_options()));
    assert_eq!(text.len(), 2);
    assert!(text[1].starts_with("?????"));
    assert!(text[1].ends_with("bad"));
    // The size column is two wide and follows the flags and a two-space gap.
    let size_at = FLAG_WIDTH + 2;
    assert_eq!(&text[0][size_at..size_at + 2], "10");
    assert_eq!(&text[1][size_at..size_at + 2], " ?");
}

#[test]
fn test_size_column_right_aligned() {
    let entries = vec![
        make_entry("small", EntryKind::RegularFile, 7),
        make_entry("large", EntryKind::RegularFile, 123_456),
    ];
    let text = plain(&render_table(&entries, &plain_options()));
    let end_small = text[0].find('7').unwrap() + 1;
    let end_large = text[1].find("123456").unwrap() + 6;
    assert_eq!(end_small, end_large);
}

#[test]
fn test_names_column_starts_at_same_offset() {
    let entries = vec![
        make_entry("x", EntryKind::RegularFile, 1),
        make_entry("y", EntryKind::RegularFile, 1_000_000),
        make_failure("z"),
    ];
    let text = plain(&render_table(&entries, &plain_options()));
    let offsets: Vec<usize> = text.iter().map(|l| l.len() - 1).collect();
    assert!(offsets.windows(2).all(|w| w[0] == w[1]), "{:?}", text);
}

#[test]
fn test_classify_suffix_in_table() {
    let options = ListingOptions {
        classify: true,
        ..plain_options()
    };
    let entries = vec![make_entry("docs", EntryKind::Directory, 0)];
    let text = plain(&render_table(&entries, &options));
    assert!(text[0].starts_with('d'));
    assert!(text[0].ends_with("docs/"));
}

#[test]
fn test_empty_table_has_no_rows() {
    assert!(render_table(&[], &plain_options()).is_empty());
}
