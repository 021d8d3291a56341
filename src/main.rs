#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use cli_ls::cli::Args;
use cli_ls::error::{ListingError, ListingStatus};
use cli_ls::listing::{render_listing, ListingOptions};
use cli_ls::terminal::{buffered_stdout, write_lines, FixedWidth, TerminalWidth, WidthSource};
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse().validated();
    init_logging(&args);

    match run_app(&args) {
        Ok(status) => std::process::exit(status.code()),
        Err(e) => {
            eprintln!("cli-ls: {e:#}");
            std::process::exit(ListingStatus::FatalFailure.code());
        }
    }
}

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn run_app(args: &Args) -> Result<ListingStatus> {
    let options = args.listing_options();
    let width: Box<dyn WidthSource> = match args.width {
        Some(cols) => Box::new(FixedWidth(cols)),
        None => Box::new(TerminalWidth),
    };

    let mut stdout = buffered_stdout();

    if args.debug {
        let report = debug_report(&args.path, &options, width.columns());
        let written = report
            .iter()
            .try_for_each(|line| writeln!(stdout, "{line}"))
            .and_then(|_| stdout.flush());
        return Ok(finish_output(written, ListingStatus::Ok)?);
    }

    tracing::info!(path = %args.path.display(), "listing");
    let listing = render_listing(&args.path, &options, width.as_ref())?;

    let written = write_lines(&mut stdout, &listing.lines, options.use_color)
        .and_then(|_| stdout.flush());
    Ok(finish_output(written, listing.status)?)
}

/// Classify the result of writing to stdout. A reader that hangs up early
/// (`cli-ls | head`) ends the run quietly with the listing's own status.
fn finish_output(
    written: io::Result<()>,
    status: ListingStatus,
) -> Result<ListingStatus, ListingError> {
    match written {
        Ok(()) => Ok(status),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early");
            Ok(status)
        }
        Err(e) => Err(ListingError::Output(e)),
    }
}

/// Lines printed by `--debug`: what would be listed and how.
fn debug_report(path: &Path, options: &ListingOptions, columns: usize) -> Vec<String> {
    let resolved = path
        .canonicalize()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|e| format!("{} ({e})", path.display()));

    let flags = [
        ("all", options.show_hidden),
        ("almost-all", options.show_almost_all),
        ("list", options.long_format),
        ("comma", options.comma_format),
        ("one-per-line", options.one_per_line),
        ("classify", options.classify),
        ("indicator-style", options.indicator_dirs),
        ("human-readable", options.human_readable),
        ("reverse", options.reverse),
        ("recursive", options.recursive),
        ("show-control-chars", options.show_control_chars),
    ];
    let enabled: Vec<&str> = flags
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();

    vec![
        "cli-ls debug:".to_string(),
        String::new(),
        format!("Directory: {resolved}"),
        format!(
            "Options: {}",
            if enabled.is_empty() {
                "(none)".to_string()
            } else {
                enabled.join(", ")
            }
        ),
        format!("Ignore patterns: {}", options.ignore_patterns.len()),
        format!("Color: {}", if options.use_color { "on" } else { "off" }),
        format!("Width: {columns}"),
    ]
}
