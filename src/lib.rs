#![forbid(unsafe_code)]
//! cli-ls: directory listing with terminal-width aware column, comma and long formats.

pub mod cli;
pub mod entry;
pub mod error;
pub mod listing;
pub mod render;
pub mod terminal;
