//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - completions: Completions command arguments

use clap::builder::{Styles, TypedValueParser, styling::AnsiColor};
use clap::{Parser, Subcommand};

use crate::config::{
    DEFAULT_CAPACITY, DEFAULT_KIND_MAX_CHARS, DEFAULT_NAME_MAX_CHARS, MAX_CAPACITY,
};

pub mod completions;

pub use completions::CompletionsArgs;

/// Backpack - starting loot inventory
///
/// Keep a small backpack of named items from an interactive console menu.
#[derive(Parser, Debug)]
#[command(
    name = "backpack",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Console inventory manager for a small backpack of starting loot",
    long_about = "Backpack keeps a bounded list of items (name, kind, quantity) in memory. \
                  Items are added, removed and found by name from an interactive menu. \
                  Adding an item that is already carried adds to its quantity.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  backpack                      \x1b[90m# Open the interactive menu\x1b[0m\n   \
                  backpack --capacity 20        \x1b[90m# Carry up to 20 items\x1b[0m\n   \
                  backpack -v                   \x1b[90m# Log store operations to stderr\x1b[0m\n   \
                  backpack completions zsh      \x1b[90m# Generate zsh completions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Maximum number of distinct items the backpack holds
    #[arg(
        long,
        short = 'c',
        global = true,
        default_value_t = DEFAULT_CAPACITY,
        value_parser = clap::value_parser!(u16).range(1..=MAX_CAPACITY as i64).map(usize::from)
    )]
    pub capacity: usize,

    /// Item names are cut to this many characters
    #[arg(long, global = true, default_value_t = DEFAULT_NAME_MAX_CHARS)]
    pub name_max: usize,

    /// Item kinds are cut to this many characters
    #[arg(long, global = true, default_value_t = DEFAULT_KIND_MAX_CHARS)]
    pub kind_max: usize,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive inventory menu (default)
    Menu,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
