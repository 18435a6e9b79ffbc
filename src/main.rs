//! Backpack - starting loot inventory
//!
//! A console tool that keeps a small, bounded backpack of named items.
//! Items are added (merging quantities on a repeated name), removed, found
//! by sequential search and listed from an interactive menu.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod domain;
mod error;
mod logging;
mod session;
mod store;
mod ui;

use cli::{Cli, Commands};
use config::StoreConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        None | Some(Commands::Menu) => {
            StoreConfig::from_cli(&cli).and_then(commands::menu::run)
        }
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
