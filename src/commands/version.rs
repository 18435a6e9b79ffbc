//! Version command implementation

use std::io::{self, Write};

use crate::config::StoreConfig;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    write_version(&mut io::stdout().lock())?;
    Ok(())
}

/// Version line, build info and the default store bounds
fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    let defaults = StoreConfig::default();
    writeln!(out, "backpack {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "Build info:")?;
    writeln!(out, "  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"))?;
    writeln!(
        out,
        "  Profile: {}",
        if cfg!(debug_assertions) { "debug" } else { "release" }
    )?;
    writeln!(out)?;
    writeln!(out, "Defaults:")?;
    writeln!(out, "  Capacity: {} items", defaults.capacity)?;
    writeln!(out, "  Name limit: {} chars", defaults.name_max_chars)?;
    writeln!(out, "  Kind limit: {} chars", defaults.kind_max_chars)
}
