//! Store configuration
//!
//! Backpack has no configuration files. Every bound comes from the command
//! line and is checked here before a store is built.

use crate::error::{Result, invalid_config};

/// Default number of item slots in the backpack
pub const DEFAULT_CAPACITY: usize = 10;

/// Default maximum characters kept from an item name
pub const DEFAULT_NAME_MAX_CHARS: usize = 29;

/// Default maximum characters kept from an item kind
pub const DEFAULT_KIND_MAX_CHARS: usize = 19;

/// Largest capacity accepted from the command line
pub const MAX_CAPACITY: usize = 1000;

/// Bounds applied by an [`Inventory`](crate::store::Inventory)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of distinct items
    pub capacity: usize,
    /// Names are truncated to this many characters
    pub name_max_chars: usize,
    /// Kinds are truncated to this many characters
    pub kind_max_chars: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            name_max_chars: DEFAULT_NAME_MAX_CHARS,
            kind_max_chars: DEFAULT_KIND_MAX_CHARS,
        }
    }
}

impl StoreConfig {
    /// Default bounds with a different capacity
    #[cfg(test)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Build a config from the global command line options
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Self {
            capacity: cli.capacity,
            name_max_chars: cli.name_max,
            kind_max_chars: cli.kind_max,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(invalid_config("capacity must be at least 1"));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(invalid_config(format!(
                "capacity must be at most {MAX_CAPACITY}"
            )));
        }
        if self.name_max_chars == 0 {
            return Err(invalid_config("name limit must be at least 1 character"));
        }
        if self.kind_max_chars == 0 {
            return Err(invalid_config("kind limit must be at least 1 character"));
        }
        Ok(())
    }
}
