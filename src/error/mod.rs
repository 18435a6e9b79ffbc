//! Error types and handling for Backpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`store`]: Inventory store errors
//! - [`config`]: Command line and configuration errors

pub mod config;
pub mod store;

pub use config::{invalid_config, unsupported_shell};
pub use store::{empty_name, invalid_quantity, not_found, quantity_overflow, store_full};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Backpack operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum BackpackError {
    // Store errors
    #[error("Backpack is full ({capacity} items)")]
    #[diagnostic(
        code(backpack::store::full),
        help("Remove an item before adding a new one")
    )]
    StoreFull { capacity: usize },

    #[error("Invalid quantity: '{input}'")]
    #[diagnostic(
        code(backpack::store::invalid_quantity),
        help("Quantity must be a whole number greater than zero")
    )]
    InvalidQuantity { input: String },

    #[error("Item '{name}' not found")]
    #[diagnostic(code(backpack::store::not_found))]
    NotFound { name: String },

    #[error("Item name cannot be empty")]
    #[diagnostic(code(backpack::store::empty_name))]
    EmptyName,

    #[error("Quantity of '{name}' would exceed the maximum stack size")]
    #[diagnostic(code(backpack::store::quantity_overflow))]
    QuantityOverflow { name: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(backpack::config::invalid))]
    InvalidConfig { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(backpack::config::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Console errors
    #[error("IO error: {message}")]
    #[diagnostic(code(backpack::io::error))]
    IoError { message: String },
}

impl BackpackError {
    /// Whether the interactive session can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            BackpackError::IoError { .. }
                | BackpackError::InvalidConfig { .. }
                | BackpackError::UnsupportedShell { .. }
        )
    }
}

impl From<std::io::Error> for BackpackError {
    fn from(err: std::io::Error) -> Self {
        BackpackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BackpackError>;
