//! Command line and configuration errors

use super::BackpackError;

/// Creates an invalid configuration error
pub fn invalid_config(message: impl Into<String>) -> BackpackError {
    BackpackError::InvalidConfig {
        message: message.into(),
    }
}

/// Creates an unsupported shell error
pub fn unsupported_shell(shell: impl Into<String>) -> BackpackError {
    BackpackError::UnsupportedShell {
        shell: shell.into(),
    }
}
