//! Error types for xcprompt-core

use thiserror::Error;

/// Errors that can occur in core operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    SettingsParse(#[from] serde_yaml::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidSetting {
        field: &'static str,
        message: String,
    },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Not a regular file: {0}")]
    NotAFile(String),

    #[error("Checksum error for '{path}': {message}")]
    Checksum { path: String, message: String },

    #[error(
        "GPG is not available. Install GnuPG (macOS: brew install gnupg, \
         Debian/Ubuntu: apt-get install gnupg)"
    )]
    GpgUnavailable,

    #[error("GPG operation failed: {0}")]
    Gpg(String),
}
