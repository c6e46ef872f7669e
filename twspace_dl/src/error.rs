//! Error types for the twspace_dl crate.

use thiserror::Error;

/// Errors that can occur while resolving users.
#[derive(Error, Debug)]
pub enum TwspaceError {
    /// The string is not a single-segment profile URL on a known host.
    #[error("Invalid Twitter user URL: {0:?}")]
    InvalidUserUrl(String),

    /// No URL was supplied at all.
    #[error("No user URL supplied")]
    MissingUrl,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Failed to read user directory: {0}")]
    DirectoryFileError(#[from] std::io::Error),

    #[error("Failed to parse user directory JSON: {0}")]
    DirectoryParseError(#[from] serde_json::Error),

    #[error("User lookup failed: {0}")]
    Lookup(String),
}

/// Result type alias for TwspaceError.
pub type Result<T> = std::result::Result<T, TwspaceError>;
