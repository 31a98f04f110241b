//! Common error types used throughout fibertrack.
//!
//! Covers the failure cases of a single stage invocation: malformed seed-mask
//! paths, missing or failing external tools, and filesystem errors during
//! cleanup.

use std::path::PathBuf;

/// Common error type for fibertrack.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The seed-mask path does not contain a run of four or more digits.
    #[error("No seed index (run of 4+ digits) in path: {0}")]
    SeedIndexNotFound(String),

    /// A required external tool could not be located.
    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    /// An external tool exited with a non-zero status.
    #[error("{tool} failed with status {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    /// An external tool exited cleanly but its expected output is missing.
    #[error("{tool} reported success but produced no output at {path}")]
    MissingOutput { tool: String, path: PathBuf },

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new SeedIndexNotFound error from a path.
    pub fn seed_index_not_found(path: &std::path::Path) -> Self {
        Self::SeedIndexNotFound(path.display().to_string())
    }

    /// Create a new ToolNotFound error.
    pub fn tool_not_found<S: Into<String>>(name: S) -> Self {
        Self::ToolNotFound(name.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
