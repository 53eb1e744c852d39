//! Unified error types for the crate.
//!
//! Classification itself never fails; these errors cover the filesystem
//! work around it, so the restore driver and the path-based entry point
//! present one consistent error surface.
use thiserror::Error;

/// Main error type for restore operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input directory missing or not a directory
    #[error("Could not find {0}. Make sure the directory exists.")]
    InputDirNotFound(String),
}

/// Result type for restore operations.
pub type Result<T> = std::result::Result<T, Error>;
