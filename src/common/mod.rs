//! Common types and utilities shared across the crate.
//!
//! This module provides the unified error surface used by the detection
//! entry points and the restore driver, ensuring a consistent API for
//! users.

// Submodule declarations
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
