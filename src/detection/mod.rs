//! File type detection by magic-number signature.
//!
//! This module classifies a byte buffer into one of a fixed catalog of
//! file kinds by probing byte patterns at known offsets, with dedicated
//! sub-probers for the two container formats where the outer magic alone
//! is not enough: OLE2 compound documents and ZIP archives.
//!
//! Detection never fails: unrecognized content is `None`, and a ZIP
//! container too corrupt to open still gets the degraded `.broken.zip`
//! kind.

// Submodule declarations
pub mod functions;
mod ole2;
mod ooxml;
mod signatures;
pub mod types;

// Re-exports
pub use functions::{classify, classify_file};
pub use signatures::{OLE2_MAGIC, ZIP_MAGIC};
pub use types::FileKind;
