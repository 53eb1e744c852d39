//! Rambutan - restore lost file extensions by magic-number sniffing
//!
//! This library identifies the true type of extensionless files from their
//! binary content alone. A fixed catalog of byte signatures at known
//! offsets covers common formats, with two-stage probes for the container
//! formats where the outer magic is ambiguous: OLE2 compound documents
//! (legacy .xls/.doc/.ppt and Outlook .msg) and ZIP archives (modern
//! .docx/.xlsx/.pptx and their macro-enabled variants).
//!
//! # Features
//!
//! - **Signature catalog**: fixed-offset magic-number probes, first match
//!   wins (.LNK, .7z, .tar, .pdf, .rar, .jpg, .png, .xml and more)
//! - **Compound-document probe**: tells legacy Office formats apart by the
//!   payload signature at the first sector boundary
//! - **ZIP probe**: opens the buffer as an in-memory archive and reads the
//!   entry paths to pick the Office Open XML kind, including macro-enabled
//!   variants
//! - **Restore driver**: classifies a whole directory of files and copies
//!   them out under their original stem with the detected extension
//!
//! # Example - Classifying a buffer
//!
//! ```
//! use rambutan::{FileKind, classify};
//!
//! let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
//! assert_eq!(classify(&png), Some(FileKind::Png));
//! assert_eq!(classify(b"plain text"), None);
//! ```
//!
//! # Example - Restoring a directory
//!
//! ```no_run
//! use std::path::Path;
//! use rambutan::restore_extensions;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = restore_extensions(Path::new("recovered"), Path::new("sorted"))?;
//! println!(
//!     "{} identified, {} unknown",
//!     summary.restored, summary.unidentified
//! );
//! # Ok(())
//! # }
//! ```

/// Shared error types.
pub mod common;

/// File type detection by magic-number signature.
///
/// This module holds the signature catalog, the classification entry
/// points, and the two container sub-probers.
pub mod detection;

/// Directory-level extension restore driver.
pub mod restore;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use detection::{FileKind, classify, classify_file};
pub use restore::{RestoreSummary, restore_extensions};
