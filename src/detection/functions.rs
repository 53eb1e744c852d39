//! Core classification entry points.
//!
//! The byte-slice classifier walks the static signature catalog in
//! priority order and hands container formats to their sub-probers. A
//! path-based wrapper reads a file fully into memory first.

use std::fs;
use std::path::Path;

use super::signatures::{self, Outcome};
use super::types::FileKind;
use crate::common::Result;

/// Classify a byte buffer by its magic-number signature.
///
/// Probes run in a fixed priority order and the first hit wins. The two
/// container formats (OLE2 compound documents and ZIP archives) get a
/// second look inside the buffer to pick the precise kind. Buffers
/// shorter than four bytes are never recognized.
///
/// The function is pure: it reads only the buffer and mutates nothing,
/// so the same bytes produce the same kind on every call.
///
/// # Arguments
///
/// * `bytes` - The file data as bytes
///
/// # Returns
///
/// * `Some(FileKind)` if a catalogued signature matches
/// * `None` if no signature matches
///
/// # Examples
///
/// ```rust
/// use rambutan::classify;
///
/// assert_eq!(
///     classify(b"%PDF-1.7\n").map(|kind| kind.extension()),
///     Some(".pdf"),
/// );
/// assert_eq!(classify(&[0x00, 0x01, 0x02, 0x03]), None);
/// ```
pub fn classify(bytes: &[u8]) -> Option<FileKind> {
    if bytes.len() < 4 {
        return None;
    }

    for signature in signatures::SIGNATURES {
        if signatures::matches_at(bytes, signature.offset, signature.magic) {
            return Some(match signature.outcome {
                Outcome::Kind(kind) => kind,
                Outcome::Container(probe) => probe(bytes),
            });
        }
    }

    None
}

/// Classify a file on disk by its content.
///
/// Reads the whole file into memory and delegates to [`classify`]; the
/// file's own name and extension play no part in the verdict.
///
/// # Arguments
///
/// * `path` - Path to the file to analyze
///
/// # Returns
///
/// * `Ok(Some(FileKind))` if a catalogued signature matches
/// * `Ok(None)` if the content is not recognized
/// * `Err` if the file cannot be read
///
/// # Examples
///
/// ```rust,no_run
/// use rambutan::classify_file;
///
/// if let Some(kind) = classify_file("samples/mystery")? {
///     println!("detected {kind}");
/// }
/// # Ok::<(), rambutan::Error>(())
/// ```
pub fn classify_file<P: AsRef<Path>>(path: P) -> Result<Option<FileKind>> {
    let bytes = fs::read(path)?;
    Ok(classify(&bytes))
}
