//! Extension restore driver.
//!
//! Walks the top level of an input directory, classifies every regular
//! file by content, and copies each identified file into the output
//! directory under its original stem with the detected extension
//! appended. The input is never modified.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::common::{Error, Result};
use crate::detection::classify_file;

/// Counters for one restore run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Files whose kind was identified.
    pub restored: usize,
    /// Files no signature recognized; these are not copied.
    pub unidentified: usize,
}

/// Classify every file at the top level of `input` and copy the
/// identified ones into `output` with their extension restored.
///
/// The output directory is created if missing. A file whose restored
/// name was already present in `output` before the run is counted but
/// not copied again; the check runs against a snapshot of the directory
/// taken up front, so names created during the run do not suppress
/// later copies (two inputs mapping to the same target leave the
/// last-copied content). Subdirectories of `input` are ignored.
///
/// # Errors
///
/// Returns [`Error::InputDirNotFound`] when `input` is not an existing
/// directory, and I/O errors from reading, copying, or enumerating
/// files.
pub fn restore_extensions(input: &Path, output: &Path) -> Result<RestoreSummary> {
    if !input.is_dir() {
        return Err(Error::InputDirNotFound(input.display().to_string()));
    }
    fs::create_dir_all(output)?;

    let existing = existing_names(output)?;

    let mut summary = RestoreSummary::default();
    for entry in fs::read_dir(input)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(kind) = classify_file(&path)? else {
            summary.unidentified += 1;
            continue;
        };
        summary.restored += 1;

        let mut target = path
            .file_stem()
            .map(|stem| stem.to_os_string())
            .unwrap_or_else(|| entry.file_name());
        target.push(kind.extension());

        if !existing.contains(&target) {
            fs::copy(&path, output.join(&target))?;
        }
    }

    Ok(summary)
}

/// Names of the regular files already present in `dir`.
fn existing_names(dir: &Path) -> Result<HashSet<OsString>> {
    let mut names = HashSet::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_file() {
            names.insert(entry.file_name());
        }
    }
    Ok(names)
}
