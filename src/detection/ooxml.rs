//! ZIP-container sub-type probing (modern Office documents).
//!
//! Office Open XML documents are ZIP archives whose entry paths name the
//! application: `word/` for Word, `xl/` for Excel, `ppt/` for PowerPoint.
//! A binary macro part directly under the application directory marks the
//! macro-enabled variant of the same format.

use std::io::Cursor;

use super::types::FileKind;

/// Application directories checked inside the archive, each with its plain
/// and macro-enabled kind. Checked in this order; a later directory's
/// verdict overwrites an earlier one, so `word/` outranks `xl/` outranks
/// `ppt/` in the unusual case of an archive carrying more than one.
const APP_DIRS: [(&str, FileKind, FileKind); 3] = [
    ("ppt/", FileKind::Pptx, FileKind::Pptm),
    ("xl/", FileKind::Xlsx, FileKind::Xlsm),
    ("word/", FileKind::Docx, FileKind::Docm),
];

/// Narrow a ZIP container to its Office Open XML kind.
///
/// The buffer is opened as an in-memory archive; only entry names are
/// inspected, never entry contents. An archive with none of the
/// application directories stays `.zip`, and a buffer that fails to parse
/// as an archive at all is reported as `.broken.zip` rather than an
/// error.
pub(crate) fn classify_zip(bytes: &[u8]) -> FileKind {
    let cursor = Cursor::new(bytes);
    let archive = match zip::ZipArchive::new(cursor) {
        Ok(archive) => archive,
        Err(_) => return FileKind::BrokenZip,
    };

    let mut kind = FileKind::Zip;
    for (dir, plain, with_macros) in APP_DIRS {
        if archive.file_names().any(|name| name.starts_with(dir)) {
            kind = if archive.file_names().any(|name| is_macro_part(name, dir)) {
                with_macros
            } else {
                plain
            };
        }
    }
    kind
}

/// Whether `name` is a macro part: a single path segment ending in `.bin`
/// sitting directly under `dir`. Parts nested deeper, such as embedded
/// media under `word/media/`, do not count.
fn is_macro_part(name: &str, dir: &str) -> bool {
    name.strip_prefix(dir)
        .is_some_and(|rest| !rest.contains('/') && rest.ends_with(".bin"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::{SimpleFileOptions, ZipWriter};

    use super::*;

    /// Build an in-memory ZIP archive holding one stored entry per name.
    fn archive_with(names: &[&str]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for name in names {
            let options = SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            writer.start_file(*name, options).unwrap();
            writer.write_all(b"payload").unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_word_archive() {
        let bytes = archive_with(&["[Content_Types].xml", "word/document.xml"]);
        assert_eq!(classify_zip(&bytes), FileKind::Docx);
    }

    #[test]
    fn test_word_archive_with_macro_part() {
        let bytes = archive_with(&["word/document.xml", "word/vbaProject.bin"]);
        assert_eq!(classify_zip(&bytes), FileKind::Docm);
    }

    #[test]
    fn test_nested_bin_part_is_not_a_macro_part() {
        let bytes = archive_with(&["word/document.xml", "word/media/ole1.bin"]);
        assert_eq!(classify_zip(&bytes), FileKind::Docx);
    }

    #[test]
    fn test_excel_archive() {
        let bytes = archive_with(&["xl/workbook.xml", "xl/worksheets/sheet1.xml"]);
        assert_eq!(classify_zip(&bytes), FileKind::Xlsx);
    }

    #[test]
    fn test_excel_archive_with_macro_part() {
        let bytes = archive_with(&["xl/workbook.xml", "xl/vbaProject.bin"]);
        assert_eq!(classify_zip(&bytes), FileKind::Xlsm);
    }

    #[test]
    fn test_powerpoint_archive() {
        let bytes = archive_with(&["ppt/presentation.xml", "ppt/slides/slide1.xml"]);
        assert_eq!(classify_zip(&bytes), FileKind::Pptx);
    }

    #[test]
    fn test_powerpoint_archive_with_macro_part() {
        let bytes = archive_with(&["ppt/presentation.xml", "ppt/vbaProject.bin"]);
        assert_eq!(classify_zip(&bytes), FileKind::Pptm);
    }

    #[test]
    fn test_word_outranks_excel_and_powerpoint() {
        let bytes = archive_with(&[
            "ppt/presentation.xml",
            "xl/workbook.xml",
            "word/document.xml",
        ]);
        assert_eq!(classify_zip(&bytes), FileKind::Docx);
    }

    #[test]
    fn test_excel_outranks_powerpoint() {
        let bytes = archive_with(&["ppt/presentation.xml", "xl/workbook.xml"]);
        assert_eq!(classify_zip(&bytes), FileKind::Xlsx);
    }

    #[test]
    fn test_later_directory_overwrites_macro_verdict() {
        // The word/ verdict replaces the whole ppt/ verdict, macro flag
        // included.
        let bytes = archive_with(&[
            "ppt/presentation.xml",
            "ppt/vbaProject.bin",
            "word/document.xml",
        ]);
        assert_eq!(classify_zip(&bytes), FileKind::Docx);
    }

    #[test]
    fn test_archive_without_app_dirs_is_plain_zip() {
        let bytes = archive_with(&["readme.txt", "data/blob"]);
        assert_eq!(classify_zip(&bytes), FileKind::Zip);
    }

    #[test]
    fn test_garbage_after_magic_is_broken_zip() {
        let mut bytes = super::super::signatures::ZIP_MAGIC.to_vec();
        bytes.extend_from_slice(&[0u8; 64]);
        assert_eq!(classify_zip(&bytes), FileKind::BrokenZip);
    }

    #[test]
    fn test_truncated_archive_is_broken_zip() {
        let bytes = archive_with(&["word/document.xml"]);
        assert_eq!(classify_zip(&bytes[..bytes.len() - 10]), FileKind::BrokenZip);
    }

    #[test]
    fn test_macro_part_prefix_must_match_exactly() {
        assert!(is_macro_part("word/vbaProject.bin", "word/"));
        assert!(!is_macro_part("xl/vbaProject.bin", "word/"));
        assert!(!is_macro_part("word/document.xml", "word/"));
        assert!(!is_macro_part("word/media/image1.bin", "word/"));
    }
}
