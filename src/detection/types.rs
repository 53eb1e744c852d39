//! File kind enumeration: the closed catalog of detectable types.

use std::fmt;

/// File kinds the signature catalog can detect.
///
/// Each kind maps to exactly one restored extension, returned by
/// [`FileKind::extension`]. Detection reports "no kind" as `None` at the
/// API boundary rather than carrying an `Unknown` variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Windows shell link (.LNK)
    Lnk,
    /// 7-Zip archive (.7z)
    SevenZ,
    /// POSIX ustar tape archive (.tar)
    Tar,
    /// Portable Document Format (.pdf)
    Pdf,
    /// Microsoft Excel Spreadsheet (OLE2 format, .xls)
    Xls,
    /// Microsoft Word Document (OLE2 format, .doc)
    Doc,
    /// Microsoft PowerPoint Presentation (OLE2 format, .ppt)
    Ppt,
    /// Outlook message, or any OLE2 container without a recognized
    /// Office sub-signature (.msg)
    Msg,
    /// RAR archive, version 4 or 5 (.rar)
    Rar,
    /// JPEG image (.jpg)
    Jpg,
    /// Portable Network Graphics image (.png)
    Png,
    /// XML document (.xml)
    Xml,
    /// Microsoft Word Document (OOXML format, .docx)
    Docx,
    /// Macro-enabled Word Document (.docm)
    Docm,
    /// Microsoft Excel Spreadsheet (OOXML format, .xlsx)
    Xlsx,
    /// Macro-enabled Excel Spreadsheet (.xlsm)
    Xlsm,
    /// Microsoft PowerPoint Presentation (OOXML format, .pptx)
    Pptx,
    /// Macro-enabled PowerPoint Presentation (.pptm)
    Pptm,
    /// ZIP archive that is not an Office Open XML document (.zip)
    Zip,
    /// ZIP signature with an archive body that cannot be read (.broken.zip)
    BrokenZip,
}

impl FileKind {
    /// The file extension for this kind, including the leading dot.
    ///
    /// The text is the exact tag the restore driver appends to a file's
    /// stem, casing included (`.LNK` is uppercase by convention).
    pub const fn extension(self) -> &'static str {
        match self {
            FileKind::Lnk => ".LNK",
            FileKind::SevenZ => ".7z",
            FileKind::Tar => ".tar",
            FileKind::Pdf => ".pdf",
            FileKind::Xls => ".xls",
            FileKind::Doc => ".doc",
            FileKind::Ppt => ".ppt",
            FileKind::Msg => ".msg",
            FileKind::Rar => ".rar",
            FileKind::Jpg => ".jpg",
            FileKind::Png => ".png",
            FileKind::Xml => ".xml",
            FileKind::Docx => ".docx",
            FileKind::Docm => ".docm",
            FileKind::Xlsx => ".xlsx",
            FileKind::Xlsm => ".xlsm",
            FileKind::Pptx => ".pptx",
            FileKind::Pptm => ".pptm",
            FileKind::Zip => ".zip",
            FileKind::BrokenZip => ".broken.zip",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
