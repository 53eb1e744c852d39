//! The ordered signature catalog and its matcher.
//!
//! Detection walks a fixed table of probes, each a byte pattern that must
//! appear verbatim at a fixed offset. The first matching probe decides the
//! outcome: most carry a direct [`FileKind`], while the two container
//! formats (OLE2 compound documents and ZIP archives) hand the buffer to a
//! dedicated sub-prober for a second stage. The table is a process-wide
//! constant; nothing mutates it after startup.

use super::types::FileKind;
use super::{ole2, ooxml};

/// OLE2/CFB container magic.
pub const OLE2_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// ZIP local-file-header magic.
pub const ZIP_MAGIC: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

/// What a signature match decides.
#[derive(Clone, Copy)]
pub(crate) enum Outcome {
    /// The match alone fixes the kind.
    Kind(FileKind),
    /// The match identifies a container format; the sub-prober inspects
    /// its structured contents for the final verdict.
    Container(fn(&[u8]) -> FileKind),
}

/// One record of the probe catalog.
pub(crate) struct Signature {
    /// Byte offset the pattern must appear at.
    pub offset: usize,
    /// The pattern itself.
    pub magic: &'static [u8],
    /// What a hit means.
    pub outcome: Outcome,
}

/// The probe catalog, in match priority order.
///
/// Order is load-bearing: the `.tar` probe at offset 257 must run before
/// the ZIP probe (an archive can carry those bytes), and the seven-byte
/// RAR4 pattern must precede the eight-byte RAR5 one so either generation
/// resolves to `.rar` on its own signature.
pub(crate) static SIGNATURES: &[Signature] = &[
    Signature {
        offset: 0,
        magic: &[0x4C, 0x00, 0x00, 0x00, 0x01, 0x14, 0x02, 0x00],
        outcome: Outcome::Kind(FileKind::Lnk),
    },
    Signature {
        offset: 0,
        magic: &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C],
        outcome: Outcome::Kind(FileKind::SevenZ),
    },
    Signature {
        offset: 257,
        magic: b"ustar",
        outcome: Outcome::Kind(FileKind::Tar),
    },
    Signature {
        offset: 0,
        magic: b"%PDF",
        outcome: Outcome::Kind(FileKind::Pdf),
    },
    Signature {
        offset: 0,
        magic: OLE2_MAGIC,
        outcome: Outcome::Container(ole2::classify_compound),
    },
    Signature {
        offset: 0,
        magic: &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00],
        outcome: Outcome::Kind(FileKind::Rar),
    },
    Signature {
        offset: 0,
        magic: &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00],
        outcome: Outcome::Kind(FileKind::Rar),
    },
    Signature {
        offset: 0,
        magic: &[0xFF, 0xD8],
        outcome: Outcome::Kind(FileKind::Jpg),
    },
    Signature {
        offset: 0,
        magic: &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
        outcome: Outcome::Kind(FileKind::Png),
    },
    Signature {
        offset: 0,
        magic: b"<?xml",
        outcome: Outcome::Kind(FileKind::Xml),
    },
    Signature {
        offset: 0,
        magic: ZIP_MAGIC,
        outcome: Outcome::Container(ooxml::classify_zip),
    },
];

/// Check whether `magic` appears verbatim at `offset` in `bytes`.
///
/// A buffer too short to hold the probe span is a non-match, never a
/// fault.
#[inline]
pub(crate) fn matches_at(bytes: &[u8], offset: usize, magic: &[u8]) -> bool {
    bytes.get(offset..).is_some_and(|tail| tail.starts_with(magic))
}
