//! Compound-document (OLE2/CFB) sub-type probing.
//!
//! Buffers routed here already carry the eight-byte CFB magic. The prober
//! narrows the container to one of the legacy Office kinds by the payload
//! signature at offset 512, falling back to a scan for the `Workbook`
//! stream name, and finally to `.msg` for any container it cannot place.

use memchr::memmem;
use once_cell::sync::Lazy;

use super::signatures::matches_at;
use super::types::FileKind;

/// Offset of the first payload sector in a 512-byte-sector CFB file.
const PAYLOAD_OFFSET: usize = 512;

/// BIFF8 workbook stream header.
const XLS_BIFF8: &[u8] = &[0x09, 0x08, 0x10, 0x00, 0x00, 0x06, 0x05, 0x00];

/// Leading bytes of the Word binary file information block.
const DOC_FIB: &[u8] = &[0xEC, 0xA5, 0xC1, 0x00];

/// PowerPoint record headers observed at the payload offset.
const PPT_RECORDS: [&[u8]; 3] = [
    &[0x00, 0x6E, 0x1E, 0xF0],
    &[0x0F, 0x00, 0xE8, 0x03],
    &[0xA0, 0x46, 0x1D, 0xF0],
];

/// The `Workbook` stream name as it sits in the CFB directory: UTF-16LE
/// text bounded by the NUL bytes around it there.
const WORKBOOK_MARKER: &[u8] = &[
    0x00, 0x00, 0x57, 0x00, 0x6F, 0x00, 0x72, 0x00, 0x6B, 0x00, 0x62, 0x00,
    0x6F, 0x00, 0x6F, 0x00, 0x6B, 0x00, 0x00,
];

/// How many bytes at each end of the buffer the marker scan covers.
const MARKER_WINDOW: usize = 10_000;

/// Prebuilt searcher for the marker; built once, read-only afterwards.
static WORKBOOK_FINDER: Lazy<memmem::Finder<'static>> =
    Lazy::new(|| memmem::Finder::new(WORKBOOK_MARKER));

/// Narrow an OLE2/CFB container to its legacy Office kind.
///
/// Checks run in a fixed order: the BIFF8 header, then the `Workbook`
/// stream-name scan (both meaning `.xls`), then the Word and PowerPoint
/// payload signatures. A container matching none of them is reported as
/// `.msg`. All probes treat a buffer too short for their span as a
/// non-match, so even a bare eight-byte header classifies (as `.msg`)
/// without faulting.
pub(crate) fn classify_compound(bytes: &[u8]) -> FileKind {
    if matches_at(bytes, PAYLOAD_OFFSET, XLS_BIFF8) {
        return FileKind::Xls;
    }
    if has_workbook_marker(bytes) {
        return FileKind::Xls;
    }
    if matches_at(bytes, PAYLOAD_OFFSET, DOC_FIB) {
        return FileKind::Doc;
    }
    if PPT_RECORDS
        .iter()
        .any(|magic| matches_at(bytes, PAYLOAD_OFFSET, magic))
    {
        return FileKind::Ppt;
    }
    FileKind::Msg
}

/// Look for the `Workbook` directory-entry marker near either end of the
/// buffer.
///
/// The CFB directory lands near one end of the file in practice, so large
/// buffers are scanned only in a window at each end; anything not longer
/// than one window is scanned whole. A marker strictly between the two
/// windows of a large buffer is deliberately not found.
fn has_workbook_marker(bytes: &[u8]) -> bool {
    if bytes.len() > MARKER_WINDOW {
        WORKBOOK_FINDER.find(&bytes[..MARKER_WINDOW]).is_some()
            || WORKBOOK_FINDER
                .find(&bytes[bytes.len() - MARKER_WINDOW..])
                .is_some()
    } else {
        WORKBOOK_FINDER.find(bytes).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::super::signatures::OLE2_MAGIC;
    use super::*;

    /// A zeroed buffer of `len` bytes opening with the CFB magic.
    fn compound_buffer(len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len.max(OLE2_MAGIC.len())];
        bytes[..OLE2_MAGIC.len()].copy_from_slice(OLE2_MAGIC);
        bytes
    }

    fn write_at(bytes: &mut [u8], offset: usize, data: &[u8]) {
        bytes[offset..offset + data.len()].copy_from_slice(data);
    }

    #[test]
    fn test_xls_biff8_header() {
        let mut bytes = compound_buffer(520);
        write_at(&mut bytes, PAYLOAD_OFFSET, XLS_BIFF8);
        assert_eq!(classify_compound(&bytes), FileKind::Xls);
    }

    #[test]
    fn test_xls_workbook_marker_in_short_buffer() {
        let mut bytes = compound_buffer(600);
        write_at(&mut bytes, 100, WORKBOOK_MARKER);
        assert_eq!(classify_compound(&bytes), FileKind::Xls);
    }

    #[test]
    fn test_xls_workbook_marker_in_head_of_large_buffer() {
        let mut bytes = compound_buffer(30_000);
        write_at(&mut bytes, 100, WORKBOOK_MARKER);
        assert_eq!(classify_compound(&bytes), FileKind::Xls);
    }

    #[test]
    fn test_xls_workbook_marker_in_tail_of_large_buffer() {
        let mut bytes = compound_buffer(30_000);
        write_at(&mut bytes, 29_000, WORKBOOK_MARKER);
        assert_eq!(classify_compound(&bytes), FileKind::Xls);
    }

    #[test]
    fn test_workbook_marker_between_windows_is_not_seen() {
        let mut bytes = compound_buffer(30_000);
        write_at(&mut bytes, 15_000, WORKBOOK_MARKER);
        assert_eq!(classify_compound(&bytes), FileKind::Msg);
    }

    #[test]
    fn test_workbook_marker_in_window_sized_buffer() {
        // Exactly one window long: the whole buffer is scanned.
        let mut bytes = compound_buffer(MARKER_WINDOW);
        write_at(&mut bytes, MARKER_WINDOW - WORKBOOK_MARKER.len(), WORKBOOK_MARKER);
        assert_eq!(classify_compound(&bytes), FileKind::Xls);
    }

    #[test]
    fn test_doc_fib_header() {
        let mut bytes = compound_buffer(520);
        write_at(&mut bytes, PAYLOAD_OFFSET, DOC_FIB);
        assert_eq!(classify_compound(&bytes), FileKind::Doc);
    }

    #[test]
    fn test_ppt_record_headers() {
        for record in PPT_RECORDS {
            let mut bytes = compound_buffer(520);
            write_at(&mut bytes, PAYLOAD_OFFSET, record);
            assert_eq!(classify_compound(&bytes), FileKind::Ppt, "record {record:02X?}");
        }
    }

    #[test]
    fn test_unrecognized_container_is_msg() {
        let bytes = compound_buffer(600);
        assert_eq!(classify_compound(&bytes), FileKind::Msg);
    }

    #[test]
    fn test_header_only_buffer_is_msg() {
        // Too short for any payload probe; nothing faults.
        let bytes = compound_buffer(OLE2_MAGIC.len());
        assert_eq!(classify_compound(&bytes), FileKind::Msg);
    }
}
