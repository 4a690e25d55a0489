// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content-based type detection. The uploaded filename and declared
// content type are never consulted — only the bytes decide.

use laudo_core::DetectedType;
use tracing::{debug, instrument};

/// Offset of the `DICM` magic code after the 128-byte file preamble.
const DICOM_PREAMBLE_LEN: usize = 128;

/// The DICOM file-meta magic code.
const DICOM_MAGIC: &[u8; 4] = b"DICM";

/// Detect the payload format from raw bytes.
///
/// Priority order, first match wins:
/// 1. DICOM file-meta probe — must run before generic sniffing, because a
///    DICOM preamble may contain another format's signature.
/// 2. Magic-number registry (`infer`) for PDF, ZIP, PNG, JPEG.
/// 3. Hardcoded signature checks for the same four formats, for byte
///    patterns the registry does not conclude on.
/// 4. [`DetectedType::Unknown`].
///
/// Probe failures are never fatal; they simply mean "no match".
#[instrument(skip(data), fields(len = data.len()))]
pub fn detect(data: &[u8]) -> DetectedType {
    if is_dicom(data) {
        return DetectedType::Dicom;
    }

    if let Some(kind) = infer::get(data) {
        let tag = match kind.extension() {
            "pdf" => Some(DetectedType::Pdf),
            "zip" => Some(DetectedType::Zip),
            "png" => Some(DetectedType::Png),
            "jpg" => Some(DetectedType::Jpg),
            other => {
                debug!(matched = other, "registry matched an unsupported format");
                None
            }
        };
        if let Some(tag) = tag {
            return tag;
        }
        // A conclusive-but-unsupported registry match is final: the fallback
        // patterns below cover the same four formats and cannot disagree.
        return DetectedType::Unknown;
    }

    sniff_signature(data).unwrap_or(DetectedType::Unknown)
}

/// DICOM structural probe: a 128-byte preamble followed by `DICM`, or a bare
/// file-meta stream starting directly with the magic code.
fn is_dicom(data: &[u8]) -> bool {
    if data.len() >= DICOM_PREAMBLE_LEN + DICOM_MAGIC.len()
        && &data[DICOM_PREAMBLE_LEN..DICOM_PREAMBLE_LEN + DICOM_MAGIC.len()] == DICOM_MAGIC
    {
        return true;
    }
    data.len() >= DICOM_MAGIC.len() && &data[..DICOM_MAGIC.len()] == DICOM_MAGIC
}

/// Hardcoded fallback signature checks for the supported formats.
fn sniff_signature(data: &[u8]) -> Option<DetectedType> {
    if data.starts_with(b"%PDF-") {
        return Some(DetectedType::Pdf);
    }
    if data.len() >= 4 && &data[..2] == b"PK" {
        // Local file header, empty-archive end record, or spanned marker.
        if matches!((data[2], data[3]), (0x03, 0x04) | (0x05, 0x06) | (0x07, 0x08)) {
            return Some(DetectedType::Zip);
        }
    }
    if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(DetectedType::Png);
    }
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(DetectedType::Jpg);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn detects_pdf_from_signature() {
        assert_eq!(detect(&fixtures::report_pdf_bytes("hello")), DetectedType::Pdf);
    }

    #[test]
    fn detects_zip_including_empty_archive() {
        assert_eq!(detect(&fixtures::zip_bytes(&["a.txt"])), DetectedType::Zip);
        // An empty archive is just an end-of-central-directory record; it
        // must still sniff as zip so extraction can reject it by rule.
        assert_eq!(detect(&fixtures::empty_zip_bytes()), DetectedType::Zip);
    }

    #[test]
    fn detects_png_and_jpg() {
        assert_eq!(detect(&fixtures::png_bytes(10, 10)), DetectedType::Png);
        assert_eq!(detect(&fixtures::jpg_bytes(10, 10)), DetectedType::Jpg);
    }

    #[test]
    fn detects_dicom_preamble() {
        assert_eq!(detect(&fixtures::dicom_bytes()), DetectedType::Dicom);
    }

    #[test]
    fn dicom_wins_over_colliding_signatures() {
        // A preamble that itself starts with a PDF signature must still be
        // classified as DICOM: the structural probe runs first.
        let mut data = vec![0u8; DICOM_PREAMBLE_LEN];
        data[..5].copy_from_slice(b"%PDF-");
        data.extend_from_slice(DICOM_MAGIC);
        data.extend_from_slice(&[0x02, 0x00, 0x00, 0x00]);
        assert_eq!(detect(&data), DetectedType::Dicom);
    }

    #[test]
    fn plain_text_is_unknown() {
        assert_eq!(detect(b"example text"), DetectedType::Unknown);
        assert_eq!(detect(b""), DetectedType::Unknown);
    }
}
