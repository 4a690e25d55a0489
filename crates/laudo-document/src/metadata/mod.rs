// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-format metadata extraction. Pure decode: no side effects, no partial
// results — a record is returned whole or the claim fails typed.

mod archive;
mod dicom;
mod image;
mod pdf;

use laudo_core::{DetectedType, LaudoError, MetadataRecord, Result};
use tracing::instrument;

/// Extract the format-specific attribute record for an already-detected type.
///
/// Fails with [`LaudoError::InvalidFormat`] when the content does not hold up
/// to the claimed format's structure (corrupt DICOM, unreadable PDF/image)
/// or violates a business rule (empty ZIP archive), and with
/// [`LaudoError::UnsupportedType`] for tags outside the supported set.
/// "Claimed X but invalid" and "not X at all" are deliberately different
/// outcomes: the former is a typed failure, the latter a different tag from
/// the detector.
#[instrument(skip(data), fields(kind = %kind, len = data.len()))]
pub fn extract_metadata(kind: DetectedType, data: &[u8]) -> Result<MetadataRecord> {
    match kind {
        DetectedType::Dicom => dicom::extract(data),
        DetectedType::Zip => archive::extract(data),
        DetectedType::Pdf => pdf::extract(data),
        DetectedType::Png | DetectedType::Jpg => image::extract(data),
        DetectedType::Unknown => Err(LaudoError::UnsupportedType),
    }
}
