// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ZIP archive listing.

use std::io::Cursor;

use laudo_core::{LaudoError, MetadataRecord, Result};
use tracing::debug;
use zip::ZipArchive;

/// List entry names in archive order.
///
/// An archive with zero entries is rejected as a business rule — an intake
/// of "nothing" is never valid — with the exact reason `ZIP file is empty`.
pub fn extract(data: &[u8]) -> Result<MetadataRecord> {
    let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|err| {
        debug!(%err, "ZIP central directory unreadable");
        LaudoError::InvalidFormat("Invalid ZIP file".to_string())
    })?;

    if archive.len() == 0 {
        return Err(LaudoError::InvalidFormat("ZIP file is empty".to_string()));
    }

    let mut files = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(|err| {
            debug!(%err, index, "ZIP entry unreadable");
            LaudoError::InvalidFormat("Invalid ZIP file".to_string())
        })?;
        files.push(entry.name().to_string());
    }

    Ok(MetadataRecord::Zip { files })
}
