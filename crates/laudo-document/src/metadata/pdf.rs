// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF page count via a structural parse of the page tree (no rendering).

use laudo_core::{LaudoError, MetadataRecord, Result};
use lopdf::Document;
use tracing::debug;

pub fn extract(data: &[u8]) -> Result<MetadataRecord> {
    let document = Document::load_mem(data).map_err(|err| {
        debug!(%err, "PDF parse failed");
        LaudoError::InvalidFormat("Invalid PDF file".to_string())
    })?;

    Ok(MetadataRecord::Pdf {
        pages: document.get_pages().len(),
    })
}
