// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster image dimensions, decoding the container header only.

use std::io::Cursor;

use image::ImageReader;
use laudo_core::{LaudoError, MetadataRecord, Result};
use tracing::debug;

pub fn extract(data: &[u8]) -> Result<MetadataRecord> {
    let (width, height) = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|err| {
            debug!(%err, "image format probe failed");
            LaudoError::InvalidFormat("Invalid image file".to_string())
        })?
        .into_dimensions()
        .map_err(|err| {
            debug!(%err, "image header decode failed");
            LaudoError::InvalidFormat("Invalid image file".to_string())
        })?;

    Ok(MetadataRecord::Image { width, height })
}
