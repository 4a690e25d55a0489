// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// DICOM attribute extraction via dicom-object.

use dicom_dictionary_std::tags;
use dicom_object::from_reader;
use laudo_core::{LaudoError, MetadataRecord, Result};
use tracing::debug;

/// Client-facing reason for a byte stream that claims DICOM but cannot be
/// parsed as one.
const INVALID_DICOM: &str = "Invalid DICOM file";

/// Read patient name, modality, and the pixel matrix from a DICOM stream.
///
/// Missing tags degrade to placeholders (`None` for patient/modality, `?` in
/// the dimensions string) — only a failed parse of the file itself is an
/// error.
pub fn extract(data: &[u8]) -> Result<MetadataRecord> {
    let object = from_reader(meta_stream(data)?).map_err(|err| {
        debug!(%err, "DICOM parse failed");
        LaudoError::InvalidFormat(INVALID_DICOM.to_string())
    })?;

    let patient = object
        .element(tags::PATIENT_NAME)
        .ok()
        .and_then(|element| element.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    let modality = object
        .element(tags::MODALITY)
        .ok()
        .and_then(|element| element.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    let rows = object
        .element(tags::ROWS)
        .ok()
        .and_then(|element| element.to_int::<u16>().ok());
    let columns = object
        .element(tags::COLUMNS)
        .ok()
        .and_then(|element| element.to_int::<u16>().ok());
    let dimensions = format!("{}x{}", placeholder(rows), placeholder(columns));

    Ok(MetadataRecord::Dicom {
        patient,
        modality,
        dimensions,
    })
}

/// Position the stream at the `DICM` magic code, skipping the 128-byte
/// preamble when present.
fn meta_stream(data: &[u8]) -> Result<&[u8]> {
    if data.len() >= 132 && &data[128..132] == b"DICM" {
        return Ok(&data[128..]);
    }
    if data.len() >= 4 && &data[..4] == b"DICM" {
        return Ok(data);
    }
    Err(LaudoError::InvalidFormat(INVALID_DICOM.to_string()))
}

fn placeholder(value: Option<u16>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}
