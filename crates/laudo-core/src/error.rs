// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Laudo.

use thiserror::Error;

/// Top-level error type for all Laudo operations.
///
/// The first three variants carry the exact reason strings the HTTP surface
/// exposes to clients; the rest are internal and render as a generic 500.
#[derive(Debug, Error)]
pub enum LaudoError {
    // -- User-visible intake failures --
    /// The detector found no supported format in the byte content.
    #[error("File type not supported")]
    UnsupportedType,

    /// Content was sniffed as a supported format but failed that format's
    /// structural validation (corrupt DICOM, empty ZIP, ...). The string is
    /// the client-facing reason.
    #[error("{0}")]
    InvalidFormat(String),

    /// The request handler's external deadline elapsed mid-extraction.
    #[error("Processing timeout")]
    ProcessingTimeout,

    // -- Processing errors --
    #[error("PDF operation failed: {0}")]
    Pdf(String),

    #[error("image processing failed: {0}")]
    Image(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    // -- Storage / persistence --
    #[error("storage error: {0}")]
    Storage(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LaudoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_visible_reason_strings() {
        assert_eq!(
            LaudoError::UnsupportedType.to_string(),
            "File type not supported"
        );
        assert_eq!(
            LaudoError::InvalidFormat("ZIP file is empty".into()).to_string(),
            "ZIP file is empty"
        );
        assert_eq!(
            LaudoError::InvalidFormat("Invalid DICOM file".into()).to_string(),
            "Invalid DICOM file"
        );
        assert_eq!(
            LaudoError::ProcessingTimeout.to_string(),
            "Processing timeout"
        );
    }
}
