// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Laudo intake service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical content-sniffed format tag.
///
/// Derived purely from byte content (magic numbers / structural probes),
/// never from the uploaded filename or a declared content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedType {
    Dicom,
    Zip,
    Pdf,
    Png,
    Jpg,
    Unknown,
}

impl DetectedType {
    /// Lowercase tag used on the wire and as the stored-artifact extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dicom => "dicom",
            Self::Zip => "zip",
            Self::Pdf => "pdf",
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this tag is in the supported set for metadata extraction.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for DetectedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format-specific attribute record.
///
/// Exactly one variant is ever populated, matching the [`DetectedType`] that
/// produced it. Serialized untagged so each variant renders as its bare
/// attribute object (`{"pages": 3}`, `{"width": 10, "height": 10}`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataRecord {
    Dicom {
        patient: Option<String>,
        modality: Option<String>,
        /// Pixel matrix as "RxC"; missing tags render as `?`.
        dimensions: String,
    },
    Zip {
        /// Entry names in archive order. Invariant: non-empty — an empty
        /// archive is rejected at extraction time.
        files: Vec<String>,
    },
    Pdf {
        pages: usize,
    },
    Image {
        width: u32,
        height: u32,
    },
}

/// Structured fields extracted from report text.
///
/// A section that had no matching header is `None` and serializes as `null`;
/// this is observably different from a header that was present with an empty
/// body (`Some("")`), and the distinction must be preserved end to end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedReport {
    pub indicacao: Option<String>,
    pub achados: Option<String>,
    pub conclusao: Option<String>,
    /// Date-like tokens in document order, duplicates included, unvalidated.
    pub datas: Vec<String>,
}

impl ExtractedReport {
    /// True when no section matched and no date token was found.
    pub fn is_empty(&self) -> bool {
        self.indicacao.is_none()
            && self.achados.is_none()
            && self.conclusao.is_none()
            && self.datas.is_empty()
    }
}

/// The complete, immutable result of one intake request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(rename = "type")]
    pub kind: DetectedType,
    /// Size of the uploaded payload in bytes.
    pub size: usize,
    pub metadata: MetadataRecord,
    pub report: ExtractedReport,
    /// Per-request correlation identifier; also keys the stored artifacts.
    pub uuid: Uuid,
}
