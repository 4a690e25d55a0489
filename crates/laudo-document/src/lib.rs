// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// laudo-document — Document processing for the Laudo intake service.
//
// Provides content-based type detection, per-format metadata extraction
// (DICOM, ZIP, PDF, raster images), best-effort text acquisition with an
// injectable OCR fallback, and the report field parser. `pipeline::process`
// composes them into the single-pass byte→record transformation.

pub mod detect;
pub mod metadata;
pub mod ocr;
pub mod pipeline;
pub mod report;
pub mod text;

// Re-export the primary entry points so callers can use
// `laudo_document::detect(..)` etc. without the module path.
pub use detect::detect;
pub use metadata::extract_metadata;
pub use ocr::{OcrBackend, UnavailableBackend, backend_for};
pub use pipeline::{Processed, process};
pub use report::parse_fields;
pub use text::acquire_text;

#[cfg(test)]
pub(crate) mod fixtures;
