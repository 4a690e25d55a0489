// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The single-pass intake pipeline: bytes in, structured record out.
// Stateless and synchronous; callers wanting concurrency or deadlines wrap
// it at the request boundary.

use laudo_core::{DetectedType, ExtractedReport, LaudoError, MetadataRecord, Result};
use tracing::{debug, instrument};

use crate::detect::detect;
use crate::metadata::extract_metadata;
use crate::ocr::OcrBackend;
use crate::report::parse_fields;
use crate::text::acquire_text;

/// Everything the pipeline derives from one payload.
#[derive(Debug, Clone)]
pub struct Processed {
    pub kind: DetectedType,
    pub metadata: MetadataRecord,
    pub report: ExtractedReport,
}

/// Run detection, metadata extraction, text acquisition, and field parsing
/// over one payload.
///
/// Fails with [`LaudoError::UnsupportedType`] when no supported format is
/// detected, and propagates [`LaudoError::InvalidFormat`] from metadata
/// extraction untouched. Text acquisition and parsing never fail — an
/// unreadable or unrecognisable payload yields an empty report.
#[instrument(skip(data, ocr), fields(len = data.len()))]
pub fn process(data: &[u8], ocr: &dyn OcrBackend) -> Result<Processed> {
    let kind = detect(data);
    if !kind.is_supported() {
        return Err(LaudoError::UnsupportedType);
    }

    let metadata = extract_metadata(kind, data)?;
    let text = acquire_text(kind, data, ocr);
    let report = parse_fields(&text);

    debug!(
        %kind,
        text_len = text.len(),
        dates = report.datas.len(),
        empty_report = report.is_empty(),
        "intake processed"
    );

    Ok(Processed {
        kind,
        metadata,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::ocr::UnavailableBackend;

    #[test]
    fn pdf_report_flows_end_to_end() {
        let bytes = fixtures::report_pdf_bytes(
            "Indicacao: Dor no peito\nAchados: Exame normal\nConclusao: Sem sinais\nData 01/02/2023 e 03-02-2024",
        );
        let processed = process(&bytes, &UnavailableBackend).unwrap();

        assert_eq!(processed.kind, DetectedType::Pdf);
        assert_eq!(processed.metadata, MetadataRecord::Pdf { pages: 1 });
        assert_eq!(processed.report.indicacao.as_deref(), Some("Dor no peito"));
        assert_eq!(processed.report.achados.as_deref(), Some("Exame normal"));
        assert!(
            processed
                .report
                .conclusao
                .as_deref()
                .unwrap()
                .starts_with("Sem sinais")
        );
        assert!(processed.report.datas.contains(&"01/02/2023".to_string()));
        assert!(processed.report.datas.contains(&"03-02-2024".to_string()));
    }

    #[test]
    fn headerless_pdf_yields_an_empty_report() {
        let bytes = fixtures::report_pdf_bytes("laudo sem cabecalhos reconheciveis");
        let processed = process(&bytes, &UnavailableBackend).unwrap();
        assert_eq!(processed.report.indicacao, None);
        assert_eq!(processed.report.achados, None);
        assert_eq!(processed.report.conclusao, None);
        assert!(processed.report.datas.is_empty());
    }

    #[test]
    fn plain_text_payload_is_unsupported() {
        let err = process(b"example text", &UnavailableBackend).unwrap_err();
        assert_eq!(err.to_string(), "File type not supported");
    }

    #[test]
    fn empty_zip_fails_before_text_acquisition() {
        let err = process(&fixtures::empty_zip_bytes(), &UnavailableBackend).unwrap_err();
        assert_eq!(err.to_string(), "ZIP file is empty");
    }

    #[test]
    fn dicom_yields_metadata_and_an_empty_report() {
        let processed = process(&fixtures::dicom_bytes(), &UnavailableBackend).unwrap();
        assert_eq!(processed.kind, DetectedType::Dicom);
        match processed.metadata {
            MetadataRecord::Dicom { ref dimensions, .. } => assert_eq!(dimensions, "1x1"),
            ref other => panic!("expected dicom metadata, got {other:?}"),
        }
        assert!(processed.report.is_empty());
    }

    #[test]
    fn image_without_recognition_still_succeeds() {
        let processed = process(&fixtures::png_bytes(10, 10), &UnavailableBackend).unwrap();
        assert_eq!(
            processed.metadata,
            MetadataRecord::Image {
                width: 10,
                height: 10,
            }
        );
        assert!(processed.report.is_empty());
    }
}
