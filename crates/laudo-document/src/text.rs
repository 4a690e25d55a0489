// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text acquisition — a best-effort plain-text rendering of the payload.
// Embedded text first, recognition fallback second, lossy decode for
// everything else. This layer never fails: every extraction or recognition
// error degrades to empty text, and downstream parsing simply finds nothing.

use laudo_core::DetectedType;
use lopdf::Document;
use tracing::{debug, instrument};

use crate::ocr::OcrBackend;

/// Produce a plain-text rendering of the payload for field parsing.
///
/// - `pdf`: embedded text per page in page order; if the result is
///   whitespace-only, each page is recognised via the injected backend and
///   the page texts joined with newlines.
/// - `png`/`jpg`: direct recognition of the decoded image.
/// - everything else: lossy UTF-8 decode of the raw bytes.
#[instrument(skip(data, ocr), fields(kind = %kind, len = data.len()))]
pub fn acquire_text(kind: DetectedType, data: &[u8], ocr: &dyn OcrBackend) -> String {
    match kind {
        DetectedType::Pdf => pdf_text(data, ocr),
        DetectedType::Png | DetectedType::Jpg => image_text(data, ocr),
        _ => String::from_utf8_lossy(data).into_owned(),
    }
}

fn pdf_text(data: &[u8], ocr: &dyn OcrBackend) -> String {
    let document = match Document::load_mem(data) {
        Ok(document) => document,
        Err(err) => {
            debug!(%err, "PDF unreadable, no text acquired");
            return String::new();
        }
    };
    // BTreeMap keys, so pages come out in page order.
    let pages: Vec<u32> = document.get_pages().keys().copied().collect();

    let mut embedded = String::new();
    for &page in &pages {
        match document.extract_text(&[page]) {
            Ok(text) => embedded.push_str(&text),
            Err(err) => debug!(page, %err, "embedded text extraction failed"),
        }
    }
    if !embedded.trim().is_empty() {
        return embedded;
    }

    debug!(
        pages = pages.len(),
        backend = ocr.name(),
        "no embedded text, falling back to page recognition"
    );
    let mut recognized = Vec::with_capacity(pages.len());
    for &page in &pages {
        match ocr.recognize_pdf_page(data, page) {
            Ok(text) => recognized.push(text),
            Err(err) => {
                debug!(page, %err, "page recognition unavailable");
                recognized.push(String::new());
            }
        }
    }
    if recognized.iter().all(|text| text.trim().is_empty()) {
        return String::new();
    }
    recognized.join("\n")
}

fn image_text(data: &[u8], ocr: &dyn OcrBackend) -> String {
    let image = match image::load_from_memory(data) {
        Ok(image) => image,
        Err(err) => {
            debug!(%err, "image undecodable, no text acquired");
            return String::new();
        }
    };
    match ocr.recognize_image(&image) {
        Ok(text) => text,
        Err(err) => {
            debug!(%err, "image recognition unavailable");
            String::new()
        }
    }
}
