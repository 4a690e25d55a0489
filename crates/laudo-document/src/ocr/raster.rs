// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF page rasterization via the poppler `pdftoppm` binary. Rasterization is
// itself an absent-able capability: a missing binary is an `Ocr` error the
// acquisition layer degrades on, never a crash.

use std::path::{Path, PathBuf};
use std::process::Command;

use laudo_core::{LaudoError, Result};
use tracing::debug;

/// Render resolution for recognition input.
const RASTER_DPI: &str = "300";

/// Check for a binary on PATH.
pub fn binary_available(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Render one page (1-indexed) of a PDF into a PNG inside `work_dir`,
/// returning the image path.
pub fn pdf_page_to_image(pdf: &[u8], page: u32, work_dir: &Path) -> Result<PathBuf> {
    if !binary_available("pdftoppm") {
        return Err(LaudoError::Ocr(
            "pdftoppm not installed (poppler-utils); cannot rasterize PDF pages".to_string(),
        ));
    }

    let input = work_dir.join("input.pdf");
    std::fs::write(&input, pdf)?;

    let page_arg = page.to_string();
    let prefix = work_dir.join("page");
    let output = Command::new("pdftoppm")
        .args(["-png", "-r", RASTER_DPI, "-f", &page_arg, "-l", &page_arg])
        .arg(&input)
        .arg(&prefix)
        .output()?;

    if !output.status.success() {
        return Err(LaudoError::Ocr(format!(
            "pdftoppm failed on page {}: {}",
            page,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    // pdftoppm zero-pads the page number in the output name depending on the
    // document length, so locate the produced file instead of predicting it.
    for entry in std::fs::read_dir(work_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "png") {
            debug!(page, path = %path.display(), "page rasterized");
            return Ok(path);
        }
    }

    Err(LaudoError::Ocr(format!(
        "pdftoppm produced no image for page {page}"
    )))
}
