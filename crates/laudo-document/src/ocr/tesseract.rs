// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tesseract OCR backend — drives the system `tesseract` binary, the
// traditional, widely-installed recognition option with per-language packs.

use std::path::Path;
use std::process::Command;

use image::DynamicImage;
use laudo_core::{LaudoError, Result};
use tracing::{debug, instrument};

use super::OcrBackend;
use super::enhance::prepare_for_ocr;
use super::raster::binary_available;

pub struct TesseractBackend {
    /// Tesseract language pack identifier (e.g. `por`, `eng`).
    language: String,
}

impl TesseractBackend {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    #[instrument(skip(self), fields(lang = %self.language, path = %image_path.display()))]
    fn run_tesseract(&self, image_path: &Path) -> Result<String> {
        let output = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output();

        match output {
            Ok(output) if output.status.success() => {
                let text = String::from_utf8_lossy(&output.stdout).into_owned();
                debug!(chars = text.len(), "tesseract run complete");
                Ok(text)
            }
            Ok(output) => Err(LaudoError::Ocr(format!(
                "tesseract failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(LaudoError::Ocr(
                "tesseract not found (install tesseract-ocr)".to_string(),
            )),
            Err(err) => Err(LaudoError::Io(err)),
        }
    }
}

impl OcrBackend for TesseractBackend {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn is_available(&self) -> bool {
        binary_available("tesseract")
    }

    fn availability_hint(&self) -> String {
        if !binary_available("tesseract") {
            "Tesseract not installed. Install with: apt install tesseract-ocr".to_string()
        } else if !binary_available("pdftoppm") {
            "pdftoppm not installed. Install with: apt install poppler-utils".to_string()
        } else {
            "Tesseract is available".to_string()
        }
    }

    fn recognize_image(&self, image: &DynamicImage) -> Result<String> {
        let work_dir = tempfile::tempdir()?;
        let image_path = work_dir.path().join("page.png");

        let prepared = prepare_for_ocr(image);
        DynamicImage::ImageLuma8(prepared)
            .save(&image_path)
            .map_err(|err| LaudoError::Ocr(format!("failed to stage image for OCR: {err}")))?;

        self.run_tesseract(&image_path)
    }
}
