// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pure-Rust OCR backend using the `ocrs` crate, a neural engine executed via
// `rten`. Only compiled with the `ocr` feature.
//
// # Model Setup
//
// The engine needs two model files, cached under `$XDG_CACHE_HOME/ocrs`
// (typically `~/.cache/ocrs`):
//
// - `text-detection.rten` — locates text regions in the image.
// - `text-recognition.rten` — decodes characters from detected regions.
//
// Running the `ocrs-cli` tool once downloads both:
//   ```sh
//   cargo install ocrs-cli
//   ocrs some-image.png
//   ```
//
// Debug builds of rten are 10-100x slower — compile in release mode.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use laudo_core::{LaudoError, Result};
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use tracing::{debug, info, instrument};

use super::OcrBackend;
use super::enhance::prepare_for_ocr;

const DETECTION_MODEL_FILENAME: &str = "text-detection.rten";
const RECOGNITION_MODEL_FILENAME: &str = "text-recognition.rten";

/// Default directory for cached model files, per the XDG Base Directory
/// specification.
fn default_model_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("ocrs")
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".cache").join("ocrs")
    } else {
        PathBuf::from("ocrs-models")
    }
}

/// Whether both model files are present in the default cache location.
pub fn models_available() -> bool {
    let dir = default_model_dir();
    dir.join(DETECTION_MODEL_FILENAME).exists() && dir.join(RECOGNITION_MODEL_FILENAME).exists()
}

/// In-process recognition engine. Models load once at construction; the
/// engine is then reused for every page.
pub struct OcrsBackend {
    engine: OcrEngine,
}

impl OcrsBackend {
    /// Load models from the default cache directory.
    pub fn with_default_models() -> Result<Self> {
        Self::from_model_dir(default_model_dir())
    }

    /// Load models from a specific directory containing
    /// `text-detection.rten` and `text-recognition.rten`.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn from_model_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let detection_path = dir.join(DETECTION_MODEL_FILENAME);
        let recognition_path = dir.join(RECOGNITION_MODEL_FILENAME);

        for path in [&detection_path, &recognition_path] {
            if !path.exists() {
                return Err(LaudoError::Ocr(format!(
                    "OCR model not found at {}; run `ocrs-cli` once to download models",
                    path.display()
                )));
            }
        }

        info!("loading OCR models");
        let detection_model = Model::load_file(&detection_path).map_err(|err| {
            LaudoError::Ocr(format!(
                "failed to load detection model from {}: {}",
                detection_path.display(),
                err
            ))
        })?;
        let recognition_model = Model::load_file(&recognition_path).map_err(|err| {
            LaudoError::Ocr(format!(
                "failed to load recognition model from {}: {}",
                recognition_path.display(),
                err
            ))
        })?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .map_err(|err| LaudoError::Ocr(format!("failed to initialise OCR engine: {err}")))?;

        info!("OCR engine initialised");
        Ok(Self { engine })
    }
}

impl OcrBackend for OcrsBackend {
    fn name(&self) -> &'static str {
        "ocrs"
    }

    fn is_available(&self) -> bool {
        // Construction already loaded the models.
        true
    }

    fn availability_hint(&self) -> String {
        "ocrs models are loaded".to_string()
    }

    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    fn recognize_image(&self, image: &DynamicImage) -> Result<String> {
        let prepared = DynamicImage::ImageLuma8(prepare_for_ocr(image));
        let rgb = prepared.to_rgb8();
        let (width, height) = rgb.dimensions();

        let source = ImageSource::from_bytes(rgb.as_raw(), (width, height)).map_err(|err| {
            LaudoError::Ocr(format!(
                "failed to create image source ({width}x{height}): {err}"
            ))
        })?;
        let input = self
            .engine
            .prepare_input(source)
            .map_err(|err| LaudoError::Ocr(format!("OCR preprocessing failed: {err}")))?;

        let text = self
            .engine
            .get_text(&input)
            .map_err(|err| LaudoError::Ocr(format!("OCR text recognition failed: {err}")))?;

        debug!(
            lines = text.lines().count(),
            chars = text.len(),
            "recognition complete"
        );
        Ok(text)
    }
}
