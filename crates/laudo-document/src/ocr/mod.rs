// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Optical character recognition as an injectable capability.
//
// Recognition is optional at runtime: models may be missing, binaries may be
// uninstalled. Rather than scattering availability checks through the
// pipeline, callers hold a `dyn OcrBackend` and the absent case is its own
// implementation ([`UnavailableBackend`]) whose calls fail — failures the
// text-acquisition layer converts to empty text, never to a request error.
//
// Backends:
//   - `tesseract` — system Tesseract binary, honours the configured
//     recognition language; PDF pages rasterized with `pdftoppm`.
//   - `ocrs` (build feature `ocr`) — pure-Rust neural engine with models in
//     the XDG cache directory.

pub mod enhance;
pub mod raster;
pub mod tesseract;

#[cfg(feature = "ocr")]
pub mod ocrs_backend;

use image::DynamicImage;
use laudo_core::{AppConfig, LaudoError, OcrBackendChoice, Result};
use tracing::{info, warn};

pub use tesseract::TesseractBackend;

#[cfg(feature = "ocr")]
pub use ocrs_backend::OcrsBackend;

/// Strategy interface for text recognition.
///
/// Implementations must be cheap to call repeatedly — engines load their
/// models at construction, not per page.
pub trait OcrBackend: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Whether the backend's runtime dependencies are present.
    fn is_available(&self) -> bool;

    /// What is needed to make (or keep) this backend available.
    fn availability_hint(&self) -> String;

    /// Recognise text in a decoded image.
    fn recognize_image(&self, image: &DynamicImage) -> Result<String>;

    /// Recognise text on one page (1-indexed) of a PDF.
    ///
    /// The default implementation rasterizes the page with `pdftoppm` and
    /// feeds the image to [`recognize_image`](Self::recognize_image).
    fn recognize_pdf_page(&self, pdf: &[u8], page: u32) -> Result<String> {
        let work_dir = tempfile::tempdir()?;
        let image_path = raster::pdf_page_to_image(pdf, page, work_dir.path())?;
        let image = image::open(&image_path).map_err(|err| {
            LaudoError::Ocr(format!("failed to decode rasterized page {page}: {err}"))
        })?;
        self.recognize_image(&image)
    }
}

/// The absent variant: every recognition call fails, which downstream
/// degrades to empty text.
pub struct UnavailableBackend;

impl OcrBackend for UnavailableBackend {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn availability_hint(&self) -> String {
        "no OCR backend configured; install tesseract or enable the `ocr` build feature"
            .to_string()
    }

    fn recognize_image(&self, _image: &DynamicImage) -> Result<String> {
        Err(LaudoError::Ocr("no OCR backend configured".to_string()))
    }

    fn recognize_pdf_page(&self, _pdf: &[u8], _page: u32) -> Result<String> {
        // Skip the pointless rasterization the default impl would do.
        Err(LaudoError::Ocr("no OCR backend configured".to_string()))
    }
}

/// Select the backend the configuration asks for.
///
/// `Auto` prefers the in-process ocrs engine when the build carries it and
/// its models are cached, then the system tesseract binary, then the
/// unavailable variant. An explicit choice is honoured even when currently
/// unavailable — its calls will fail and degrade, which is the documented
/// behaviour, and the hint is logged once here.
pub fn backend_for(config: &AppConfig) -> Box<dyn OcrBackend> {
    let backend: Box<dyn OcrBackend> = match config.ocr_backend {
        OcrBackendChoice::Off => Box::new(UnavailableBackend),
        OcrBackendChoice::Tesseract => {
            Box::new(TesseractBackend::new(config.ocr_language.clone()))
        }
        OcrBackendChoice::Ocrs => match ocrs_if_built() {
            Some(backend) => backend,
            None => {
                warn!("ocrs backend requested but not usable in this build");
                Box::new(UnavailableBackend)
            }
        },
        OcrBackendChoice::Auto => ocrs_if_built()
            .or_else(|| {
                let tesseract = TesseractBackend::new(config.ocr_language.clone());
                tesseract
                    .is_available()
                    .then(|| Box::new(tesseract) as Box<dyn OcrBackend>)
            })
            .unwrap_or_else(|| Box::new(UnavailableBackend)),
    };

    if backend.is_available() {
        info!(backend = backend.name(), "OCR backend selected");
    } else {
        info!(
            backend = backend.name(),
            hint = %backend.availability_hint(),
            "recognition unavailable; scanned content will yield empty text"
        );
    }
    backend
}

#[cfg(feature = "ocr")]
fn ocrs_if_built() -> Option<Box<dyn OcrBackend>> {
    match OcrsBackend::with_default_models() {
        Ok(backend) => Some(Box::new(backend)),
        Err(err) => {
            warn!(%err, "ocrs engine not usable");
            None
        }
    }
}

#[cfg(not(feature = "ocr"))]
fn ocrs_if_built() -> Option<Box<dyn OcrBackend>> {
    None
}
