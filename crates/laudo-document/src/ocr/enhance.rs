// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Recognition preprocessing — scanned report pages arrive as noisy colour
// rasters; engines read high-contrast monochrome much better.

use image::{DynamicImage, GrayImage};
use imageproc::contrast::{ThresholdType, otsu_level, threshold};
use tracing::debug;

/// Prepare an image for recognition: grayscale conversion followed by Otsu
/// global binarization.
pub fn prepare_for_ocr(image: &DynamicImage) -> GrayImage {
    let gray = image.to_luma8();
    let level = otsu_level(&gray);
    debug!(level, width = gray.width(), height = gray.height(), "binarizing for OCR");
    threshold(&gray, level, ThresholdType::Binary)
}
