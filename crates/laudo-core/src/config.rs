// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which OCR backend the text-acquisition fallback should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrBackendChoice {
    /// Pick the first backend whose dependencies are present.
    Auto,
    /// System `tesseract` binary.
    Tesseract,
    /// Pure-Rust ocrs engine (requires the `ocr` build feature).
    Ocrs,
    /// No recognition: scanned content degrades to empty text.
    Off,
}

impl OcrBackendChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "tesseract" => Some(Self::Tesseract),
            "ocrs" => Some(Self::Ocrs),
            "off" | "none" | "disabled" => Some(Self::Off),
            _ => None,
        }
    }
}

/// Process-wide settings, fixed at start and never mutated (the core holds no
/// other shared state between requests).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Port for the HTTP intake server.
    pub server_port: u16,
    /// Root directory for per-request artifacts (`<uuid>/original.<tag>`,
    /// `<uuid>/report.json`).
    pub storage_dir: PathBuf,
    /// Directory served as the static frontend.
    pub static_dir: PathBuf,
    /// OCR backend selection for the text-acquisition fallback.
    pub ocr_backend: OcrBackendChoice,
    /// Recognition language for backends with language packs (tesseract).
    pub ocr_language: String,
    /// Handler-enforced deadline for one upload, in seconds. The core has no
    /// cooperative checkpoint, so the elapsed result is discarded.
    pub upload_timeout_secs: u64,
    /// Maximum accepted request body, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 8000,
            storage_dir: PathBuf::from("storage"),
            static_dir: PathBuf::from("static"),
            ocr_backend: OcrBackendChoice::Auto,
            ocr_language: "por".to_string(),
            upload_timeout_secs: 30,
            max_upload_bytes: 50 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Build a config from the defaults plus `LAUDO_*` environment overrides.
    ///
    /// Unset or unparsable variables fall back to the default silently — the
    /// server logs the effective config at startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(port) = env_parse("LAUDO_PORT") {
            config.server_port = port;
        }
        if let Ok(dir) = std::env::var("LAUDO_STORAGE_DIR") {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("LAUDO_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(choice) = std::env::var("LAUDO_OCR_BACKEND")
            .ok()
            .and_then(|s| OcrBackendChoice::parse(&s))
        {
            config.ocr_backend = choice;
        }
        if let Ok(lang) = std::env::var("LAUDO_OCR_LANGUAGE") {
            config.ocr_language = lang;
        }
        if let Some(secs) = env_parse("LAUDO_UPLOAD_TIMEOUT_SECS") {
            config.upload_timeout_secs = secs;
        }
        if let Some(bytes) = env_parse("LAUDO_MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = bytes;
        }

        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}
