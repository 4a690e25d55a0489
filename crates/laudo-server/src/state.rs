// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared state for the intake server.

use std::sync::Arc;

use laudo_core::AppConfig;
use laudo_document::{OcrBackend, backend_for};

use crate::storage::Storage;

/// Read-only state handed to every handler. Built once at startup; nothing
/// here mutates between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub ocr: Arc<dyn OcrBackend>,
    pub storage: Storage,
}

impl AppState {
    /// Resolve the OCR backend and storage root from the configuration.
    pub fn new(config: AppConfig) -> Self {
        let ocr: Arc<dyn OcrBackend> = Arc::from(backend_for(&config));
        let storage = Storage::new(config.storage_dir.clone());
        Self {
            config: Arc::new(config),
            ocr,
            storage,
        }
    }
}
