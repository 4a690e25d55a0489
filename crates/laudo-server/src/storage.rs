// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-request artifact storage: the verbatim upload and the serialized
// report, keyed by the request identifier.

use std::path::{Path, PathBuf};

use laudo_core::{DetectedType, ExtractedReport, LaudoError, Result};
use tracing::{debug, instrument};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the artifacts of one request.
    pub fn request_dir(&self, id: Uuid) -> PathBuf {
        self.root.join(id.to_string())
    }

    /// Write `original.<tag>` (upload bytes, verbatim) and `report.json`
    /// (the serialized [`ExtractedReport`]) under the request directory.
    #[instrument(skip(self, data, report), fields(%id, kind = %kind, len = data.len()))]
    pub fn persist(
        &self,
        id: Uuid,
        kind: DetectedType,
        data: &[u8],
        report: &ExtractedReport,
    ) -> Result<PathBuf> {
        let dir = self.request_dir(id);
        std::fs::create_dir_all(&dir)
            .map_err(|err| storage_error("create request directory", &dir, err))?;

        let original = dir.join(format!("original.{}", kind.as_str()));
        std::fs::write(&original, data)
            .map_err(|err| storage_error("write original upload", &original, err))?;

        let report_path = dir.join("report.json");
        let serialized = serde_json::to_vec_pretty(report)?;
        std::fs::write(&report_path, serialized)
            .map_err(|err| storage_error("write report", &report_path, err))?;

        debug!(dir = %dir.display(), "artifacts persisted");
        Ok(dir)
    }
}

fn storage_error(action: &str, path: &Path, err: std::io::Error) -> LaudoError {
    LaudoError::Storage(format!("{action} at {}: {err}", path.display()))
}
