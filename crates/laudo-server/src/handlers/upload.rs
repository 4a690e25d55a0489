// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The intake endpoint: multipart file in, combined classification +
// extraction result out, artifacts persisted under a fresh request id.

use std::time::Duration;

use axum::Json;
use axum::extract::{Multipart, State};
use laudo_core::{LaudoError, UploadResult};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[instrument(skip_all)]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResult>, ApiError> {
    let mut payload: Option<(Option<String>, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::bad_request(format!("Invalid multipart request: {err}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|err| ApiError::bad_request(format!("Failed to read upload: {err}")))?;
            payload = Some((filename, data.to_vec()));
            break;
        }
    }
    let Some((filename, data)) = payload else {
        return Err(ApiError::bad_request("No file uploaded"));
    };

    let size = data.len();
    // The filename is informational only — type decisions come from content.
    debug!(
        filename = filename.as_deref().unwrap_or("<unnamed>"),
        size, "upload received"
    );

    // The pipeline is synchronous and CPU-bound; run it off the reactor with
    // an external deadline. There is no cooperative checkpoint inside, so an
    // elapsed deadline discards the eventual result.
    let ocr = state.ocr.clone();
    let deadline = Duration::from_secs(state.config.upload_timeout_secs);
    let bytes = data.clone();
    let processed = tokio::time::timeout(
        deadline,
        tokio::task::spawn_blocking(move || laudo_document::process(&bytes, ocr.as_ref())),
    )
    .await
    .map_err(|_elapsed| ApiError(LaudoError::ProcessingTimeout))?
    .map_err(|join_err| ApiError(LaudoError::Io(std::io::Error::other(join_err))))??;

    let result = UploadResult {
        kind: processed.kind,
        size,
        metadata: processed.metadata,
        report: processed.report,
        uuid: Uuid::new_v4(),
    };

    state
        .storage
        .persist(result.uuid, result.kind, &data, &result.report)?;

    info!(uuid = %result.uuid, kind = %result.kind, size, "upload processed");
    Ok(Json(result))
}
