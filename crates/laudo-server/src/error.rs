// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP error rendering. Every failure leaves the server as
// `{"detail": "<reason>"}` with the status the error taxonomy prescribes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use laudo_core::LaudoError;
use serde_json::json;
use tracing::error;

/// Wrapper making [`LaudoError`] renderable as a response.
///
/// Needed because of the orphan rule — `IntoResponse` and `LaudoError` both
/// live elsewhere.
#[derive(Debug)]
pub struct ApiError(pub LaudoError);

impl ApiError {
    /// A 400 for malformed requests (missing file field, broken multipart).
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self(LaudoError::InvalidFormat(detail.into()))
    }
}

impl From<LaudoError> for ApiError {
    fn from(err: LaudoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            LaudoError::UnsupportedType | LaudoError::InvalidFormat(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            LaudoError::ProcessingTimeout => (StatusCode::GATEWAY_TIMEOUT, self.0.to_string()),
            other => {
                error!(error = %other, "request failed internally");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_statuses() {
        let cases = [
            (LaudoError::UnsupportedType, StatusCode::BAD_REQUEST),
            (
                LaudoError::InvalidFormat("ZIP file is empty".into()),
                StatusCode::BAD_REQUEST,
            ),
            (LaudoError::ProcessingTimeout, StatusCode::GATEWAY_TIMEOUT),
            (
                LaudoError::Storage("disk full".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            let response = ApiError(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
