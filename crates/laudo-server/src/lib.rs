// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// laudo-server — HTTP surface for the Laudo intake pipeline.
//
// One multipart upload endpoint composes the processing core, persists the
// artifacts, and returns the combined result; everything format-related
// lives in laudo-document, which never sees request framing.

mod error;
mod handlers;
mod routes;
mod state;
mod storage;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
pub use storage::Storage;

use std::net::SocketAddr;

use laudo_core::AppConfig;

/// Start the intake server and run until the process is stopped.
pub async fn serve(config: AppConfig) -> laudo_core::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let state = AppState::new(config);
    let app = create_router(state);

    tracing::info!("Starting server at http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
