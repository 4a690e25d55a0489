// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Laudo — medical report intake service.
//
// Entry point. Initialises logging, reads configuration from the
// environment, and runs the HTTP server.

use laudo_core::AppConfig;

#[tokio::main]
async fn main() -> laudo_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        port = config.server_port,
        storage = %config.storage_dir.display(),
        ocr_backend = ?config.ocr_backend,
        ocr_language = %config.ocr_language,
        "Laudo starting"
    );

    laudo_server::serve(config).await
}
