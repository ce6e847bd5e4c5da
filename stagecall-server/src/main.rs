/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Stagecall signaling server entry point.
//!
//! A standalone Axum service that records the session's focus and layout,
//! and starts, stops, lists and deletes archives for the host page.

use stagecall_server::backend::InMemoryBackend;
use stagecall_server::config::Config;
use stagecall_server::routes;
use stagecall_server::state::AppState;
use std::io;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().map_err(io::Error::other)?;

    let backend = Arc::new(InMemoryBackend::new(&config.archive_base_url));
    tracing::info!("Serving session {}", config.session_id);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::new(backend, &config);
    let app = routes::router().layer(cors).with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    tracing::info!("Stagecall server listening on {}", config.listen_addr);

    axum::serve(listener, app).await
}
