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

//! Axum router configuration for the signaling server.

pub mod archives;
pub mod focus;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Build the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        // Page bootstrap
        .route("/host", get(pages::host))
        .route("/participant", get(pages::participant))
        // Focus
        .route("/focus", post(focus::set_focus))
        // Archive control
        .route("/start", post(archives::start_archive))
        .route("/stop/{archive_id}", get(archives::stop_archive))
        .route(
            "/archive/{archive_id}/layout",
            post(archives::set_archive_layout),
        )
        // Archive history
        .route("/history", get(archives::history))
        .route("/download/{archive_id}", get(archives::download_archive))
        .route("/delete/{archive_id}", get(archives::delete_archive))
}
