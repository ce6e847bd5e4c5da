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

//! Page bootstrap handlers: `GET /host` and `GET /participant`.

use axum::{extract::State, Json};
use stagecall_types::responses::{APIResponse, PageBootstrap, PageRole};

use crate::state::AppState;

/// GET /host
pub async fn host(State(state): State<AppState>) -> Json<APIResponse<PageBootstrap>> {
    Json(APIResponse::ok(bootstrap(&state, PageRole::Host).await))
}

/// GET /participant
pub async fn participant(State(state): State<AppState>) -> Json<APIResponse<PageBootstrap>> {
    Json(APIResponse::ok(bootstrap(&state, PageRole::Participant).await))
}

async fn bootstrap(state: &AppState, role: PageRole) -> PageBootstrap {
    let stage = state.stage.lock().await;
    PageBootstrap {
        session_id: state.session_id.clone(),
        role,
        layout: stage.layout,
        focus_stream_id: Some(stage.focus_stream_id.clone()).filter(|s| !s.is_empty()),
    }
}
