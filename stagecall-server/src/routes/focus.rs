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

//! Handler for `POST /focus`.

use axum::{extract::State, Form, Json};
use stagecall_types::{
    requests::FocusRequest,
    responses::{APIResponse, FocusResponse},
};

use crate::backend::StreamLayout;
use crate::error::AppError;
use crate::state::AppState;

/// Layout class that composed archives enlarge.
pub const FOCUS_CLASS: &str = "focus";

/// POST /focus
///
/// Moves the `focus` layout class from the previous focus holder to the new
/// one. The very first focus is only recorded: there is no old stream to
/// clear and the host's own stream already carries the class from its token.
pub async fn set_focus(
    State(state): State<AppState>,
    Form(body): Form<FocusRequest>,
) -> Result<Json<APIResponse<FocusResponse>>, AppError> {
    let new_focus = body.focus;
    if new_focus.is_empty() {
        return Err(AppError::invalid_request("focus must name a stream"));
    }

    let mut stage = state.stage.lock().await;
    if stage.focus_stream_id == new_focus {
        return Ok(Json(APIResponse::ok(FocusResponse { focus: new_focus })));
    }

    if !stage.focus_stream_id.is_empty() {
        let streams = [
            StreamLayout {
                stream_id: new_focus.clone(),
                layout_classes: vec![FOCUS_CLASS.to_string()],
            },
            StreamLayout {
                stream_id: stage.focus_stream_id.clone(),
                layout_classes: Vec::new(),
            },
        ];
        state
            .backend
            .set_stream_layouts(&state.session_id, &streams)
            .await?;
    }

    tracing::info!("Focus changed from '{}' to '{new_focus}'", stage.focus_stream_id);
    stage.focus_stream_id = new_focus.clone();
    Ok(Json(APIResponse::ok(FocusResponse { focus: new_focus })))
}
