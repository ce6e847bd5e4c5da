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

//! Handlers for archive control and history.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use stagecall_types::{
    requests::{ArchiveLayoutRequest, HistoryQuery, StartArchiveRequest},
    responses::{APIResponse, ArchiveHistoryResponse, ArchiveLayoutResponse, ArchiveResponse},
    LayoutMode, OutputMode,
};

use crate::backend::ArchiveProperties;
use crate::error::AppError;
use crate::state::AppState;

/// POST /start
///
/// Composed archives start in horizontal layout; individual archives have none.
pub async fn start_archive(
    State(state): State<AppState>,
    Form(body): Form<StartArchiveRequest>,
) -> Result<Json<APIResponse<ArchiveResponse>>, AppError> {
    let output_mode = body.output_mode();
    let properties = ArchiveProperties {
        name: state.archive_name.clone(),
        has_audio: body.audio_enabled(),
        has_video: body.video_enabled(),
        output_mode,
        layout: (output_mode == OutputMode::Composed).then_some(LayoutMode::Horizontal),
    };
    let archive = state
        .backend
        .start_archive(&state.session_id, properties)
        .await?;
    tracing::info!("Archive {} started ({})", archive.id, output_mode.label());
    Ok(Json(APIResponse::ok(archive)))
}

/// GET /stop/{archive_id}
pub async fn stop_archive(
    State(state): State<AppState>,
    Path(archive_id): Path<String>,
) -> Result<Json<APIResponse<ArchiveResponse>>, AppError> {
    let archive = state.backend.stop_archive(&archive_id).await?;
    tracing::info!("Archive {archive_id} stopped");
    Ok(Json(APIResponse::ok(archive)))
}

/// POST /archive/{archive_id}/layout
///
/// `verticalPresentation` selects the vertical layout; any other label is
/// horizontal. The new layout also becomes what newly loading pages start with.
pub async fn set_archive_layout(
    State(state): State<AppState>,
    Path(archive_id): Path<String>,
    Form(body): Form<ArchiveLayoutRequest>,
) -> Result<Json<APIResponse<ArchiveLayoutResponse>>, AppError> {
    let layout = body.layout();
    state
        .backend
        .set_archive_layout(&archive_id, layout)
        .await?;
    state.stage.lock().await.layout = layout;
    tracing::info!("Archive {archive_id} layout set to {layout}");
    Ok(Json(APIResponse::ok(ArchiveLayoutResponse {
        archive_id,
        layout,
    })))
}

/// GET /history?page={page}
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<APIResponse<ArchiveHistoryResponse>>, AppError> {
    let page = query.page();
    let offset = (page as usize - 1).saturating_mul(state.history_page_size);
    let archives = state
        .backend
        .list_archives(offset, state.history_page_size)
        .await?;

    Ok(Json(APIResponse::ok(ArchiveHistoryResponse {
        archives,
        page,
        show_previous: (page > 1).then(|| format!("/history?page={}", page - 1)),
        show_next: format!("/history?page={}", page + 1),
    })))
}

/// GET /download/{archive_id}
///
/// Redirects to the recorded file.
pub async fn download_archive(
    State(state): State<AppState>,
    Path(archive_id): Path<String>,
) -> Result<Response, AppError> {
    let archive = state.backend.get_archive(&archive_id).await?;
    let url = archive
        .url
        .ok_or_else(|| AppError::invalid_request(&format!("Archive {archive_id} is not available yet")))?;
    Ok(redirect(&url))
}

/// GET /delete/{archive_id}
///
/// Deletes the archive and redirects back to the history page.
pub async fn delete_archive(
    State(state): State<AppState>,
    Path(archive_id): Path<String>,
) -> Result<Response, AppError> {
    state.backend.delete_archive(&archive_id).await?;
    tracing::info!("Archive {archive_id} deleted");
    Ok(redirect("/history"))
}

fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
