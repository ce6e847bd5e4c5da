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

//! Integration tests for starting, stopping and recomposing archives.


use axum::http::StatusCode;
use stagecall_types::requests::{ArchiveLayoutRequest, StartArchiveRequest};
use stagecall_types::responses::{
    APIResponse, ArchiveLayoutResponse, ArchiveResponse, ArchiveStatus, PageBootstrap,
};
use stagecall_types::{APIError, LayoutMode, OutputMode};
use test_helpers::*;
use tower::ServiceExt;

async fn start(test: &TestApp, request: &StartArchiveRequest) -> ArchiveResponse {
    let resp = test
        .app()
        .oneshot(form_request("/start", request))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: APIResponse<ArchiveResponse> = response_json(resp).await;
    body.result
}

#[tokio::test]
async fn composed_archive_starts_horizontal() {
    let test = build_app();
    let archive = start(
        &test,
        &StartArchiveRequest::new(true, true, OutputMode::Composed),
    )
    .await;

    assert_eq!(archive.status, ArchiveStatus::Started);
    assert_eq!(archive.session_id, TEST_SESSION_ID);
    assert_eq!(archive.name, "Archiving Sample App");
    assert_eq!(archive.output_mode, OutputMode::Composed);
    assert_eq!(archive.layout, Some(LayoutMode::Horizontal));
    assert!(archive.has_audio && archive.has_video);
}

#[tokio::test]
async fn individual_archive_has_no_layout() {
    let test = build_app();
    let archive = start(
        &test,
        &StartArchiveRequest::new(false, true, OutputMode::Individual),
    )
    .await;

    assert_eq!(archive.output_mode, OutputMode::Individual);
    assert_eq!(archive.layout, None);
    assert!(!archive.has_audio);
    assert!(archive.has_video);
}

#[tokio::test]
async fn unknown_output_mode_means_individual() {
    let test = build_app();
    let resp = test
        .app()
        .oneshot(form_request(
            "/start",
            &[("hasAudio", "on"), ("outputMode", "mosaic")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: APIResponse<ArchiveResponse> = response_json(resp).await;
    assert_eq!(body.result.output_mode, OutputMode::Individual);
}

#[tokio::test]
async fn start_without_tracks_is_rejected() {
    let test = build_app();
    let resp = test
        .app()
        .oneshot(form_request(
            "/start",
            &StartArchiveRequest::new(false, false, OutputMode::Composed),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: APIResponse<APIError> = response_json(resp).await;
    assert_eq!(body.result.code, "BACKEND_ERROR");
}

#[tokio::test]
async fn second_start_while_recording_is_rejected() {
    let test = build_app();
    let request = StartArchiveRequest::new(true, true, OutputMode::Composed);
    start(&test, &request).await;

    let resp = test
        .app()
        .oneshot(form_request("/start", &request))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stop_makes_archive_downloadable() {
    let test = build_app();
    let archive = start(
        &test,
        &StartArchiveRequest::new(true, true, OutputMode::Composed),
    )
    .await;

    let resp = test
        .app()
        .oneshot(get_request(&format!("/stop/{}", archive.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: APIResponse<ArchiveResponse> = response_json(resp).await;
    assert_eq!(body.result.status, ArchiveStatus::Available);
    assert_eq!(
        body.result.url,
        Some(format!("{TEST_ARCHIVE_BASE_URL}/{}.mp4", archive.id))
    );
}

#[tokio::test]
async fn stop_unknown_archive_is_404() {
    let test = build_app();
    let resp = test
        .app()
        .oneshot(get_request("/stop/nope"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: APIResponse<APIError> = response_json(resp).await;
    assert_eq!(body.result.code, "ARCHIVE_NOT_FOUND");
}

#[tokio::test]
async fn vertical_layout_is_applied_and_remembered() {
    let test = build_app();
    let archive = start(
        &test,
        &StartArchiveRequest::new(true, true, OutputMode::Composed),
    )
    .await;

    let resp = test
        .app()
        .oneshot(form_request(
            &format!("/archive/{}/layout", archive.id),
            &ArchiveLayoutRequest::new(LayoutMode::Vertical),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: APIResponse<ArchiveLayoutResponse> = response_json(resp).await;
    assert_eq!(body.result.archive_id, archive.id);
    assert_eq!(body.result.layout, LayoutMode::Vertical);

    // Pages loading from now on start vertical.
    let resp = test.app().oneshot(get_request("/participant")).await.unwrap();
    let body: APIResponse<PageBootstrap> = response_json(resp).await;
    assert_eq!(body.result.layout, LayoutMode::Vertical);
}

#[tokio::test]
async fn unrecognized_layout_label_means_horizontal() {
    let test = build_app();
    let archive = start(
        &test,
        &StartArchiveRequest::new(true, true, OutputMode::Composed),
    )
    .await;

    let resp = test
        .app()
        .oneshot(form_request(
            &format!("/archive/{}/layout", archive.id),
            &[("type", "diagonalPresentation")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: APIResponse<ArchiveLayoutResponse> = response_json(resp).await;
    assert_eq!(body.result.layout, LayoutMode::Horizontal);
}

#[tokio::test]
async fn layout_of_individual_archive_is_rejected() {
    let test = build_app();
    let archive = start(
        &test,
        &StartArchiveRequest::new(true, true, OutputMode::Individual),
    )
    .await;

    let resp = test
        .app()
        .oneshot(form_request(
            &format!("/archive/{}/layout", archive.id),
            &ArchiveLayoutRequest::new(LayoutMode::Vertical),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: APIResponse<APIError> = response_json(resp).await;
    assert_eq!(body.result.code, "BACKEND_ERROR");

    // A refused change leaves the session layout alone.
    assert_eq!(test.state.stage.lock().await.layout, LayoutMode::Horizontal);
}
