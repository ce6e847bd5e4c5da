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

//! Integration tests for the host and participant page bootstrap.


use axum::http::StatusCode;
use stagecall_types::requests::FocusRequest;
use stagecall_types::responses::{APIResponse, PageBootstrap, PageRole};
use stagecall_types::LayoutMode;
use test_helpers::*;
use tower::ServiceExt;

#[tokio::test]
async fn fresh_session_bootstrap() {
    let test = build_app();
    let resp = test.app().oneshot(get_request("/host")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: APIResponse<PageBootstrap> = response_json(resp).await;
    assert!(body.success);
    assert_eq!(
        body.result,
        PageBootstrap {
            session_id: TEST_SESSION_ID.to_string(),
            role: PageRole::Host,
            layout: LayoutMode::Horizontal,
            focus_stream_id: None,
        }
    );
}

#[tokio::test]
async fn participant_page_receives_current_focus() {
    let test = build_app();
    test.app()
        .oneshot(form_request(
            "/focus",
            &FocusRequest {
                focus: "stream-a".to_string(),
            },
        ))
        .await
        .unwrap();

    let resp = test
        .app()
        .oneshot(get_request("/participant"))
        .await
        .unwrap();
    let body: APIResponse<PageBootstrap> = response_json(resp).await;
    assert_eq!(body.result.role, PageRole::Participant);
    assert_eq!(body.result.focus_stream_id.as_deref(), Some("stream-a"));
}
