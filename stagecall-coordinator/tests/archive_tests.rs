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

//! Archive state machine and recording controls.

mod test_helpers;

use stagecall_coordinator::{
    stage_events, ArchiveSession, CoordinatorError, OutboundKind, StageConfig,
    StageCoordinator, StageEvent,
};
use stagecall_types::{requests::StartArchiveRequest, OutputMode};
use test_helpers::*;

fn composed() -> StartArchiveRequest {
    StartArchiveRequest::new(true, true, OutputMode::Composed)
}

#[tokio::test]
async fn controls_follow_archive_presence() {
    let mut stage = stage(StageConfig::default());

    let controls = stage.view().controls.unwrap();
    assert!(controls.start_visible && !controls.stop_visible && controls.options_enabled);

    stage.on_archive_started("arc123").unwrap();
    let controls = stage.view().controls.unwrap();
    assert!(!controls.start_visible && controls.stop_visible && !controls.options_enabled);
    assert_eq!(stage.state().archive().archive_id(), Some("arc123"));

    stage.on_archive_stopped().unwrap();
    let controls = stage.view().controls.unwrap();
    assert!(controls.start_visible && !controls.stop_visible && controls.options_enabled);
    assert_eq!(stage.state().archive(), &ArchiveSession::Absent);
}

#[tokio::test]
async fn start_click_locks_form_but_waits_for_event() {
    let mut stage = stage(StageConfig::default());

    let outbound = stage.request_archive_start(composed()).unwrap();
    assert_eq!(outbound.kind(), OutboundKind::ArchiveStart);

    assert!(!stage.view().form_enabled);
    assert!(!stage.state().archive().is_active());

    outbound.outcome().await.unwrap();
    assert_eq!(stage.notifier().requests(), vec![Request::Start(composed())]);
    assert!(!stage.state().archive().is_active());
}

#[tokio::test]
async fn failed_start_reenables_form() {
    let mut stage = failing_stage(StageConfig::default());

    let outcome = stage.request_archive_start(composed()).unwrap().outcome().await;
    assert!(outcome.is_err());
    assert!(!stage.view().form_enabled);

    assert_eq!(stage.settle(), 1);
    assert!(stage.view().form_enabled);
    assert!(!stage.state().archive().is_active());
    assert_eq!(stage.settle(), 0);
}

#[tokio::test]
async fn failed_start_is_undone_by_the_next_handler() {
    let mut stage = failing_stage(StageConfig::default());
    stage
        .request_archive_start(composed())
        .unwrap()
        .outcome()
        .await
        .unwrap_err();

    stage.toggle_layout();

    assert!(stage.view().form_enabled);
}

#[tokio::test]
async fn start_acknowledged_after_failure_keeps_form_locked() {
    let mut stage = failing_stage(StageConfig::default());
    stage
        .request_archive_start(composed())
        .unwrap()
        .outcome()
        .await
        .unwrap_err();

    stage.on_archive_started("arc123").unwrap();

    assert!(!stage.view().form_enabled);
    assert!(stage.state().archive().is_active());
}

#[tokio::test]
async fn late_start_failure_does_not_unlock_an_active_archive() {
    let mut stage = stage(StageConfig::default());
    stage.on_archive_started("arc123").unwrap();

    stage.on_archive_start_failed("timeout");

    assert!(!stage.view().form_enabled);
}

#[tokio::test]
async fn start_while_recording_is_rejected() {
    let mut stage = stage(StageConfig::default());
    stage.on_archive_started("arc123").unwrap();

    let err = stage.request_archive_start(composed()).unwrap_err();
    assert!(matches!(err, CoordinatorError::ArchiveAlreadyActive(ref id) if id == "arc123"));
}

#[tokio::test]
async fn stop_click_requests_stop_of_active_archive() {
    let mut stage = stage(StageConfig::default());
    stage.on_archive_started("arc123").unwrap();

    stage.request_archive_stop().unwrap().outcome().await.unwrap();

    assert_eq!(stage.notifier().requests(), vec![Request::Stop("arc123".into())]);
    assert!(stage.state().archive().is_active());
}

#[tokio::test]
async fn stop_without_archive_is_rejected() {
    let mut stage = stage(StageConfig::default());
    assert!(matches!(
        stage.request_archive_stop(),
        Err(CoordinatorError::NoActiveArchive)
    ));
}

#[tokio::test]
async fn archive_events_only_move_between_the_two_states() {
    let mut stage = stage(StageConfig::default());

    assert!(stage.on_archive_stopped().is_err());
    stage.on_archive_started("one").unwrap();
    assert!(stage.on_archive_started("two").is_err());
    assert_eq!(stage.state().archive().archive_id(), Some("one"));
}

#[tokio::test]
async fn dispatch_routes_queued_events() {
    let (events_tx, mut events_rx) = stage_events();
    let mut stage: TestStage = StageCoordinator::new(
        StageConfig::default(),
        RecordingSignals::default(),
        RecordingView::default(),
        RecordingNotifier::default(),
    );

    let a = stage.publisher("a");
    events_tx.send(StageEvent::StreamCreated(a)).unwrap();
    events_tx
        .send(StageEvent::ArchiveStarted("arc9".into()))
        .unwrap();
    events_tx.send(StageEvent::ToggleLayoutClicked).unwrap();
    events_tx.send(StageEvent::ArchiveStopped).unwrap();
    events_tx.send(StageEvent::ArchiveStopped).unwrap();

    assert_eq!(stage.pump(&mut events_rx), 5);
    assert!(stage.state().focused().is_some());
    assert!(stage.state().layout().is_vertical());
    assert!(!stage.state().archive().is_active());
}
