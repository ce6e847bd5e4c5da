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

//! Recording fakes for the coordinator's collaborators.

#![allow(dead_code)]

use async_trait::async_trait;
use stagecall_client::ApiError;
use stagecall_coordinator::{
    Arrangement, ElementId, Participant, RecordingControls, SignalChannel, StageConfig,
    StageCoordinator, StageNotifier, StageView, StreamId,
};
use stagecall_types::{requests::StartArchiveRequest, LayoutMode, StageSignal};
use std::sync::Mutex;

pub type TestStage = StageCoordinator<RecordingSignals, RecordingView, RecordingNotifier>;

/// Collects every signal the coordinator broadcasts.
#[derive(Debug, Default)]
pub struct RecordingSignals {
    pub sent: Vec<StageSignal>,
}

impl SignalChannel for RecordingSignals {
    fn signal(&mut self, signal: &StageSignal) -> anyhow::Result<()> {
        self.sent.push(signal.clone());
        Ok(())
    }
}

impl RecordingSignals {
    pub fn of_kind(&self, kind: &str) -> Vec<&StageSignal> {
        self.sent.iter().filter(|s| s.kind() == kind).collect()
    }
}

/// Mirrors what a DOM would show.
#[derive(Debug)]
pub struct RecordingView {
    pub elements: Vec<ElementId>,
    pub focused: Option<ElementId>,
    pub arrangement: Option<Arrangement>,
    pub controls: Option<RecordingControls>,
    pub form_enabled: bool,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            focused: None,
            arrangement: None,
            controls: None,
            form_enabled: true,
        }
    }
}

impl StageView for RecordingView {
    fn create_element(&mut self, participant: &Participant) {
        self.elements.push(participant.element_id.clone());
    }

    fn remove_element(&mut self, element_id: &ElementId) {
        self.elements.retain(|e| e != element_id);
        if self.focused.as_ref() == Some(element_id) {
            self.focused = None;
        }
    }

    fn mark_focused(&mut self, element_id: Option<&ElementId>) {
        self.focused = element_id.cloned();
    }

    fn apply_arrangement(&mut self, arrangement: &Arrangement) {
        self.arrangement = Some(arrangement.clone());
    }

    fn render_recording_controls(&mut self, controls: RecordingControls) {
        self.form_enabled = controls.options_enabled;
        self.controls = Some(controls);
    }

    fn set_archive_form_enabled(&mut self, enabled: bool) {
        self.form_enabled = enabled;
    }
}

impl RecordingView {
    pub fn arrangement(&self) -> &Arrangement {
        self.arrangement.as_ref().expect("an arrangement was applied")
    }

    pub fn index_of(&self, element: &str) -> Option<usize> {
        self.arrangement().index_of(&ElementId::new(element))
    }

    pub fn top_of(&self, element: &str) -> Option<i32> {
        self.arrangement()
            .placement(&ElementId::new(element))
            .map(|p| p.top_percent)
    }
}

/// A request the coordinator sent to the signaling server.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Focus(String),
    ArchiveLayout { archive_id: String, layout: String },
    Start(StartArchiveRequest),
    Stop(String),
}

/// Records requests and answers them all with success, or all with a 500.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    requests: Mutex<Vec<Request>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: Request) -> Result<(), ApiError> {
        self.requests.lock().unwrap().push(request);
        if self.fail {
            Err(ApiError::ServerError {
                status: 500,
                body: "boom".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StageNotifier for RecordingNotifier {
    async fn notify_focus(&self, stream_id: &StreamId) -> Result<(), ApiError> {
        self.record(Request::Focus(stream_id.to_string()))
    }

    async fn notify_archive_layout(
        &self,
        archive_id: &str,
        layout: LayoutMode,
    ) -> Result<(), ApiError> {
        self.record(Request::ArchiveLayout {
            archive_id: archive_id.to_string(),
            layout: layout.label().to_string(),
        })
    }

    async fn start_archive(&self, request: &StartArchiveRequest) -> Result<(), ApiError> {
        self.record(Request::Start(request.clone()))
    }

    async fn stop_archive(&self, archive_id: &str) -> Result<(), ApiError> {
        self.record(Request::Stop(archive_id.to_string()))
    }
}

pub fn stage(config: StageConfig) -> TestStage {
    StageCoordinator::new(
        config,
        RecordingSignals::default(),
        RecordingView::default(),
        RecordingNotifier::default(),
    )
}

pub fn failing_stage(config: StageConfig) -> TestStage {
    StageCoordinator::new(
        config,
        RecordingSignals::default(),
        RecordingView::default(),
        RecordingNotifier::failing(),
    )
}

pub fn vertical() -> StageConfig {
    StageConfig {
        layout: LayoutMode::Vertical,
        ..StageConfig::default()
    }
}

/// Local publisher `a`, then remotes `b` and `c`, waiting for every request.
pub async fn join_abc(stage: &mut TestStage) {
    let a = stage.publisher("a");
    for participant in [a, Participant::remote("b"), Participant::remote("c")] {
        if let Some(outbound) = stage.on_participant_joined(participant).unwrap() {
            outbound.outcome().await.unwrap();
        }
    }
}

pub fn focused_count(stage: &TestStage) -> usize {
    stage
        .state()
        .participants()
        .iter()
        .filter(|p| stage.state().has_focus(&p.stream_id))
        .count()
}
