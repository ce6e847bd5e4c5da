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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! The focus/layout coordinator.

use log::{debug, error, info, warn};
use stagecall_types::{requests::StartArchiveRequest, StageSignal};
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::arrangement::Arrangement;
use crate::config::StageConfig;
use crate::error::CoordinatorError;
use crate::events::{stage_events, StageEvent, StageEventReceiver, StageEventSender};
use crate::notifier::{Outbound, OutboundKind, StageNotifier};
use crate::participant::{ElementId, Participant, StreamId};
use crate::ports::{SignalChannel, StageView};
use crate::state::{PendingFocus, SessionState};

/// Keeps one page's focus, layout and archive state consistent and in sync
/// with its peers and the signaling server.
///
/// Construct it with [new(config, signals, view, notifier)][Self::new], then
/// feed it SDK and UI events through the `on_*` handlers or [dispatch][Self::dispatch].
/// Every handler mutates local state and updates the view before it issues any
/// outbound request, so state read right after a call is already current.
///
/// Outbound requests run on the tokio runtime the coordinator was created in,
/// or the one given to [with_runtime][Self::with_runtime]. Without a runtime
/// local state still changes, the request is not sent and its
/// [`Outbound::outcome`] is [`CoordinatorError::NoRuntime`].
///
/// Results of outbound requests that need a local reaction (a failed archive
/// start) are applied at the start of the next handler call, or by
/// [settle][Self::settle].
pub struct StageCoordinator<S, V, N> {
    state: SessionState,
    publisher_element: ElementId,
    signals: S,
    view: V,
    notifier: Arc<N>,
    runtime: Option<Handle>,
    results_tx: StageEventSender,
    results_rx: StageEventReceiver,
}

impl<S, V, N> StageCoordinator<S, V, N>
where
    S: SignalChannel,
    V: StageView,
    N: StageNotifier,
{
    pub fn new(config: StageConfig, signals: S, view: V, notifier: N) -> Self {
        let (results_tx, results_rx) = stage_events();
        let mut coordinator = Self {
            state: SessionState::new(config.layout, config.focus_stream_id),
            publisher_element: config.publisher_element_id,
            signals,
            view,
            notifier: Arc::new(notifier),
            runtime: Handle::try_current().ok(),
            results_tx,
            results_rx,
        };
        coordinator
            .view
            .render_recording_controls(coordinator.state.archive().controls());
        coordinator.position_streams();
        coordinator
    }

    /// Send outbound requests from `runtime`.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn signals(&self) -> &S {
        &self.signals
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The local publisher for `stream_id`, rendered into this page's
    /// publisher element.
    pub fn publisher(&self, stream_id: impl Into<StreamId>) -> Participant {
        Participant::local(stream_id, self.publisher_element.clone())
    }

    /// Apply the results of finished outbound requests. Returns how many were
    /// applied.
    pub fn settle(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.results_rx.try_recv() {
            if let StageEvent::ArchiveStartFailed(message) = event {
                self.on_archive_start_failed(&message);
            }
            applied += 1;
        }
        applied
    }

    /// Give focus to `stream_id`, tell peers and the server, and re-arrange.
    ///
    /// The server request is best-effort: a failure is logged and local focus
    /// stays where it is. A focus waiting for a stream to join is dropped.
    pub fn set_focus(&mut self, stream_id: &StreamId) -> Result<Outbound, CoordinatorError> {
        self.settle();
        let element = self.state.focus(stream_id)?.element_id.clone();
        Ok(self.announce_focus(stream_id, &element))
    }

    /// Arrange the stream elements for the current layout and focus.
    ///
    /// Calling it again without a state change yields the same arrangement.
    pub fn position_streams(&mut self) -> Arrangement {
        let arrangement = self.state.position_streams();
        self.view.apply_arrangement(&arrangement);
        arrangement
    }

    /// Flip between horizontal and vertical layout.
    ///
    /// Always broadcasts one `layoutClass` signal. While an archive is active
    /// the server is also asked to recompose it; that request is returned.
    pub fn toggle_layout(&mut self) -> Option<Outbound> {
        self.settle();
        let layout = self.state.layout().toggled();
        self.state.set_layout(layout);
        info!("Layout changed to {layout}");
        self.position_streams();

        let outbound = self.state.archive().archive_id().map(|archive_id| {
            let notifier = Arc::clone(&self.notifier);
            let archive_id = archive_id.to_string();
            Outbound::spawn(
                OutboundKind::ArchiveLayout,
                self.runtime.as_ref(),
                async move { notifier.notify_archive_layout(&archive_id, layout).await },
            )
        });

        self.broadcast(StageSignal::LayoutClass(layout));
        outbound
    }

    /// Register a new stream and create its element.
    ///
    /// The stream takes focus when the page was told to focus it on load or
    /// when nothing is focused yet. A focus a peer asked for before the
    /// stream joined is applied locally only.
    pub fn on_participant_joined(
        &mut self,
        participant: Participant,
    ) -> Result<Option<Outbound>, CoordinatorError> {
        self.settle();
        let stream_id = participant.stream_id.clone();
        self.state.add(participant.clone())?;
        self.view.create_element(&participant);
        debug!("Participant joined: {stream_id}");

        match self.state.take_pending_focus(&stream_id) {
            Some(PendingFocus::OnLoad(_)) => self.set_focus(&stream_id).map(Some),
            Some(PendingFocus::Remote(_)) => {
                self.apply_remote_focus(&stream_id)?;
                Ok(None)
            }
            None if self.state.focused().is_none() => {
                let element = self.state.default_focus(&stream_id)?.element_id.clone();
                Ok(Some(self.announce_focus(&stream_id, &element)))
            }
            None => {
                self.position_streams();
                Ok(None)
            }
        }
    }

    /// Drop a stream and its element.
    ///
    /// If it held focus, focus goes back to the local publisher. Without a
    /// publisher nothing is focused.
    pub fn on_participant_left(
        &mut self,
        stream_id: &StreamId,
    ) -> Result<Option<Outbound>, CoordinatorError> {
        self.settle();
        let had_focus = self.state.has_focus(stream_id);
        let participant = self.state.remove(stream_id)?;
        self.view.remove_element(&participant.element_id);
        debug!("Participant left: {stream_id}");

        let mut outbound = None;
        if had_focus {
            match self.state.local_publisher().map(|p| p.stream_id.clone()) {
                Some(publisher) => outbound = Some(self.set_focus(&publisher)?),
                None => {
                    warn!("Focused stream {stream_id} left and there is no publisher to fall back to");
                    self.view.mark_focused(None);
                }
            }
        }
        self.position_streams();
        Ok(outbound)
    }

    /// Apply a signal sent by another participant.
    ///
    /// Remote changes are applied locally only; they are neither re-broadcast
    /// nor reported to the server, so the echo of a page's own signal is a
    /// no-op. A `focusStream` naming a stream this page has not subscribed to
    /// yet is applied when that stream joins, unless focus moves again first.
    pub fn on_signal(&mut self, kind: &str, data: &str) -> Result<(), CoordinatorError> {
        self.settle();
        match StageSignal::parse(kind, data) {
            Some(StageSignal::FocusStream(stream_id)) => {
                let stream_id = StreamId::from(stream_id);
                if self.state.participant(&stream_id).is_none() {
                    debug!("Deferring focus on {stream_id} until it joins");
                    self.state.set_pending_focus(PendingFocus::Remote(stream_id));
                    return Ok(());
                }
                self.apply_remote_focus(&stream_id)?;
            }
            Some(StageSignal::LayoutClass(layout)) => {
                if layout != self.state.layout() {
                    self.state.set_layout(layout);
                    self.position_streams();
                }
            }
            None => debug!("Ignoring signal {kind}"),
        }
        Ok(())
    }

    /// The server reports that recording started.
    pub fn on_archive_started(&mut self, archive_id: &str) -> Result<(), CoordinatorError> {
        self.settle();
        self.state.archive_mut().start(archive_id)?;
        info!("ARCHIVE STARTED {archive_id}");
        self.view
            .render_recording_controls(self.state.archive().controls());
        Ok(())
    }

    /// The server reports that recording stopped.
    pub fn on_archive_stopped(&mut self) -> Result<(), CoordinatorError> {
        self.settle();
        let archive_id = self.state.archive_mut().stop()?;
        info!("ARCHIVE STOPPED {archive_id}");
        self.view
            .render_recording_controls(self.state.archive().controls());
        Ok(())
    }

    /// Ask the server to start recording.
    ///
    /// Disables the options form right away. Recording state only changes
    /// when `archiveStarted` arrives. If the request fails the form is
    /// enabled again on the next handler call or [settle][Self::settle]; if
    /// it cannot be sent at all, immediately.
    pub fn request_archive_start(
        &mut self,
        request: StartArchiveRequest,
    ) -> Result<Outbound, CoordinatorError> {
        self.settle();
        if let Some(archive_id) = self.state.archive().archive_id() {
            return Err(CoordinatorError::ArchiveAlreadyActive(archive_id.to_string()));
        }
        self.view.set_archive_form_enabled(false);

        let notifier = Arc::clone(&self.notifier);
        let results = self.results_tx.clone();
        let outbound = Outbound::spawn(
            OutboundKind::ArchiveStart,
            self.runtime.as_ref(),
            async move {
                let result = notifier.start_archive(&request).await;
                if let Err(e) = &result {
                    if results
                        .send(StageEvent::ArchiveStartFailed(e.to_string()))
                        .is_err()
                    {
                        debug!("Coordinator gone before archive start failed: {e}");
                    }
                }
                result
            },
        );
        if !outbound.is_spawned() {
            self.on_archive_start_failed(&CoordinatorError::NoRuntime.to_string());
        }
        Ok(outbound)
    }

    /// Undo the form lock of a start request that failed.
    pub fn on_archive_start_failed(&mut self, message: &str) {
        warn!("Archive start failed: {message}");
        if !self.state.archive().is_active() {
            self.view.set_archive_form_enabled(true);
        }
    }

    /// Ask the server to stop the active archive.
    pub fn request_archive_stop(&mut self) -> Result<Outbound, CoordinatorError> {
        self.settle();
        let archive_id = self
            .state
            .archive()
            .archive_id()
            .ok_or(CoordinatorError::NoActiveArchive)?
            .to_string();
        let notifier = Arc::clone(&self.notifier);
        Ok(Outbound::spawn(
            OutboundKind::ArchiveStop,
            self.runtime.as_ref(),
            async move { notifier.stop_archive(&archive_id).await },
        ))
    }

    /// Route an event to its handler.
    pub fn dispatch(&mut self, event: StageEvent) -> Result<Option<Outbound>, CoordinatorError> {
        match event {
            StageEvent::StreamCreated(participant) => self.on_participant_joined(participant),
            StageEvent::StreamDestroyed(stream_id) => self.on_participant_left(&stream_id),
            StageEvent::SignalReceived { kind, data } => self.on_signal(&kind, &data).map(|_| None),
            StageEvent::ArchiveStarted(archive_id) => {
                self.on_archive_started(&archive_id).map(|_| None)
            }
            StageEvent::ArchiveStopped => self.on_archive_stopped().map(|_| None),
            StageEvent::FocusClicked(stream_id) => self.set_focus(&stream_id).map(Some),
            StageEvent::ToggleLayoutClicked => Ok(self.toggle_layout()),
            StageEvent::StartClicked(request) => self.request_archive_start(request).map(Some),
            StageEvent::StopClicked => self.request_archive_stop().map(Some),
            StageEvent::ArchiveStartFailed(message) => {
                self.on_archive_start_failed(&message);
                Ok(None)
            }
        }
    }

    /// Dispatch every event already waiting on `events`. Handler errors are
    /// logged. Returns how many events were handled.
    pub fn pump(&mut self, events: &mut StageEventReceiver) -> usize {
        self.settle();
        let mut handled = 0;
        while let Ok(event) = events.try_recv() {
            if let Err(e) = self.dispatch(event) {
                warn!("Stage event rejected: {e}");
            }
            handled += 1;
        }
        handled
    }

    /// Show an already applied focus change, tell peers and the server, and
    /// re-arrange.
    fn announce_focus(&mut self, stream_id: &StreamId, element: &ElementId) -> Outbound {
        info!("Focus changed to {stream_id}");
        self.view.mark_focused(Some(element));
        self.broadcast(StageSignal::FocusStream(stream_id.to_string()));

        let notifier = Arc::clone(&self.notifier);
        let focus = stream_id.clone();
        let outbound = Outbound::spawn(OutboundKind::Focus, self.runtime.as_ref(), async move {
            notifier.notify_focus(&focus).await
        });

        self.position_streams();
        outbound
    }

    fn apply_remote_focus(&mut self, stream_id: &StreamId) -> Result<(), CoordinatorError> {
        let element = self.state.focus(stream_id)?.element_id.clone();
        debug!("Focus changed to {stream_id} by a peer");
        self.view.mark_focused(Some(&element));
        self.position_streams();
        Ok(())
    }

    fn broadcast(&mut self, signal: StageSignal) {
        if let Err(e) = self.signals.signal(&signal) {
            error!("Failed to send {} signal: {e}", signal.kind());
        }
    }
}
