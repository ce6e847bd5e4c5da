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

//! Session state owned by a coordinator.

use stagecall_types::LayoutMode;

use crate::archive::ArchiveSession;
use crate::arrangement::{arrange, Arrangement};
use crate::error::CoordinatorError;
use crate::participant::{ElementId, Participant, StreamId};

/// Focus requested for a stream this page has not subscribed to yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingFocus {
    /// From the page bootstrap. Applied and announced when the stream joins.
    OnLoad(StreamId),
    /// From a peer's `focusStream` signal. Applied locally when the stream joins.
    Remote(StreamId),
}

impl PendingFocus {
    pub fn stream_id(&self) -> &StreamId {
        match self {
            Self::OnLoad(id) | Self::Remote(id) => id,
        }
    }
}

/// Everything one page knows about the call.
///
/// Focus lives in a single `Option`, so zero or one participant holds it.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// In join order.
    participants: Vec<Participant>,
    /// Current order of elements in the stream container.
    element_order: Vec<ElementId>,
    focused: Option<StreamId>,
    layout: LayoutMode,
    archive: ArchiveSession,
    /// Replaced by newer requests, dropped by any applied focus change.
    pending_focus: Option<PendingFocus>,
}

impl SessionState {
    pub fn new(layout: LayoutMode, focus_on_load: Option<StreamId>) -> Self {
        Self {
            layout,
            pending_focus: focus_on_load.map(PendingFocus::OnLoad),
            ..Self::default()
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, stream_id: &StreamId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.stream_id == stream_id)
    }

    pub fn local_publisher(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.is_local)
    }

    pub fn focused(&self) -> Option<&StreamId> {
        self.focused.as_ref()
    }

    pub fn focused_participant(&self) -> Option<&Participant> {
        self.focused.as_ref().and_then(|id| self.participant(id))
    }

    pub fn has_focus(&self, stream_id: &StreamId) -> bool {
        self.focused.as_ref() == Some(stream_id)
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn archive(&self) -> &ArchiveSession {
        &self.archive
    }

    pub fn archive_mut(&mut self) -> &mut ArchiveSession {
        &mut self.archive
    }

    pub fn pending_focus(&self) -> Option<&PendingFocus> {
        self.pending_focus.as_ref()
    }

    /// Stream that takes focus once it joins, if any.
    pub fn focus_on_join(&self) -> Option<&StreamId> {
        self.pending_focus.as_ref().map(PendingFocus::stream_id)
    }

    pub fn element_order(&self) -> &[ElementId] {
        &self.element_order
    }

    pub(crate) fn add(&mut self, participant: Participant) -> Result<(), CoordinatorError> {
        if self.participant(&participant.stream_id).is_some() {
            return Err(CoordinatorError::DuplicateParticipant(
                participant.stream_id.clone(),
            ));
        }
        self.element_order.push(participant.element_id.clone());
        self.participants.push(participant);
        Ok(())
    }

    /// Remove a participant. Clears focus if it held it.
    pub(crate) fn remove(&mut self, stream_id: &StreamId) -> Result<Participant, CoordinatorError> {
        let index = self
            .participants
            .iter()
            .position(|p| &p.stream_id == stream_id)
            .ok_or_else(|| CoordinatorError::UnknownParticipant(stream_id.clone()))?;
        let participant = self.participants.remove(index);
        self.element_order.retain(|e| e != &participant.element_id);
        if self.has_focus(stream_id) {
            self.focused = None;
        }
        Ok(participant)
    }

    /// Move focus to a known participant. Any pending focus is dropped.
    pub(crate) fn focus(&mut self, stream_id: &StreamId) -> Result<&Participant, CoordinatorError> {
        self.default_focus(stream_id)?;
        self.pending_focus = None;
        Ok(self
            .participant(stream_id)
            .expect("default_focus succeeded, so the participant exists"))
    }

    /// Move focus to a known participant because nothing held it. A pending
    /// focus stays for its stream to claim.
    pub(crate) fn default_focus(
        &mut self,
        stream_id: &StreamId,
    ) -> Result<&Participant, CoordinatorError> {
        let index = self
            .participants
            .iter()
            .position(|p| &p.stream_id == stream_id)
            .ok_or_else(|| CoordinatorError::UnknownParticipant(stream_id.clone()))?;
        self.focused = Some(stream_id.clone());
        Ok(&self.participants[index])
    }

    pub(crate) fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    pub(crate) fn set_pending_focus(&mut self, pending: PendingFocus) {
        self.pending_focus = Some(pending);
    }

    /// Take the pending focus if it is for `stream_id`.
    pub(crate) fn take_pending_focus(&mut self, stream_id: &StreamId) -> Option<PendingFocus> {
        if self.focus_on_join() == Some(stream_id) {
            self.pending_focus.take()
        } else {
            None
        }
    }

    /// Recompute the arrangement and adopt its element order.
    pub(crate) fn position_streams(&mut self) -> Arrangement {
        let focused_element = self.focused_participant().map(|p| p.element_id.clone());
        let arrangement = arrange(&self.element_order, focused_element.as_ref(), self.layout);
        self.element_order = arrangement
            .placements
            .iter()
            .map(|p| p.element_id.clone())
            .collect();
        arrangement
    }
}
