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

//! Framework-agnostic events a page feeds into its coordinator.
//!
//! SDK and DOM adapters translate their callbacks into [`StageEvent`]s and
//! either call the matching handler directly or push them through a
//! [`StageEventSender`] for [`StageCoordinator::pump`](crate::StageCoordinator::pump)
//! to dispatch. The coordinator also keeps a queue of its own, on which a
//! failed start request posts [`StageEvent::ArchiveStartFailed`].

use stagecall_types::requests::StartArchiveRequest;
use tokio::sync::mpsc;

use crate::participant::{Participant, StreamId};

/// Events that drive a coordinator.
#[derive(Clone, Debug, PartialEq)]
pub enum StageEvent {
    // === Session Events ===
    /// The SDK created a stream (the local publisher's or a remote one)
    StreamCreated(Participant),

    /// The SDK destroyed a stream
    StreamDestroyed(StreamId),

    /// A signal from another participant arrived
    SignalReceived { kind: String, data: String },

    /// Recording started; carries the archive id
    ArchiveStarted(String),

    /// Recording stopped
    ArchiveStopped,

    // === UI Events ===
    /// The user clicked a stream element
    FocusClicked(StreamId),

    /// The user clicked the layout toggle
    ToggleLayoutClicked,

    /// The user clicked start with the given archive options
    StartClicked(StartArchiveRequest),

    /// The user clicked stop
    StopClicked,

    // === Outbound Results ===
    /// `POST /start` failed with this message
    ArchiveStartFailed(String),
}

pub type StageEventSender = mpsc::UnboundedSender<StageEvent>;
pub type StageEventReceiver = mpsc::UnboundedReceiver<StageEvent>;

/// Create the queue a page's adapters and its coordinator share.
pub fn stage_events() -> (StageEventSender, StageEventReceiver) {
    mpsc::unbounded_channel()
}
