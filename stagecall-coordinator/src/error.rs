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

//! Error types for the focus/layout coordinator.

use stagecall_client::ApiError;
use thiserror::Error;

use crate::participant::StreamId;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// The stream id names no participant known to this page.
    #[error("unknown participant: {0}")]
    UnknownParticipant(StreamId),

    /// A stream-created event arrived twice for the same stream.
    #[error("participant already registered: {0}")]
    DuplicateParticipant(StreamId),

    #[error("archive {0} is already active")]
    ArchiveAlreadyActive(String),

    #[error("no archive is active")]
    NoActiveArchive,

    /// An outbound notification to the signaling server failed.
    #[error(transparent)]
    Notification(#[from] ApiError),

    /// There was no tokio runtime to send an outbound notification from.
    #[error("no tokio runtime to send the notification from")]
    NoRuntime,

    /// An outbound notification task panicked or was aborted.
    #[error("notification task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("invalid stage config: {0}")]
    Config(#[from] serde_json::Error),
}
