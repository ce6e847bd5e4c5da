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

//! Archive (server-side recording) state as seen by one page.

use serde::{Deserialize, Serialize};

use crate::error::CoordinatorError;

/// Whether the session is being recorded.
///
/// Only server-origin events move this: `archiveStarted` takes it from
/// `Absent` to `Active`, `archiveStopped` takes it back. A start or stop click
/// never changes it directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ArchiveSession {
    #[default]
    Absent,
    Active { archive_id: String },
}

impl ArchiveSession {
    pub fn is_active(&self) -> bool {
        matches!(self, ArchiveSession::Active { .. })
    }

    pub fn archive_id(&self) -> Option<&str> {
        match self {
            ArchiveSession::Active { archive_id } => Some(archive_id),
            ArchiveSession::Absent => None,
        }
    }

    /// Absent → Active on a start acknowledgment.
    pub fn start(&mut self, archive_id: &str) -> Result<(), CoordinatorError> {
        match self {
            ArchiveSession::Absent => {
                *self = ArchiveSession::Active {
                    archive_id: archive_id.to_string(),
                };
                Ok(())
            }
            ArchiveSession::Active { archive_id: current } => {
                Err(CoordinatorError::ArchiveAlreadyActive(current.clone()))
            }
        }
    }

    /// Active → Absent on a stop acknowledgment. Returns the stopped id.
    pub fn stop(&mut self) -> Result<String, CoordinatorError> {
        match std::mem::take(self) {
            ArchiveSession::Active { archive_id } => Ok(archive_id),
            ArchiveSession::Absent => Err(CoordinatorError::NoActiveArchive),
        }
    }

    pub fn controls(&self) -> RecordingControls {
        RecordingControls::for_session(self)
    }
}

/// Visibility of the start/stop buttons and state of the archive options form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingControls {
    pub start_visible: bool,
    pub stop_visible: bool,
    pub options_enabled: bool,
}

impl RecordingControls {
    pub fn for_session(session: &ArchiveSession) -> Self {
        let recording = session.is_active();
        Self {
            start_visible: !recording,
            stop_visible: recording,
            options_enabled: !recording,
        }
    }
}
