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

//! Response types for the signaling server.
//!
//! JSON endpoints return an [`APIResponse<T>`] envelope:
//! - On success: `{ "success": true,  "result": <T> }`
//! - On failure: `{ "success": false, "result": <APIError> }`

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutMode, OutputMode};

// ---------------------------------------------------------------------------
// Generic envelope
// ---------------------------------------------------------------------------

/// Top-level API response envelope.
///
/// # Success example
///
/// ```json
/// { "success": true, "result": { "focus": "stream-b" } }
/// ```
///
/// # Error example
///
/// ```json
/// { "success": false, "result": { "code": "ARCHIVE_NOT_FOUND", "message": "..." } }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIResponse<A: Serialize> {
    pub success: bool,
    pub result: A,
}

impl<A: Serialize> APIResponse<A> {
    /// Wrap a successful result.
    pub fn ok(result: A) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

impl APIResponse<crate::error::APIError> {
    /// Wrap an error result.
    pub fn error(err: crate::error::APIError) -> Self {
        Self {
            success: false,
            result: err,
        }
    }
}

// ---------------------------------------------------------------------------
// Endpoint-specific response payloads
// ---------------------------------------------------------------------------

/// Lifecycle state of an archive as reported by the video platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveStatus {
    Started,
    Stopped,
    Available,
}

/// An archive (server-side recording) of the session.
///
/// Returned by `POST /start`, `GET /stop/{archive_id}` and listed by `GET /history`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArchiveResponse {
    pub id: String,
    pub name: String,
    pub session_id: String,
    pub status: ArchiveStatus,
    pub output_mode: OutputMode,
    pub has_audio: bool,
    pub has_video: bool,
    /// Composition layout. Only composed archives have one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutMode>,
    /// Unix timestamp in milliseconds when the archive was started.
    pub created_at: i64,
    /// Recording length in seconds, known once the archive is stopped.
    pub duration: i64,
    /// Download location, known once the archive is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Response payload for `POST /focus`: the focus the server now holds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FocusResponse {
    pub focus: String,
}

/// Response payload for `POST /archive/{archive_id}/layout`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArchiveLayoutResponse {
    pub archive_id: String,
    pub layout: LayoutMode,
}

/// Response payload for `GET /history`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArchiveHistoryResponse {
    pub archives: Vec<ArchiveResponse>,
    pub page: u32,
    /// Link to the previous page, absent on the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_previous: Option<String>,
    /// Link to the next page. The platform reports no total, so this is always offered.
    pub show_next: String,
}

/// Which page a participant loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageRole {
    Host,
    Participant,
}

/// Response payload for `GET /host` and `GET /participant`: what a page needs
/// to join the session with the current shared focus and layout.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PageBootstrap {
    pub session_id: String,
    pub role: PageRole,
    pub layout: LayoutMode,
    /// Stream the page should focus once it is subscribed, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_stream_id: Option<String>,
}
