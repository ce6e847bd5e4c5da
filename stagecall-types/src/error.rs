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

//! API error types.
//!
//! Every failed API response is returned as `APIResponse<APIError>` with `success: false`.

use serde::{Deserialize, Serialize};

/// Structured error returned in the `result` field of a failed [`super::APIResponse`].
///
/// The `code` field is a machine-readable identifier (e.g. `"ARCHIVE_NOT_FOUND"`).
/// The `message` field is the message of the failing call, passed through unmodified
/// where one exists.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct APIError {
    /// Machine-readable error code (e.g. `"BACKEND_ERROR"`, `"ARCHIVE_NOT_FOUND"`).
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// Optional engineering-level detail for debugging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engineering_error: Option<String>,
}

impl APIError {
    pub fn archive_not_found(archive_id: &str) -> Self {
        Self {
            code: "ARCHIVE_NOT_FOUND".to_string(),
            message: format!("Archive '{archive_id}' not found"),
            engineering_error: None,
        }
    }

    pub fn invalid_request(detail: &str) -> Self {
        Self {
            code: "INVALID_REQUEST".to_string(),
            message: detail.to_string(),
            engineering_error: None,
        }
    }

    /// The video platform rejected the call; `message` is its error text verbatim.
    pub fn backend_error(message: &str) -> Self {
        Self {
            code: "BACKEND_ERROR".to_string(),
            message: message.to_string(),
            engineering_error: None,
        }
    }
}

impl std::fmt::Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for APIError {}
