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

//! Error types for the signaling server client.

use thiserror::Error;

/// Errors returned by [`StageApiClient`](crate::StageApiClient) methods.
///
/// Display output carries the server's response body unmodified so callers can
/// log exactly what the failing call reported.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested resource was not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A server error with status code and body.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A configuration error (e.g. unparsable base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}
