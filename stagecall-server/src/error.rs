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

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as `APIResponse<APIError>` with `success: false`,
//! paired with the appropriate HTTP status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use stagecall_types::{APIError, APIResponse};

use crate::backend::BackendError;

/// Application-level error that pairs an HTTP status code with an [`APIError`].
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: APIError,
}

impl AppError {
    pub fn new(status: StatusCode, body: APIError) -> Self {
        Self { status, body }
    }

    pub fn archive_not_found(archive_id: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            APIError::archive_not_found(archive_id),
        )
    }

    /// The platform refused the call. Answered with 400 and its message verbatim.
    pub fn backend(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, APIError::backend_error(message))
    }

    pub fn invalid_request(detail: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, APIError::invalid_request(detail))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = APIResponse::error(self.body);
        (self.status, Json(body)).into_response()
    }
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        tracing::error!("Backend error: {err}");
        match err {
            BackendError::NotFound(archive_id) => Self::archive_not_found(&archive_id),
            BackendError::Rejected(message) => Self::backend(&message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;

    /// Consume the response body and deserialize it to `APIResponse<APIError>`.
    async fn read_error_body(resp: Response) -> (StatusCode, APIResponse<APIError>) {
        let status = resp.status();
        let bytes = Body::new(resp.into_body())
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        let parsed: APIResponse<APIError> =
            serde_json::from_slice(&bytes).expect("deserialize error body");
        (status, parsed)
    }

    #[tokio::test]
    async fn not_found_backend_error_produces_404() {
        let err: AppError = BackendError::NotFound("arc1".to_string()).into();
        let (status, body) = read_error_body(err.into_response()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
        assert_eq!(body.result.code, "ARCHIVE_NOT_FOUND");
    }

    #[tokio::test]
    async fn rejection_keeps_platform_message() {
        let err: AppError = BackendError::Rejected("Archive is not started".to_string()).into();
        let (status, body) = read_error_body(err.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.result.code, "BACKEND_ERROR");
        assert_eq!(body.result.message, "Archive is not started");
    }
}
