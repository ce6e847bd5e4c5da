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

//! Cross-platform REST client for the stagecall signaling server.
//!
//! Works on WASM (browser), desktop, and mobile targets via [`reqwest`].
//! Request bodies are form-encoded, the way a browser page posts them.
//!
//! # Example
//!
//! ```no_run
//! use stagecall_client::StageApiClient;
//! use stagecall_client::stagecall_types::LayoutMode;
//!
//! # async fn example() -> Result<(), stagecall_client::ApiError> {
//! let client = StageApiClient::new("http://localhost:8080");
//!
//! client.set_focus("stream-b").await?;
//! client.set_archive_layout("arc123", LayoutMode::Vertical).await?;
//! # Ok(())
//! # }
//! ```

pub mod archives;
pub mod error;
pub mod focus;
pub mod pages;

pub use error::ApiError;
pub use stagecall_types;

use reqwest::Client;

/// A typed REST client for the stagecall signaling server.
///
/// All methods return strongly-typed responses from
/// [`stagecall_types`] and map HTTP errors to [`ApiError`].
#[derive(Debug, Clone)]
pub struct StageApiClient {
    base_url: String,
    http: Client,
}

impl StageApiClient {
    /// Create a new client pointing at the given server base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:8080"`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Like [`new`](Self::new) but rejects base URLs reqwest cannot parse.
    pub fn try_new(base_url: &str) -> Result<Self, ApiError> {
        reqwest::Url::parse(base_url).map_err(|e| ApiError::Config(format!("{base_url}: {e}")))?;
        Ok(Self::new(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Parse a standard `APIResponse<T>` body, returning `T` on success or
/// mapping the error to [`ApiError`].
pub(crate) async fn parse_api_response<T: serde::de::DeserializeOwned + serde::Serialize>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200 | 201 => {
            let wrapper: stagecall_types::APIResponse<T> = response.json().await?;
            Ok(wrapper.result)
        }
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::ServerError { status, body: text })
        }
    }
}

/// Parse a response where we only care about the status code, not the body.
pub(crate) async fn parse_status_only(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status().as_u16();
    match status {
        200..=299 => Ok(()),
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::ServerError { status, body: text })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = StageApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/focus"), "http://localhost:8080/focus");
    }

    #[test]
    fn try_new_rejects_garbage() {
        let err = StageApiClient::try_new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
