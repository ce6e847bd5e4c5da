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

//! Archive endpoints: start, stop, layout, history, delete.

use log::debug;
use stagecall_types::{
    requests::{ArchiveLayoutRequest, StartArchiveRequest},
    responses::{ArchiveHistoryResponse, ArchiveLayoutResponse, ArchiveResponse},
    LayoutMode,
};

use crate::error::ApiError;
use crate::{parse_api_response, parse_status_only, StageApiClient};

impl StageApiClient {
    /// Start recording the session.
    ///
    /// Calls `POST /start`. The authoritative "recording" state arrives later
    /// through the session's `archiveStarted` event, not from this response.
    pub async fn start_archive(
        &self,
        request: &StartArchiveRequest,
    ) -> Result<ArchiveResponse, ApiError> {
        debug!("POST /start {request:?}");
        let response = self.post("/start").form(request).send().await?;
        parse_api_response(response).await
    }

    /// Stop a running archive.
    ///
    /// Calls `GET /stop/{archive_id}`.
    pub async fn stop_archive(&self, archive_id: &str) -> Result<ArchiveResponse, ApiError> {
        debug!("GET /stop/{archive_id}");
        let path = format!("/stop/{archive_id}");
        let response = self.get(&path).send().await?;
        parse_api_response(response).await
    }

    /// Change the composition layout of a running archive.
    ///
    /// Calls `POST /archive/{archive_id}/layout` with form field `type`.
    pub async fn set_archive_layout(
        &self,
        archive_id: &str,
        layout: LayoutMode,
    ) -> Result<ArchiveLayoutResponse, ApiError> {
        debug!("POST /archive/{archive_id}/layout {layout}");
        let path = format!("/archive/{archive_id}/layout");
        let body = ArchiveLayoutRequest::new(layout);
        let response = self.post(&path).form(&body).send().await?;
        parse_api_response(response).await
    }

    /// List archives, newest first.
    ///
    /// Calls `GET /history?page={page}`.
    pub async fn archive_history(&self, page: u32) -> Result<ArchiveHistoryResponse, ApiError> {
        let response = self
            .get("/history")
            .query(&[("page", page)])
            .send()
            .await?;
        parse_api_response(response).await
    }

    /// Delete an archive.
    ///
    /// Calls `GET /delete/{archive_id}`; the server answers with a redirect
    /// to the history page.
    pub async fn delete_archive(&self, archive_id: &str) -> Result<(), ApiError> {
        let path = format!("/delete/{archive_id}");
        let response = self.get(&path).send().await?;
        parse_status_only(response).await
    }

    /// URL that redirects to the recorded file of an archive.
    pub fn archive_download_url(&self, archive_id: &str) -> String {
        self.url(&format!("/download/{archive_id}"))
    }
}
