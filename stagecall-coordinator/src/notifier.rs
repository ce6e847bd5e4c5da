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

//! Best-effort notifications to the signaling server.
//!
//! Every request is spawned onto the tokio runtime and handed back as an
//! [`Outbound`]. The coordinator never waits on one; callers may drop it, or
//! await it to learn how the request went. Failures are logged either way.

use async_trait::async_trait;
use log::{debug, error};
use stagecall_client::{ApiError, StageApiClient};
use stagecall_types::{requests::StartArchiveRequest, LayoutMode};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::CoordinatorError;
use crate::participant::StreamId;

/// Requests the coordinator sends to the signaling server.
#[async_trait]
pub trait StageNotifier: Send + Sync + 'static {
    /// `POST /focus`.
    async fn notify_focus(&self, stream_id: &StreamId) -> Result<(), ApiError>;

    /// `POST /archive/{archive_id}/layout`.
    async fn notify_archive_layout(
        &self,
        archive_id: &str,
        layout: LayoutMode,
    ) -> Result<(), ApiError>;

    /// `POST /start`.
    async fn start_archive(&self, request: &StartArchiveRequest) -> Result<(), ApiError>;

    /// `GET /stop/{archive_id}`.
    async fn stop_archive(&self, archive_id: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl StageNotifier for StageApiClient {
    async fn notify_focus(&self, stream_id: &StreamId) -> Result<(), ApiError> {
        self.set_focus(stream_id.as_str()).await.map(|_| ())
    }

    async fn notify_archive_layout(
        &self,
        archive_id: &str,
        layout: LayoutMode,
    ) -> Result<(), ApiError> {
        self.set_archive_layout(archive_id, layout).await.map(|_| ())
    }

    async fn start_archive(&self, request: &StartArchiveRequest) -> Result<(), ApiError> {
        StageApiClient::start_archive(self, request).await.map(|_| ())
    }

    async fn stop_archive(&self, archive_id: &str) -> Result<(), ApiError> {
        StageApiClient::stop_archive(self, archive_id).await.map(|_| ())
    }
}

#[async_trait]
impl<N: StageNotifier + ?Sized> StageNotifier for Arc<N> {
    async fn notify_focus(&self, stream_id: &StreamId) -> Result<(), ApiError> {
        (**self).notify_focus(stream_id).await
    }

    async fn notify_archive_layout(
        &self,
        archive_id: &str,
        layout: LayoutMode,
    ) -> Result<(), ApiError> {
        (**self).notify_archive_layout(archive_id, layout).await
    }

    async fn start_archive(&self, request: &StartArchiveRequest) -> Result<(), ApiError> {
        (**self).start_archive(request).await
    }

    async fn stop_archive(&self, archive_id: &str) -> Result<(), ApiError> {
        (**self).stop_archive(archive_id).await
    }
}

/// What an outbound request was for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutboundKind {
    Focus,
    ArchiveLayout,
    ArchiveStart,
    ArchiveStop,
}

/// Handle to a spawned notification.
#[derive(Debug)]
pub struct Outbound {
    kind: OutboundKind,
    handle: Option<JoinHandle<Result<(), ApiError>>>,
}

impl Outbound {
    /// Spawn `request` on `runtime`, or on the current runtime when none is
    /// given, logging its failure under `kind`.
    ///
    /// Without any runtime the request is not sent and
    /// [`outcome`](Self::outcome) reports [`CoordinatorError::NoRuntime`].
    pub(crate) fn spawn<F>(kind: OutboundKind, runtime: Option<&Handle>, request: F) -> Self
    where
        F: Future<Output = Result<(), ApiError>> + Send + 'static,
    {
        let runtime = match runtime.cloned().or_else(|| Handle::try_current().ok()) {
            Some(runtime) => runtime,
            None => {
                error!("{kind:?} notification not sent: no tokio runtime");
                return Self { kind, handle: None };
            }
        };
        let handle = runtime.spawn(async move {
            let result = request.await;
            match &result {
                Ok(()) => debug!("{kind:?} notification acknowledged"),
                Err(e) => error!("{kind:?} notification failed: {e}"),
            }
            result
        });
        Self {
            kind,
            handle: Some(handle),
        }
    }

    pub fn kind(&self) -> OutboundKind {
        self.kind
    }

    /// Whether the request is on its way. False when there was no runtime to
    /// send it from.
    pub fn is_spawned(&self) -> bool {
        self.handle.is_some()
    }

    /// Wait for the request to finish.
    pub async fn outcome(self) -> Result<(), CoordinatorError> {
        match self.handle {
            Some(handle) => Ok(handle.await??),
            None => Err(CoordinatorError::NoRuntime),
        }
    }
}
