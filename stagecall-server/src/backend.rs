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

//! The video platform seam: archives and per-stream layout classes.
//!
//! Handlers only talk to [`ArchiveBackend`]. [`InMemoryBackend`] keeps
//! everything in process and follows the platform's rules closely enough
//! for development and tests.

use async_trait::async_trait;
use stagecall_types::{
    responses::{ArchiveResponse, ArchiveStatus},
    LayoutMode, OutputMode,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Errors reported by the video platform.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("archive {0} not found")]
    NotFound(String),

    /// The platform refused the call; the message is its own.
    #[error("{0}")]
    Rejected(String),
}

/// Options for a new archive.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveProperties {
    pub name: String,
    pub has_audio: bool,
    pub has_video: bool,
    pub output_mode: OutputMode,
    /// Only meaningful for composed archives.
    pub layout: Option<LayoutMode>,
}

/// Layout classes to assign to one stream.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamLayout {
    pub stream_id: String,
    pub layout_classes: Vec<String>,
}

#[async_trait]
pub trait ArchiveBackend: Send + Sync + 'static {
    async fn start_archive(
        &self,
        session_id: &str,
        properties: ArchiveProperties,
    ) -> Result<ArchiveResponse, BackendError>;

    async fn stop_archive(&self, archive_id: &str) -> Result<ArchiveResponse, BackendError>;

    async fn get_archive(&self, archive_id: &str) -> Result<ArchiveResponse, BackendError>;

    /// Newest first.
    async fn list_archives(
        &self,
        offset: usize,
        count: usize,
    ) -> Result<Vec<ArchiveResponse>, BackendError>;

    async fn delete_archive(&self, archive_id: &str) -> Result<(), BackendError>;

    async fn set_archive_layout(
        &self,
        archive_id: &str,
        layout: LayoutMode,
    ) -> Result<(), BackendError>;

    async fn set_stream_layouts(
        &self,
        session_id: &str,
        streams: &[StreamLayout],
    ) -> Result<(), BackendError>;
}

#[derive(Debug, Default)]
struct Inner {
    /// Oldest first.
    archives: Vec<ArchiveResponse>,
    stream_classes: HashMap<String, Vec<String>>,
}

/// Process-local [`ArchiveBackend`].
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    base_url: String,
    inner: Mutex<Inner>,
}

impl InMemoryBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Layout classes last assigned to `stream_id`.
    pub fn stream_layout_classes(&self, stream_id: &str) -> Option<Vec<String>> {
        self.lock().stream_classes.get(stream_id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[async_trait]
impl ArchiveBackend for InMemoryBackend {
    async fn start_archive(
        &self,
        session_id: &str,
        properties: ArchiveProperties,
    ) -> Result<ArchiveResponse, BackendError> {
        if !properties.has_audio && !properties.has_video {
            return Err(BackendError::Rejected(
                "An archive must record audio, video or both".to_string(),
            ));
        }
        let mut inner = self.lock();
        if inner
            .archives
            .iter()
            .any(|a| a.session_id == session_id && a.status == ArchiveStatus::Started)
        {
            return Err(BackendError::Rejected(format!(
                "Session {session_id} is already being recorded"
            )));
        }
        let layout = match properties.output_mode {
            OutputMode::Composed => properties.layout.or(Some(LayoutMode::Horizontal)),
            OutputMode::Individual => None,
        };
        let archive = ArchiveResponse {
            id: uuid::Uuid::new_v4().to_string(),
            name: properties.name,
            session_id: session_id.to_string(),
            status: ArchiveStatus::Started,
            output_mode: properties.output_mode,
            has_audio: properties.has_audio,
            has_video: properties.has_video,
            layout,
            created_at: now_millis(),
            duration: 0,
            url: None,
        };
        inner.archives.push(archive.clone());
        Ok(archive)
    }

    async fn stop_archive(&self, archive_id: &str) -> Result<ArchiveResponse, BackendError> {
        let base_url = self.base_url.clone();
        let mut inner = self.lock();
        let archive = inner
            .archives
            .iter_mut()
            .find(|a| a.id == archive_id)
            .ok_or_else(|| BackendError::NotFound(archive_id.to_string()))?;
        if archive.status != ArchiveStatus::Started {
            return Err(BackendError::Rejected(format!(
                "Archive {archive_id} is not being recorded"
            )));
        }
        archive.status = ArchiveStatus::Available;
        archive.duration = (now_millis() - archive.created_at).max(0) / 1000;
        archive.url = Some(format!("{base_url}/{archive_id}.mp4"));
        Ok(archive.clone())
    }

    async fn get_archive(&self, archive_id: &str) -> Result<ArchiveResponse, BackendError> {
        self.lock()
            .archives
            .iter()
            .find(|a| a.id == archive_id)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(archive_id.to_string()))
    }

    async fn list_archives(
        &self,
        offset: usize,
        count: usize,
    ) -> Result<Vec<ArchiveResponse>, BackendError> {
        Ok(self
            .lock()
            .archives
            .iter()
            .rev()
            .skip(offset)
            .take(count)
            .cloned()
            .collect())
    }

    async fn delete_archive(&self, archive_id: &str) -> Result<(), BackendError> {
        let mut inner = self.lock();
        let index = inner
            .archives
            .iter()
            .position(|a| a.id == archive_id)
            .ok_or_else(|| BackendError::NotFound(archive_id.to_string()))?;
        if inner.archives[index].status == ArchiveStatus::Started {
            return Err(BackendError::Rejected(format!(
                "Archive {archive_id} must be stopped before it is deleted"
            )));
        }
        inner.archives.remove(index);
        Ok(())
    }

    async fn set_archive_layout(
        &self,
        archive_id: &str,
        layout: LayoutMode,
    ) -> Result<(), BackendError> {
        let mut inner = self.lock();
        let archive = inner
            .archives
            .iter_mut()
            .find(|a| a.id == archive_id)
            .ok_or_else(|| BackendError::NotFound(archive_id.to_string()))?;
        if archive.status != ArchiveStatus::Started || archive.output_mode != OutputMode::Composed
        {
            return Err(BackendError::Rejected(format!(
                "Archive {archive_id} is not a running composed archive"
            )));
        }
        archive.layout = Some(layout);
        Ok(())
    }

    async fn set_stream_layouts(
        &self,
        _session_id: &str,
        streams: &[StreamLayout],
    ) -> Result<(), BackendError> {
        let mut inner = self.lock();
        for stream in streams {
            inner
                .stream_classes
                .insert(stream.stream_id.clone(), stream.layout_classes.clone());
        }
        Ok(())
    }
}
