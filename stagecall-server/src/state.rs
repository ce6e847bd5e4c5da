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

//! Shared application state passed to every Axum handler via `State`.

use stagecall_types::LayoutMode;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::backend::ArchiveBackend;
use crate::config::Config;

/// The focus and layout every newly loading page starts from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageSnapshot {
    /// Empty until a page reports its first focus.
    pub focus_stream_id: String,
    pub layout: LayoutMode,
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Video platform.
    pub backend: Arc<dyn ArchiveBackend>,
    /// Session every page joins.
    pub session_id: String,
    /// Name given to started archives.
    pub archive_name: String,
    /// Archives per history page.
    pub history_page_size: usize,
    /// Held across backend calls so focus changes apply one at a time.
    pub stage: Arc<Mutex<StageSnapshot>>,
}

impl AppState {
    pub fn new(backend: Arc<dyn ArchiveBackend>, config: &Config) -> Self {
        Self {
            backend,
            session_id: config.session_id.clone(),
            archive_name: config.archive_name.clone(),
            history_page_size: config.history_page_size,
            stage: Arc::new(Mutex::new(StageSnapshot::default())),
        }
    }
}
