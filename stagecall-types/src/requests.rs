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

//! Request types for the signaling server.
//!
//! Bodies are form-encoded, matching what a browser page posts. They are used
//! by both the server (for deserialization) and clients (for serialization).

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutMode, OutputMode};

/// Request body for `POST /focus`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FocusRequest {
    /// Stream identifier of the new focus holder.
    pub focus: String,
}

/// Request body for `POST /start`.
///
/// Checkbox semantics: `hasAudio` / `hasVideo` enable the track when present,
/// whatever their value.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct StartArchiveRequest {
    #[serde(rename = "hasAudio", default, skip_serializing_if = "Option::is_none")]
    pub has_audio: Option<String>,

    #[serde(rename = "hasVideo", default, skip_serializing_if = "Option::is_none")]
    pub has_video: Option<String>,

    #[serde(rename = "outputMode", default)]
    pub output_mode: String,
}

impl StartArchiveRequest {
    pub fn new(has_audio: bool, has_video: bool, output_mode: OutputMode) -> Self {
        let checked = |on: bool| on.then(|| "on".to_string());
        Self {
            has_audio: checked(has_audio),
            has_video: checked(has_video),
            output_mode: output_mode.label().to_string(),
        }
    }

    pub fn audio_enabled(&self) -> bool {
        self.has_audio.is_some()
    }

    pub fn video_enabled(&self) -> bool {
        self.has_video.is_some()
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_label(&self.output_mode)
    }
}

/// Request body for `POST /archive/{archive_id}/layout`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArchiveLayoutRequest {
    /// Layout-class label. Unrecognised labels are treated as horizontal.
    #[serde(rename = "type")]
    pub layout_type: String,
}

impl ArchiveLayoutRequest {
    pub fn new(layout: LayoutMode) -> Self {
        Self {
            layout_type: layout.label().to_string(),
        }
    }

    pub fn layout(&self) -> LayoutMode {
        LayoutMode::from_label_or_horizontal(&self.layout_type)
    }
}

/// Query parameters for `GET /history`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct HistoryQuery {
    /// 1-based page number. Missing or unparsable values mean page 1.
    #[serde(default)]
    pub page: Option<String>,
}

impl HistoryQuery {
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.parse::<u32>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_request_form_omits_unchecked_tracks() {
        let req = StartArchiveRequest::new(true, false, OutputMode::Composed);
        let encoded = serde_urlencoded::to_string(&req).unwrap();
        assert_eq!(encoded, "hasAudio=on&outputMode=composed");
    }

    #[test]
    fn start_request_presence_means_enabled() {
        let req: StartArchiveRequest =
            serde_urlencoded::from_str("hasVideo=&outputMode=individual").unwrap();
        assert!(!req.audio_enabled());
        assert!(req.video_enabled());
        assert_eq!(req.output_mode(), OutputMode::Individual);
    }

    #[test]
    fn layout_request_uses_type_field() {
        let req = ArchiveLayoutRequest::new(LayoutMode::Vertical);
        assert_eq!(
            serde_urlencoded::to_string(&req).unwrap(),
            "type=verticalPresentation"
        );
    }

    #[test]
    fn history_page_falls_back_to_first() {
        let q = |p: Option<&str>| HistoryQuery {
            page: p.map(str::to_string),
        };
        assert_eq!(q(None).page(), 1);
        assert_eq!(q(Some("abc")).page(), 1);
        assert_eq!(q(Some("0")).page(), 1);
        assert_eq!(q(Some("3")).page(), 3);
    }
}
