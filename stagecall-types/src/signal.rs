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

//! Application-level signals relayed by the video session to every participant.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutMode;

/// Signal type announcing a new focus holder; data is the stream id.
pub const FOCUS_STREAM: &str = "focusStream";

/// Signal type announcing a new layout; data is the layout-class label.
pub const LAYOUT_CLASS: &str = "layoutClass";

/// A typed view over the `(type, data)` pairs carried by session signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageSignal {
    FocusStream(String),
    LayoutClass(LayoutMode),
}

impl StageSignal {
    /// The signal `type` string.
    pub fn kind(&self) -> &'static str {
        match self {
            StageSignal::FocusStream(_) => FOCUS_STREAM,
            StageSignal::LayoutClass(_) => LAYOUT_CLASS,
        }
    }

    /// The signal `data` string.
    pub fn data(&self) -> String {
        match self {
            StageSignal::FocusStream(stream_id) => stream_id.clone(),
            StageSignal::LayoutClass(layout) => layout.label().to_string(),
        }
    }

    /// Interpret a received signal. Returns `None` for types this crate does
    /// not define and for layout labels that name no layout.
    pub fn parse(kind: &str, data: &str) -> Option<Self> {
        match kind {
            FOCUS_STREAM => Some(StageSignal::FocusStream(data.to_string())),
            LAYOUT_CLASS => data.parse().ok().map(StageSignal::LayoutClass),
            _ => None,
        }
    }
}
