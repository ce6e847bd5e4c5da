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

//! Page bootstrap configuration for a coordinator.

use serde::{Deserialize, Serialize};
use stagecall_types::{responses::PageBootstrap, LayoutMode};

use crate::error::CoordinatorError;
use crate::participant::{ElementId, StreamId};

/// Element id of the local publisher when the page does not name one.
pub const DEFAULT_PUBLISHER_ELEMENT: &str = "publisher";

/// What a page knows when it loads: the shared layout, the stream the session
/// is currently focused on, and where its own publisher renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    #[serde(default)]
    pub layout: LayoutMode,

    /// Stream to focus as soon as it is subscribed. The server sends an empty
    /// string when nothing has been focused yet.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub focus_stream_id: Option<StreamId>,

    #[serde(default = "default_publisher_element")]
    pub publisher_element_id: ElementId,
}

fn default_publisher_element() -> ElementId {
    ElementId::new(DEFAULT_PUBLISHER_ELEMENT)
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<StreamId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(StreamId::from))
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            focus_stream_id: None,
            publisher_element_id: default_publisher_element(),
        }
    }
}

impl StageConfig {
    /// Parse the bootstrap JSON embedded in a page.
    pub fn from_json(json: &str) -> Result<Self, CoordinatorError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&PageBootstrap> for StageConfig {
    fn from(bootstrap: &PageBootstrap) -> Self {
        Self {
            layout: bootstrap.layout,
            focus_stream_id: bootstrap
                .focus_stream_id
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(StreamId::from),
            publisher_element_id: default_publisher_element(),
        }
    }
}
