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

//! Participants and the identifiers that name them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque stream identifier assigned by the video SDK.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamId(String);

impl StreamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StreamId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StreamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of the display element that renders a participant's stream.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A video endpoint in the call: the local publisher or a subscribed remote stream.
///
/// Focus is not stored here; [`SessionState`](crate::state::SessionState) keeps
/// a single focus holder so that at most one participant can ever have it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub stream_id: StreamId,
    pub element_id: ElementId,
    pub is_local: bool,
}

impl Participant {
    /// The local publisher, rendered into the page's publisher element.
    pub fn local(stream_id: impl Into<StreamId>, element_id: impl Into<ElementId>) -> Self {
        Self {
            stream_id: stream_id.into(),
            element_id: element_id.into(),
            is_local: true,
        }
    }

    /// A remote subscriber. Its container element is named after the stream.
    pub fn remote(stream_id: impl Into<StreamId>) -> Self {
        let stream_id = stream_id.into();
        Self {
            element_id: ElementId::new(stream_id.as_str()),
            stream_id,
            is_local: false,
        }
    }
}
