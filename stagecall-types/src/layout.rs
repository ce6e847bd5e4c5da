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

//! Stream layout and archive output modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the stream elements of a call are arranged.
///
/// On the wire (form fields, signals, archive layout requests) the mode travels
/// as its layout-class label, e.g. `"verticalPresentation"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutMode {
    #[default]
    #[serde(rename = "horizontalPresentation")]
    Horizontal,
    #[serde(rename = "verticalPresentation")]
    Vertical,
}

impl LayoutMode {
    pub const HORIZONTAL_LABEL: &'static str = "horizontalPresentation";
    pub const VERTICAL_LABEL: &'static str = "verticalPresentation";

    /// The layout-class label used on the wire.
    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Horizontal => Self::HORIZONTAL_LABEL,
            LayoutMode::Vertical => Self::VERTICAL_LABEL,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Horizontal => LayoutMode::Vertical,
            LayoutMode::Vertical => LayoutMode::Horizontal,
        }
    }

    pub fn is_vertical(self) -> bool {
        self == LayoutMode::Vertical
    }

    /// Lenient parse used by the server: anything that is not the vertical
    /// label is treated as horizontal.
    pub fn from_label_or_horizontal(label: &str) -> Self {
        if label == Self::VERTICAL_LABEL {
            LayoutMode::Vertical
        } else {
            LayoutMode::Horizontal
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned by [`LayoutMode::from_str`] for labels that name no layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLayout(pub String);

impl fmt::Display for UnknownLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown layout class '{}'", self.0)
    }
}

impl std::error::Error for UnknownLayout {}

impl FromStr for LayoutMode {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::HORIZONTAL_LABEL => Ok(LayoutMode::Horizontal),
            Self::VERTICAL_LABEL => Ok(LayoutMode::Vertical),
            other => Err(UnknownLayout(other.to_string())),
        }
    }
}

/// Whether an archive records one composed file or one file per stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Composed,
    #[default]
    Individual,
}

impl OutputMode {
    pub fn label(self) -> &'static str {
        match self {
            OutputMode::Composed => "composed",
            OutputMode::Individual => "individual",
        }
    }

    /// `"composed"` selects composed output; any other value is individual.
    pub fn from_label(label: &str) -> Self {
        if label == "composed" {
            OutputMode::Composed
        } else {
            OutputMode::Individual
        }
    }
}
