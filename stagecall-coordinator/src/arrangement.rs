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

//! Stream arrangement: where each element sits for a given layout and focus.
//!
//! This is the pure half of `position_streams`. [`arrange`] takes the current
//! element order and returns the new order plus a top offset per element; it
//! does not look at anything else, so running it on its own output is a no-op.

use serde::{Deserialize, Serialize};
use stagecall_types::LayoutMode;

use crate::participant::ElementId;

/// Vertical offset, in percent, between neighbouring elements in vertical mode.
pub const VERTICAL_STEP_PERCENT: i32 = 20;

/// Position of one element inside the stream container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub element_id: ElementId,
    /// CSS `top` offset in percent.
    pub top_percent: i32,
}

/// Ordered placements for every element in the stream container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrangement {
    pub layout: LayoutMode,
    pub placements: Vec<Placement>,
}

impl Arrangement {
    /// Element ids in container order.
    pub fn order(&self) -> Vec<&ElementId> {
        self.placements.iter().map(|p| &p.element_id).collect()
    }

    pub fn placement(&self, element_id: &ElementId) -> Option<&Placement> {
        self.placements.iter().find(|p| &p.element_id == element_id)
    }

    /// Index of the element in container order.
    pub fn index_of(&self, element_id: &ElementId) -> Option<usize> {
        self.placements
            .iter()
            .position(|p| &p.element_id == element_id)
    }
}

/// Arrange `order` for `layout` around the focused element.
///
/// Vertical: every offset is reset to zero, then the focused element moves to
/// the end of the order and is lifted by [`VERTICAL_STEP_PERCENT`] per element
/// before it, so it renders on top. Horizontal: the focused element moves to
/// the front with zero offset.
///
/// A focused id that is not in `order` is treated as no focus.
pub fn arrange(order: &[ElementId], focused: Option<&ElementId>, layout: LayoutMode) -> Arrangement {
    let mut ids: Vec<ElementId> = order.to_vec();
    let focus_index = focused.and_then(|f| ids.iter().position(|id| id == f));

    let mut focus_top = 0;
    if let Some(index) = focus_index {
        let element = ids.remove(index);
        match layout {
            LayoutMode::Vertical => {
                ids.push(element);
                focus_top = -VERTICAL_STEP_PERCENT * (ids.len() as i32 - 1);
            }
            LayoutMode::Horizontal => ids.insert(0, element),
        }
    }

    let placements = ids
        .into_iter()
        .map(|element_id| {
            let top_percent = if Some(&element_id) == focused {
                focus_top
            } else {
                0
            };
            Placement {
                element_id,
                top_percent,
            }
        })
        .collect();

    Arrangement { layout, placements }
}
