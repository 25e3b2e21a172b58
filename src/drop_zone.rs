//! Drag-target lane derivation.

use serde::{Deserialize, Serialize};

use crate::types::LayoutResult;
use crate::Options;

/// A lane index offered as a destination during an interactive move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropZone {
    pub lane: usize,
    /// Whether the lane holds no items in the current layout.
    pub empty: bool,
}

/// Lane slots to present as interactive drag targets.
///
/// The occupied lanes of the layout, padded with empty lanes up to the larger of the
/// configured minimum and the visible maximum, so the user always has somewhere free
/// to drop. Purely presentational; this never mutates item data.
pub fn drop_zones(layout: &LayoutResult, options: &Options) -> Vec<DropZone> {
    let occupied = layout.total_rows;
    let count = occupied
        .max(options.min_lane_count)
        .max(options.max_visible_lanes);
    (0..count)
        .map(|lane| DropZone {
            lane,
            empty: lane >= occupied,
        })
        .collect()
}
