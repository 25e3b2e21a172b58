//! Lane layout for roadmap timelines.
//!
//! A timeline view shows projects as horizontal bars. Two projects whose date ranges
//! overlap cannot share a horizontal track, so the view partitions items into *lanes*:
//! display tracks whose items are pairwise non-overlapping in time. This is the classic
//! interval-partitioning problem, except that the layout is interactive: the user can
//! drag a bar to a new lane or date range, and the engine must then find a valid
//! placement that disturbs the rest of the layout as little as possible.
//!
//! I chose a greedy first-fit heuristic over an optimal interval-graph coloring because
//! the layout has to stay put. An optimal solver is free to reshuffle every lane when a
//! single item changes, which makes the view jump around under the user's pointer. The
//! greedy pass is order-dependent but deterministic: a fixed input order always yields
//! the same lanes, and a single-item move is resolved incrementally without touching
//! anything else.
//!
//! Where possible, the engine tries to follow these principles:
//!
//! 1. Re-running a layout over an unchanged snapshot must not change anything.
//! 2. An interactive move disturbs only the moved item; the caller merges the result
//!    back and schedules a full layout pass for global consistency later.
//! 3. A move never hard-fails. When every lane conflicts, the fallback placement
//!    returns an over-capacity lane with a warning flag and lets the caller decide
//!    what to surface.
//!
//! Everything here is a pure, synchronous function over an item snapshot. Rendering,
//! date-to-pixel mapping, persistence, and input handling live in the caller; the
//! [`drag`] module only provides the state machine that sequences one move from
//! pointer-down to pointer-up.
//!
//! Intervals are half-open: an item's end date is exclusive, so an item ending on day D
//! and one starting on day D share a lane without conflict.

use serde::{Deserialize, Serialize};

pub mod assign;
pub mod conflict;
pub mod drag;
pub mod drop_zone;
pub mod reposition;
pub mod types;

pub use self::assign::{assign_lanes, verify, LaneConflict};
pub use self::conflict::{conflict_count, overlaps};
pub use self::drag::{DragCommitError, DragOrigin, DragSession, DragState};
pub use self::drop_zone::{drop_zones, DropZone};
pub use self::reposition::reposition;
pub use self::types::{
    LayoutError, LayoutResult, RepositionRequest, RepositionResult, SkippedItem, Strategy,
    TimelineItem,
};


/// Lanes always offered as drag targets, even on an empty timeline.
pub const DEFAULT_MIN_LANE_COUNT: usize = 3;

/// Upper bound on lanes an interactive move may target.
pub const DEFAULT_MAX_VISIBLE_LANES: usize = 8;

/// Buffer inserted between a snapped placement and its left neighbor.
pub const DEFAULT_MIN_GAP_DAYS: u64 = 1;

/// Caller-supplied layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Minimum number of lane slots to present as drag targets.
    pub min_lane_count: usize,
    /// Maximum number of lanes considered by an interactive move.
    pub max_visible_lanes: usize,
    /// Days of buffer between a snapped item and the item it lands after.
    pub min_gap_days: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_lane_count: DEFAULT_MIN_LANE_COUNT,
            max_visible_lanes: DEFAULT_MAX_VISIBLE_LANES,
            min_gap_days: DEFAULT_MIN_GAP_DAYS,
        }
    }
}
