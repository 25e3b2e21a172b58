//! Bulk lane assignment.
//!
//! A from-scratch layout of a full item snapshot: stable-sort by start date, then
//! greedy first-fit into the lowest conflict-free lane. The pass is order-dependent
//! but deterministic, and runs in O(N·L) with L ≤ N lanes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::conflict::{conflict_count, overlaps};
use crate::types::{LayoutResult, SkippedItem, TimelineItem};

/// Partitions a snapshot of items into non-overlapping lanes.
///
/// Items are processed in order of ascending start date, ties preserving input order.
/// An item that already carries a lane index is placed into that lane directly, growing
/// the lane sequence with empty lanes as needed. No conflict check is performed for
/// these placements: lanes set by a previous layout or reposition pass are already
/// valid, and re-checking them here would shuffle manually arranged items on every
/// render. Callers holding hints from a less trustworthy source can run [`verify`]
/// over the result instead.
///
/// A malformed item (empty or inverted interval) is skipped and reported in
/// [`LayoutResult::skipped`]; it never aborts layout of the rest of the batch.
pub fn assign_lanes(items: &[TimelineItem]) -> LayoutResult {
    let mut sorted: Vec<&TimelineItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.start);

    let mut lanes: Vec<Vec<TimelineItem>> = Vec::new();
    let mut skipped = Vec::new();

    for item in sorted {
        if let Err(reason) = item.check_interval() {
            warn!(id = %item.id, %reason, "skipping item during lane assignment");
            skipped.push(SkippedItem {
                id: item.id.clone(),
                reason,
            });
            continue;
        }

        if let Some(hint) = item.lane {
            if lanes.len() <= hint {
                lanes.resize_with(hint + 1, Vec::new);
            }
            lanes[hint].push(item.clone());
            continue;
        }

        match lanes
            .iter_mut()
            .find(|lane| conflict_count(item.start, item.end, lane.iter()) == 0)
        {
            Some(lane) => lane.push(item.clone()),
            None => lanes.push(vec![item.clone()]),
        }
    }

    let total_rows = lanes.len();
    LayoutResult {
        lanes,
        total_rows,
        skipped,
    }
}

/// An intra-lane overlap found by [`verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneConflict {
    /// Lane holding the overlapping pair.
    pub lane: usize,
    /// Id of the earlier item in lane order.
    pub first: String,
    /// Id of the later item in lane order.
    pub second: String,
}

/// Reports every pair of overlapping items sharing a lane.
///
/// [`assign_lanes`] trusts lane hints without checking them, so a snapshot with stale
/// or hand-edited hints can produce a layout where items visually overlap. This pass
/// makes that explicit: an empty result certifies the non-overlap invariant for the
/// whole layout.
pub fn verify(layout: &LayoutResult) -> Vec<LaneConflict> {
    let mut conflicts = Vec::new();
    for (lane_idx, lane) in layout.lanes.iter().enumerate() {
        for (i, a) in lane.iter().enumerate() {
            for b in &lane[i + 1..] {
                if overlaps(a, b) {
                    conflicts.push(LaneConflict {
                        lane: lane_idx,
                        first: a.id.clone(),
                        second: b.id.clone(),
                    });
                }
            }
        }
    }
    conflicts
}
