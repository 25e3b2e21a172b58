//! Incremental relayout for interactive moves.
//!
//! When the user drops a dragged item, the engine has to find a valid placement near
//! the requested one without recomputing the whole layout. Placement strategies are
//! tried in order, from least to most disruptive:
//!
//! 1. Accept the requested lane and dates if they are conflict-free.
//! 2. Snap into a gap of the target lane that the requested interval reaches into.
//! 3. Probe outward from the target lane for the nearest empty lane.
//! 4. Scan every lane for one without conflicts at the requested dates.
//! 5. Place the item anyway at an over-capacity lane index, flagged as a warning.
//!
//! The fallback means a move never hard-fails: with more mutually conflicting items
//! than visible lanes, the layout degrades to visual overlap and the caller surfaces
//! a warning instead of aborting the operation.

use chrono::{Days, NaiveDate};
use tracing::warn;

use crate::conflict::conflict_count;
use crate::types::{LayoutError, RepositionRequest, RepositionResult, Strategy, TimelineItem};
use crate::Options;

/// Resolves one interactive move against the current snapshot.
///
/// The snapshot must contain the moved item; its `lane` fields describe the current
/// occupancy that placement is resolved against. The caller merges the returned
/// `{lane, start, end}` back into its snapshot and schedules a full
/// [`assign_lanes`](crate::assign_lanes) pass for global consistency later.
pub fn reposition(
    request: &RepositionRequest,
    snapshot: &[TimelineItem],
    options: &Options,
) -> Result<RepositionResult, LayoutError> {
    if !snapshot.iter().any(|item| item.id == request.item_id) {
        return Err(LayoutError::ItemNotFound(request.item_id.clone()));
    }
    if request.end <= request.start {
        return Err(LayoutError::InvalidInterval {
            id: request.item_id.clone(),
            start: request.start,
            end: request.end,
        });
    }

    let duration = (request.end - request.start).num_days() as u64;
    let others: Vec<&TimelineItem> = snapshot
        .iter()
        .filter(|item| item.id != request.item_id)
        .collect();
    let lane_items = |lane: usize| {
        others
            .iter()
            .copied()
            .filter(move |item| item.lane == Some(lane))
    };

    // 1. No conflict at the requested placement.
    if conflict_count(request.start, request.end, lane_items(request.target_lane)) == 0 {
        return Ok(place(request.target_lane, request.start, request.end, Strategy::Direct));
    }

    // 2. A gap in the target lane with enough room.
    if let Some((start, end)) = find_gap(
        request.start,
        request.end,
        duration,
        lane_items(request.target_lane),
        options.min_gap_days,
    ) {
        return Ok(place(request.target_lane, start, end, Strategy::SameLaneGap));
    }

    let max_lanes = options.max_visible_lanes;

    // 3. Nearest empty lane, probing outward from the target.
    for offset in 1..=max_lanes {
        let below = request
            .target_lane
            .checked_sub(offset)
            .filter(|&lane| lane < max_lanes);
        let above = request
            .target_lane
            .checked_add(offset)
            .filter(|&lane| lane < max_lanes);
        for lane in below.into_iter().chain(above) {
            if lane_items(lane).next().is_none() {
                return Ok(place(lane, request.start, request.end, Strategy::NearestEmpty));
            }
        }
    }

    // 4. Any lane without conflicts at the requested dates.
    for lane in 0..max_lanes {
        if conflict_count(request.start, request.end, lane_items(lane)) == 0 {
            return Ok(place(lane, request.start, request.end, Strategy::ExhaustiveScan));
        }
    }

    // 5. Over-capacity fallback. A soft failure: the placement may still conflict, and
    // the caller is expected to surface a warning rather than abort.
    let lane = others.len().min(max_lanes.saturating_sub(1));
    warn!(
        id = %request.item_id,
        lane,
        "no conflict-free lane available; falling back to over-capacity placement"
    );
    Ok(RepositionResult {
        lane,
        start: request.start,
        end: request.end,
        strategy: Strategy::Fallback,
        warning: true,
    })
}

fn place(lane: usize, start: NaiveDate, end: NaiveDate, strategy: Strategy) -> RepositionResult {
    RepositionResult {
        lane,
        start,
        end,
        strategy,
        warning: false,
    }
}

/// Searches the target lane for a gap that can host the moved item.
///
/// Candidates are the space before the first item, each inter-item gap, and the space
/// after the last item, in that order. A gap only participates if the requested
/// interval reaches into it; a drop buried entirely inside another item touches no gap
/// and falls through to the lane-probing strategies instead of teleporting the item to
/// an unrelated free stretch of the lane.
///
/// A successful placement snaps the new start to the left neighbor's end plus
/// `min_gap_days` and keeps the requested duration. The right edge only needs plain
/// half-open non-overlap, since adjacency is not a conflict.
fn find_gap<'a>(
    requested_start: NaiveDate,
    requested_end: NaiveDate,
    duration: u64,
    lane_items: impl Iterator<Item = &'a TimelineItem>,
    min_gap_days: u64,
) -> Option<(NaiveDate, NaiveDate)> {
    let mut items: Vec<&TimelineItem> = lane_items.collect();
    items.sort_by_key(|item| item.start);

    // Gap bounds; `None` is unbounded.
    let mut gaps: Vec<(Option<NaiveDate>, Option<NaiveDate>)> = Vec::new();
    gaps.push((None, items.first().map(|item| item.start)));
    for pair in items.windows(2) {
        gaps.push((Some(pair[0].end), Some(pair[1].start)));
    }
    if let Some(last) = items.last() {
        gaps.push((Some(last.end), None));
    }

    for (left_end, right_start) in gaps {
        let touches = left_end.map_or(true, |d| d < requested_end)
            && right_start.map_or(true, |d| requested_start < d);
        if !touches {
            continue;
        }

        let start = match left_end {
            Some(end) => end + Days::new(min_gap_days),
            None => requested_start,
        };
        let end = start + Days::new(duration);
        if right_start.map_or(true, |d| end <= d) {
            return Some((start, end));
        }
    }

    None
}
