//! Shared types used across the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A time-interval item placed on the timeline.
///
/// The item is owned by the caller; the engine only ever sees snapshots. `end` is
/// exclusive for overlap purposes, so `[start, end)` is the occupied range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Opaque unique identifier.
    pub id: String,
    /// First occupied day.
    pub start: NaiveDate,
    /// First day past the occupied range.
    pub end: NaiveDate,
    /// Lane the item currently sits in, if the caller has placed it.
    ///
    /// During bulk assignment this acts as a hint that is trusted without a conflict
    /// check; see [`assign_lanes`](crate::assign_lanes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane: Option<usize>,
}

impl TimelineItem {
    pub fn new(id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            lane: None,
        }
    }

    pub fn with_lane(mut self, lane: usize) -> Self {
        self.lane = Some(lane);
        self
    }

    /// Duration in whole days.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Rejects zero- and negative-duration intervals.
    ///
    /// Gap sizing and duration math assume `end > start`, so such items are refused at
    /// the boundary rather than silently normalized.
    pub(crate) fn check_interval(&self) -> Result<(), LayoutError> {
        if self.end <= self.start {
            return Err(LayoutError::InvalidInterval {
                id: self.id.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// An item that bulk assignment refused to place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedItem {
    pub id: String,
    pub reason: LayoutError,
}

/// Full lane partition of an item snapshot.
///
/// Recomputed fresh on demand; a pure function of the snapshot and its order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Lanes in display order; each holds its items ordered by start date.
    pub lanes: Vec<Vec<TimelineItem>>,
    /// Number of lanes, including empty ones left by out-of-range hints.
    pub total_rows: usize,
    /// Items skipped during assignment, with the reason for each.
    ///
    /// One malformed item never aborts layout of the rest of the batch.
    pub skipped: Vec<SkippedItem>,
}

impl LayoutResult {
    /// Flattens the partition back into items with their lane indices filled in.
    ///
    /// This is the snapshot shape that [`reposition`](crate::reposition) expects, so
    /// callers that don't keep their own item store can round-trip through this.
    pub fn placed_items(&self) -> Vec<TimelineItem> {
        self.lanes
            .iter()
            .enumerate()
            .flat_map(|(lane, items)| {
                items
                    .iter()
                    .map(move |item| item.clone().with_lane(lane))
            })
            .collect()
    }
}

/// One interactive move, as requested by the drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositionRequest {
    /// Item being moved.
    pub item_id: String,
    /// Lane the item was dropped on.
    pub target_lane: usize,
    /// Requested new start date.
    pub start: NaiveDate,
    /// Requested new end date (exclusive).
    pub end: NaiveDate,
}

/// Which placement strategy resolved an interactive move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// The requested lane and dates were conflict-free.
    Direct,
    /// A gap in the target lane had room; the start was snapped after the left
    /// neighbor.
    SameLaneGap,
    /// The nearest empty lane took the item at its requested dates.
    NearestEmpty,
    /// A full scan found some conflict-free lane.
    ExhaustiveScan,
    /// No conflict-free lane exists; the item was placed anyway.
    Fallback,
}

/// Final placement chosen for one interactively moved item.
///
/// The caller merges `{lane, start, end}` back into its snapshot and triggers a full
/// [`assign_lanes`](crate::assign_lanes) pass later for global consistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositionResult {
    pub lane: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Strategy that produced the placement.
    pub strategy: Strategy,
    /// Set on fallback placements, which may still conflict. The caller is expected to
    /// surface a warning, not abort.
    pub warning: bool,
}

/// Errors reported at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LayoutError {
    /// The interval is empty or inverted. The engine never invents or normalizes
    /// dates; defaulting them is the caller's job.
    #[error("item {id}: end {end} is not after start {start}")]
    InvalidInterval {
        id: String,
        start: NaiveDate,
        end: NaiveDate,
    },
    /// A reposition request named an id absent from the snapshot.
    #[error("item {0} is not in the snapshot")]
    ItemNotFound(String),
}
