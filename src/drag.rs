//! Interactive move state machine.
//!
//! One drag runs to completion before the next begins: pointer-down enters
//! [`DragState::Dragging`], pointer-up passes through [`DragState::Resolving`] while a
//! placement is computed, then the machine returns to [`DragState::Idle`]. The machine
//! only sequences events; all placement decisions live in
//! [`reposition`](crate::reposition), which stays a pure function callable from any UI
//! framework or test harness.
//!
//! A rejected or abandoned move must be rolled back in full. Both [`DragSession::cancel`]
//! and a failed [`DragSession::commit`] hand the pre-drag placement back to the caller,
//! which restores it unchanged; partial application of a rejected move is disallowed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reposition::reposition;
use crate::types::{LayoutError, RepositionRequest, RepositionResult, TimelineItem};
use crate::Options;

/// Placement of an item as it was before the drag started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOrigin {
    pub item_id: String,
    pub lane: Option<usize>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// State of an ongoing interactive move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState {
    /// No move in progress.
    Idle,
    /// Pointer is down; the item still occupies its origin placement.
    Dragging(DragOrigin),
    /// Pointer released; a placement is being resolved.
    Resolving,
}

/// A commit that did not produce a placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragCommitError {
    /// `commit` was called without a begun move.
    #[error("no interactive move is in progress")]
    NotDragging,
    /// The requested move was rejected; the caller must restore `origin` in full.
    #[error("{error}")]
    Rejected {
        error: LayoutError,
        origin: DragOrigin,
    },
}

/// Drives one interactive move from pointer-down to pointer-up.
#[derive(Debug)]
pub struct DragSession {
    state: DragState,
    options: Options,
}

impl DragSession {
    pub fn new(options: Options) -> Self {
        Self {
            state: DragState::Idle,
            options,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Begins an interactive move for an item.
    ///
    /// Returns false if another move is already in progress.
    pub fn begin(&mut self, item: &TimelineItem) -> bool {
        if !matches!(self.state, DragState::Idle) {
            return false;
        }
        self.state = DragState::Dragging(DragOrigin {
            item_id: item.id.clone(),
            lane: item.lane,
            start: item.start,
            end: item.end,
        });
        true
    }

    /// Abandons the move, e.g. a drop outside any valid zone.
    ///
    /// Returns the origin placement for the caller to restore in full.
    pub fn cancel(&mut self) -> Option<DragOrigin> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging(origin) => Some(origin),
            _ => None,
        }
    }

    /// Completes the move, resolving a placement for the dropped item.
    ///
    /// The snapshot must still contain the moved item at its pre-drag placement. On
    /// rejection (empty or inverted interval, unknown item) the origin placement comes
    /// back alongside the error and the caller applies it unchanged.
    pub fn commit(
        &mut self,
        target_lane: usize,
        start: NaiveDate,
        end: NaiveDate,
        snapshot: &[TimelineItem],
    ) -> Result<RepositionResult, DragCommitError> {
        let origin = match std::mem::replace(&mut self.state, DragState::Resolving) {
            DragState::Dragging(origin) => origin,
            _ => {
                self.state = DragState::Idle;
                return Err(DragCommitError::NotDragging);
            }
        };

        let request = RepositionRequest {
            item_id: origin.item_id.clone(),
            target_lane,
            start,
            end,
        };
        let resolved = reposition(&request, snapshot, &self.options);
        self.state = DragState::Idle;

        resolved.map_err(|error| DragCommitError::Rejected { error, origin })
    }
}
