//! Half-open interval overlap tests.

use chrono::NaiveDate;

use crate::types::TimelineItem;

/// Returns whether two items overlap in time.
///
/// Intervals are half-open: an item ending on day D and one starting on day D do not
/// conflict.
pub fn overlaps(a: &TimelineItem, b: &TimelineItem) -> bool {
    a.start < b.end && a.end > b.start
}

/// Number of items in `lane_items` overlapping the candidate interval.
///
/// Callers only ever distinguish zero from nonzero; there is no ranking beyond that.
pub fn conflict_count<'a>(
    start: NaiveDate,
    end: NaiveDate,
    lane_items: impl IntoIterator<Item = &'a TimelineItem>,
) -> usize {
    lane_items
        .into_iter()
        .filter(|item| start < item.end && end > item.start)
        .count()
}
