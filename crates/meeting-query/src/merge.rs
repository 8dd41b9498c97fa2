//! Merge busy ranges into a minimal, sorted, disjoint set.
//!
//! Ranges are sorted by start, then reduced as a worklist: the two lowest
//! ranges are compared; if mergeable they are replaced by their union, which
//! goes back to the front of the worklist (its start is the lowest remaining),
//! otherwise the lower one is final. A merged range is therefore compared
//! again against everything after it.

use std::collections::VecDeque;

use crate::time_range::TimeRange;

/// True iff `a` and `b` can be replaced by a single covering range.
///
/// Adjacent ranges (`a.end() == b.start()`) are NOT mergeable; the gap between
/// them is zero-length and discarded later by gap extraction.
pub fn can_merge(a: &TimeRange, b: &TimeRange) -> bool {
    a.overlaps(b) || a.contains(b) || b.contains(a) || a == b
}

/// Merge an unordered collection of ranges.
///
/// Returns pairwise non-mergeable ranges sorted by start whose union covers
/// exactly the same units as the input.
pub fn merge_ranges<I>(ranges: I) -> Vec<TimeRange>
where
    I: IntoIterator<Item = TimeRange>,
{
    let mut pending: Vec<TimeRange> = ranges.into_iter().collect();
    // Ties on start fall back to end, so equal-start ranges have a fixed order.
    pending.sort_by(|a, b| {
        TimeRange::cmp_by_start(a, b).then_with(|| TimeRange::cmp_by_end(a, b))
    });
    let mut pending = VecDeque::from(pending);

    let mut merged = Vec::with_capacity(pending.len());
    while let Some(first) = pending.pop_front() {
        match pending.front().copied() {
            Some(second) if can_merge(&first, &second) => {
                let combined = first.span(&second);
                pending.pop_front();
                pending.push_front(combined);
            }
            _ => merged.push(first),
        }
    }

    tracing::trace!(ranges = merged.len(), "merged busy ranges");
    merged
}
