//! Compute free ranges of the day around merged busy ranges.
//!
//! Interior gaps end exclusively at the next busy range's start. The trailing
//! gap runs up to and including [`TimeRange::END_OF_DAY`], since the day's last
//! unit is itself schedulable.

use crate::time_range::TimeRange;

/// Whether `candidate` is non-empty and long enough for a meeting of `duration`.
fn fits(candidate: &TimeRange, duration: u32) -> bool {
    candidate.end() > candidate.start() && candidate.duration() >= duration
}

/// Free ranges of at least `duration` units between sorted, disjoint busy ranges.
///
/// `blocked` must be sorted by start and pairwise non-mergeable, as produced by
/// [`merge_ranges`](crate::merge::merge_ranges). Gaps that are empty or shorter
/// than `duration` are dropped. Busy ranges reaching past the end of the day
/// leave no trailing gap, and busy ranges starting after it are ignored, so
/// every returned range lies within the day.
pub fn free_ranges(blocked: &[TimeRange], duration: u32) -> Vec<TimeRange> {
    let mut free = Vec::new();
    let mut cursor = TimeRange::START_OF_DAY;

    for busy in blocked {
        // Busy time starting after the day never bounds a free range.
        if busy.start() > TimeRange::END_OF_DAY {
            break;
        }
        if cursor < busy.start() {
            if let Ok(gap) = TimeRange::from_start_end(cursor, busy.start(), false) {
                if fits(&gap, duration) {
                    free.push(gap);
                }
            }
        }
        cursor = cursor.max(busy.end());
    }

    if cursor <= TimeRange::END_OF_DAY {
        if let Ok(gap) = TimeRange::from_start_end(cursor, TimeRange::END_OF_DAY, true) {
            if fits(&gap, duration) {
                free.push(gap);
            }
        }
    }

    free
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> TimeRange {
        TimeRange::from_start_end(start, end, false).unwrap()
    }

    #[test]
    fn busy_past_end_of_day_leaves_no_trailing_gap() {
        let blocked = [range(1400, 1500)];
        assert_eq!(free_ranges(&blocked, 0), vec![range(0, 1400)]);
    }

    #[test]
    fn busy_starting_after_end_of_day_is_ignored() {
        let blocked = [range(600, 660), range(1450, 1460)];
        assert_eq!(
            free_ranges(&blocked, 0),
            vec![range(0, 600), range(660, 1440)]
        );
    }

    #[test]
    fn last_unit_of_day_is_schedulable() {
        let blocked = [range(0, 1439)];
        assert_eq!(free_ranges(&blocked, 1), vec![range(1439, 1440)]);
        assert!(free_ranges(&blocked, 2).is_empty());
    }

    #[test]
    fn adjacent_busy_ranges_leave_no_gap() {
        let blocked = [range(0, 10), range(10, 20)];
        assert_eq!(free_ranges(&blocked, 0), vec![range(20, 1440)]);
    }
}
