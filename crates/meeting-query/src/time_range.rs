//! Day-scoped time ranges.
//!
//! A [`TimeRange`] is a span of whole time units (minutes) within a single day.
//! It is stored as `start` + `duration`; `end` is derived and always exclusive.
//! Construction is validated, so a range whose end precedes its start cannot
//! exist.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// An immutable span of time units `[start, start + duration)`.
///
/// Equality compares `start` and `duration`. Ordering is ascending by `start`,
/// then by `duration`, so sorting a collection of ranges is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct TimeRange {
    start: u32,
    duration: u32,
}

impl TimeRange {
    /// First time unit of the day.
    pub const START_OF_DAY: u32 = 0;

    /// Last schedulable time unit of the day (23:59).
    pub const END_OF_DAY: u32 = 24 * 60 - 1;

    /// The whole day, `[START_OF_DAY, END_OF_DAY]` inclusive.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: Self::START_OF_DAY,
        duration: Self::END_OF_DAY + 1,
    };

    /// Build a range from its start and length.
    ///
    /// # Errors
    /// Returns [`MeetingError::RangeOverflow`] if `start + duration` overflows.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        if start.checked_add(duration).is_none() {
            return Err(MeetingError::RangeOverflow { start, duration });
        }
        Ok(Self { start, duration })
    }

    /// Build a range from its two bounds.
    ///
    /// When `inclusive_of_end` is true the unit at `end` is part of the range
    /// (`duration = end - start + 1`); otherwise it is not
    /// (`duration = end - start`).
    ///
    /// # Errors
    /// Returns [`MeetingError::InvalidRange`] if `end < start`, and
    /// [`MeetingError::RangeOverflow`] if an inclusive `end` is `u32::MAX`.
    pub fn from_start_end(start: u32, end: u32, inclusive_of_end: bool) -> Result<Self> {
        if end < start {
            return Err(MeetingError::InvalidRange { start, end });
        }
        let exclusive = end - start;
        let duration = if inclusive_of_end {
            exclusive
                .checked_add(1)
                .filter(|_| end < u32::MAX)
                .ok_or(MeetingError::RangeOverflow {
                    start,
                    duration: exclusive,
                })?
        } else {
            exclusive
        };
        Ok(Self { start, duration })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Exclusive end of the range.
    pub fn end(&self) -> u32 {
        // Checked at construction.
        self.start + self.duration
    }

    /// True iff the two ranges share at least one time unit.
    ///
    /// Adjacent ranges (one ends where the other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// True iff `other` lies entirely within this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end() <= self.end()
    }

    /// True iff `point` is one of the units covered by this range.
    pub fn contains_point(&self, point: u32) -> bool {
        self.start <= point && point < self.end()
    }

    /// Smallest range covering both `self` and `other`, with an exclusive end.
    pub fn span(&self, other: &TimeRange) -> TimeRange {
        let start = self.start.min(other.start);
        let end = self.end().max(other.end());
        TimeRange {
            start,
            duration: end - start,
        }
    }

    /// Comparator ordering ranges by ascending start.
    pub fn cmp_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start)
    }

    /// Comparator ordering ranges by ascending end.
    pub fn cmp_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end().cmp(&b.end())
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range: [{}, {})", self.start, self.end())
    }
}

/// Wire form of a [`TimeRange`].
///
/// Serialization always writes `start`, `end` (exclusive) and `duration`.
/// Deserialization accepts either bound, and checks they agree when both
/// are present. `inclusive_end` only qualifies `end`.
#[derive(Serialize, Deserialize)]
struct RangeRepr {
    start: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<u32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    inclusive_end: bool,
}

impl TryFrom<RangeRepr> for TimeRange {
    type Error = MeetingError;

    fn try_from(repr: RangeRepr) -> Result<Self> {
        match (repr.duration, repr.end) {
            (Some(_), None) if repr.inclusive_end => Err(MeetingError::InvalidBounds(
                "inclusive_end needs an end".to_string(),
            )),
            (Some(duration), None) => TimeRange::from_start_duration(repr.start, duration),
            (None, Some(end)) => TimeRange::from_start_end(repr.start, end, repr.inclusive_end),
            (Some(duration), Some(end)) => {
                let range = TimeRange::from_start_end(repr.start, end, repr.inclusive_end)?;
                if range.duration != duration {
                    return Err(MeetingError::InvalidBounds(format!(
                        "duration {} disagrees with start {} and end {}",
                        duration, repr.start, end
                    )));
                }
                Ok(range)
            }
            (None, None) => Err(MeetingError::InvalidBounds(
                "range needs a duration or an end".to_string(),
            )),
        }
    }
}

impl From<TimeRange> for RangeRepr {
    fn from(range: TimeRange) -> Self {
        RangeRepr {
            start: range.start,
            end: Some(range.end()),
            duration: Some(range.duration),
            inclusive_end: false,
        }
    }
}
