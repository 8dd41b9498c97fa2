//! Find the slots of a day where a requested meeting fits.
//!
//! The search first treats optional attendees as if they were mandatory. If
//! that leaves at least one slot, those slots are the answer. Otherwise, and
//! only when the request names mandatory attendees, the optional attendees are
//! dropped entirely and the search runs again for the mandatory ones alone.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::event::{Event, MeetingRequest};
use crate::gaps::free_ranges;
use crate::merge::merge_ranges;
use crate::time_range::TimeRange;

/// Which attendee set the returned slots were computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    /// Mandatory and optional attendees are all free in every slot.
    AllAttendees,
    /// No slot suited everyone; only mandatory attendees were considered.
    MandatoryOnly,
}

/// Result of a meeting query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSlots {
    pub attendance: Attendance,
    /// Candidate slots, sorted by start.
    pub slots: Vec<TimeRange>,
}

/// Merged busy ranges of the events that involve any of `attendees`.
pub fn blocked_ranges<'a, I>(events: &[Event], attendees: I) -> Vec<TimeRange>
where
    I: IntoIterator<Item = &'a String>,
{
    let attendees: BTreeSet<&String> = attendees.into_iter().collect();
    let busy = events
        .iter()
        .filter(|event| event.involves_any(attendees.iter().copied()))
        .map(|event| event.when);
    merge_ranges(busy)
}

fn slots_for<'a, I>(events: &[Event], attendees: I, duration: u32) -> Vec<TimeRange>
where
    I: IntoIterator<Item = &'a String>,
{
    free_ranges(&blocked_ranges(events, attendees), duration)
}

/// Every range of the day long enough for `request`, with the attendee set used.
///
/// A request longer than the whole day yields no slots.
pub fn query_with_attendance(events: &[Event], request: &MeetingRequest) -> MeetingSlots {
    if request.duration > TimeRange::WHOLE_DAY.duration() {
        tracing::debug!(
            duration = request.duration,
            "requested duration exceeds the day"
        );
        return MeetingSlots {
            attendance: Attendance::AllAttendees,
            slots: Vec::new(),
        };
    }

    let slots = slots_for(events, request.all_attendees(), request.duration);
    if !slots.is_empty() || request.attendees.is_empty() {
        tracing::debug!(slots = slots.len(), "slots found for all attendees");
        return MeetingSlots {
            attendance: Attendance::AllAttendees,
            slots,
        };
    }

    let slots = slots_for(events, &request.attendees, request.duration);
    tracing::debug!(
        slots = slots.len(),
        dropped = request.optional_attendees.len(),
        "no slot for all attendees, falling back to mandatory attendees"
    );
    MeetingSlots {
        attendance: Attendance::MandatoryOnly,
        slots,
    }
}

/// Every range of the day long enough for `request`.
///
/// Slots free for mandatory and optional attendees are preferred. When there
/// are none and the request has mandatory attendees, the slots free for the
/// mandatory attendees alone are returned instead (possibly none).
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    query_with_attendance(events, request).slots
}

/// Earliest slot [`query`] would return.
pub fn first_available(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    query(events, request).into_iter().next()
}
