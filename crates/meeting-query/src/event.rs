//! Calendar events and meeting requests.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// An already-scheduled event and the attendees it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Human-readable label. Not used for scheduling.
    #[serde(default)]
    pub title: String,
    pub when: TimeRange,
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// True iff any of `people` is required at this event.
    pub fn involves_any<'a, I>(&self, people: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        people.into_iter().any(|p| self.attendees.contains(p))
    }
}

/// A meeting to be placed: its length and who must or may attend.
///
/// The two attendee sets may overlap. A `duration` longer than the day is
/// allowed and simply yields no slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub duration: u32,
    /// Mandatory attendees.
    pub attendees: BTreeSet<String>,
    #[serde(default)]
    pub optional_attendees: BTreeSet<String>,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
        }
    }

    /// Builder-style setter for optional attendees.
    pub fn with_optional<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees = optional.into_iter().map(Into::into).collect();
        self
    }

    /// Mandatory and optional attendees together.
    pub fn all_attendees(&self) -> BTreeSet<&String> {
        self.attendees
            .iter()
            .chain(self.optional_attendees.iter())
            .collect()
    }
}

/// An input document: the day's events plus the meeting to place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}
