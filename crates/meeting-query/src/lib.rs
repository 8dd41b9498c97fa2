//! # meeting-query
//!
//! Find every time range within a day where a meeting can be scheduled
//! without clashing with its attendees' existing events.
//!
//! Optional attendees are honoured whenever doing so still leaves a slot;
//! otherwise the search falls back to the mandatory attendees alone.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_query::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "standup",
//!     TimeRange::from_start_duration(600, 60).unwrap(),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let slots = query(&events, &request);
//! assert_eq!(slots, vec![
//!     TimeRange::from_start_end(0, 600, false).unwrap(),
//!     TimeRange::from_start_end(660, TimeRange::END_OF_DAY, true).unwrap(),
//! ]);
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — Validated day-scoped intervals
//! - [`event`] — Events, meeting requests, and the input document
//! - [`merge`] — Merge busy ranges into a disjoint sorted set
//! - [`gaps`] — Free ranges around merged busy ranges
//! - [`query`] — Attendee filtering and the optional-attendee fallback
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod gaps;
pub mod merge;
pub mod query;
pub mod time_range;

pub use error::MeetingError;
pub use event::{Event, MeetingRequest, Schedule};
pub use gaps::free_ranges;
pub use merge::merge_ranges;
pub use query::{
    blocked_ranges, first_available, query, query_with_attendance, Attendance, MeetingSlots,
};
pub use time_range::TimeRange;
