//! Error types for meeting-query operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    /// A range whose end would precede its start.
    #[error("Invalid range: end {end} is before start {start}")]
    InvalidRange { start: u32, end: u32 },

    /// `start + duration` does not fit in a time unit.
    #[error("Range overflow: start {start} + duration {duration} exceeds u32")]
    RangeOverflow { start: u32, duration: u32 },

    /// A serialized range whose bounds are missing or disagree.
    #[error("Invalid range bounds: {0}")]
    InvalidBounds(String),
}

pub type Result<T> = std::result::Result<T, MeetingError>;
