//! Value-parsing error type.
//!
//! Higher crates wrap `CoreError` in their own enums via `#[from]` so that a
//! bad clock string surfaces with the context of the record it came from.

use thiserror::Error;

/// Errors produced while parsing `tt-core` value types from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid time of day {0:?}: expected HH:MM or HH:MM:SS within 00:00:00..=23:59:59")]
    InvalidClock(String),

    #[error("invalid journey duration {0:?}: expected MM:SS")]
    InvalidDuration(String),

    #[error("invalid coordinates {0:?}: expected \"lat,lon\"")]
    InvalidCoordinates(String),
}

/// Shorthand result type for `tt-core` parsing.
pub type CoreResult<T> = Result<T, CoreError>;
