//! Network-construction error type.

use thiserror::Error;

/// Errors produced while building a `TransitNetwork`.
///
/// Every variant is fatal for the build: the caller gets no network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("schedule references unknown line variant {line:?}")]
    UnknownLineReference { line: String },

    #[error(
        "line {line:?} departs from {expected:?} but the schedule gives {actual:?} as its terminus"
    )]
    TerminusMismatch {
        line:     String,
        expected: String,
        actual:   String,
    },

    #[error(
        "line {line:?} has {stations} stations for {durations} segment durations \
         (expected one more station than durations)"
    )]
    StructuralInconsistency {
        line:      String,
        stations:  usize,
        durations: usize,
    },

    #[error("line variant {line:?} reappears after another variant; its segments must be contiguous")]
    DuplicateLineVariant { line: String },

    #[error("too many {what}: ids are 32-bit")]
    CapacityExceeded { what: &'static str },
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// The id for the next entry of a table currently holding `len` entries.
pub(crate) fn next_id<T: TryFrom<usize>>(len: usize, what: &'static str) -> NetworkResult<T> {
    T::try_from(len).map_err(|_| NetworkError::CapacityExceeded { what })
}
