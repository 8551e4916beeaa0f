// =====================================================================
// File: error.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 1, 2025
//
// Description:
//   Error types shared by the indexes, the record layer and the session.
//
//   - `IndexError`   : Duplicate keys, missing keys, broken tree shape.
//   - `RecordError`  : Rejected user input (names, dates, dance styles).
//   - `SessionError` : Everything a session operation can report.
//
// Notes:
//   * Expected outcomes (duplicate, not found) are ordinary values,
//     never panics.
// =====================================================================
use thiserror::Error;

/// Failures reported by [`BalancedIndex`](crate::BalancedIndex) and
/// [`UnbalancedIndex`](crate::UnbalancedIndex).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Insert of a key that is already present. Non-fatal, the caller
    /// may pick a new key and retry.
    #[error("key {0} is already present")]
    DuplicateKey(String),

    /// Lookup or delete of a key that is not present.
    #[error("key {0} not found")]
    NotFound(String),

    /// The tree shape broke one of its ordering or balance rules.
    /// Only ever produced by a bug in the index itself.
    #[error("structural invariant violated: {0}")]
    StructuralInvariantViolation(String),
}


/// Input that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid full name '{0}': expected 'First Last'")]
    InvalidName(String),

    #[error("invalid date {day:02}/{month:02}/{year}")]
    InvalidDate { day: u32, month: u32, year: i32 },

    #[error("invalid time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("unknown month '{0}'")]
    UnknownMonth(String),

    #[error("unknown dance style '{0}'")]
    UnknownDanceStyle(String),

    #[error("dance style menu number must be 1-5, got {0}")]
    InvalidMenuNumber(u32),

    #[error("invalid year {0}")]
    InvalidYear(i32),

    #[error("invalid base salary {0}")]
    InvalidSalary(String),

    #[error("at least one dance preference is required")]
    NoPreferences,

    #[error("invalid enrollment stamp '{0}': expected MM/DD/YYYY HH:MM")]
    InvalidStamp(String),
}


/// Errors surfaced by [`Session`](crate::Session) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Record(#[from] RecordError),

    /// Every id below the configured ceiling is already taken.
    #[error("no free ids left below {0}")]
    IdSpaceExhausted(u32),
}
