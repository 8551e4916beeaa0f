// =====================================================================
// File: records/mod.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 5, 2025
//
//! The `records` module holds the record types stored in the indexes and
//! the input validation around them.
//!
//! Structure:
//! - `stamp.rs`      : [`EnrollmentStamp`] (chronological sort key) and
//!                     month parsing.
//! - `dance.rs`      : [`DanceStyle`] and the preference list parser.
//! - `student.rs`    : [`Student`], keyed by enrollment stamp.
//! - `instructor.rs` : [`Instructor`], keyed by id, with salary math.
// =====================================================================

pub mod dance;
pub mod instructor;
pub mod stamp;
pub mod student;

pub use self::dance::{parse_preference_list, DanceStyle};
pub use self::instructor::{Instructor, HIRED_YEARS};
pub use self::stamp::{parse_month, EnrollmentStamp, STAMP_FORMAT};
pub use self::student::{validate_full_name, Student, MAX_PREFERENCES};
