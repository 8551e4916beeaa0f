// =====================================================================
// File: records/student.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 5, 2025
//
// Description:
//   A student enrolled at the academy. Students live in the balanced
//   index, keyed by their enrollment stamp.
// =====================================================================
use std::fmt;

use crate::error::RecordError;
use crate::index::Keyed;

use super::{DanceStyle, EnrollmentStamp};

/// Most dance preferences a student can hold.
pub const MAX_PREFERENCES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: u32,
    name: String,
    enrolled: EnrollmentStamp,
    preferences: Vec<DanceStyle>,
}


impl Student {
    /// Creates a student.
    ///
    /// Repeated preferences are dropped and only the first
    /// [`MAX_PREFERENCES`] are kept.
    ///
    /// # Returns
    /// * `Err(RecordError::InvalidName)` if `name` is not `First Last`.
    /// * `Err(RecordError::NoPreferences)` if `preferences` is empty.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        enrolled: EnrollmentStamp,
        preferences: impl IntoIterator<Item = DanceStyle>,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        if !validate_full_name(&name) {
            return Err(RecordError::InvalidName(name));
        }

        let mut kept = Vec::with_capacity(MAX_PREFERENCES);
        for style in preferences {
            if kept.len() == MAX_PREFERENCES {
                break;
            }
            if !kept.contains(&style) {
                kept.push(style);
            }
        }
        if kept.is_empty() {
            return Err(RecordError::NoPreferences);
        }

        Ok(Self {
            id,
            name,
            enrolled,
            preferences: kept,
        })
    }

    /// Same student under a different id.
    pub(crate) fn with_id(self, id: u32) -> Self {
        Self { id, ..self }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enrolled(&self) -> EnrollmentStamp {
        self.enrolled
    }

    pub fn preferences(&self) -> &[DanceStyle] {
        &self.preferences
    }

    /// Preferences joined with `|`, e.g. `Salsa|Tango`.
    pub fn preferences_string(&self) -> String {
        self.preferences
            .iter()
            .map(|style| style.name())
            .collect::<Vec<_>>()
            .join("|")
    }
}


impl Keyed for Student {
    type Key = EnrollmentStamp;

    fn key(&self) -> EnrollmentStamp {
        self.enrolled
    }
}


impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}  Name: {}  Date: {}  Time: {}:{:02}  Prefs: {}",
            self.id,
            self.name,
            self.enrolled.date_display(),
            self.enrolled.hour(),
            self.enrolled.minute(),
            self.preferences_string()
        )
    }
}


/// A full name is exactly two words separated by one space, with no
/// leading or trailing space.
///
/// # Example
/// ```
/// use academy_index::records::validate_full_name;
///
/// assert!(validate_full_name("Ana Rojas"));
/// assert!(!validate_full_name("Ana"));
/// assert!(!validate_full_name("Ana  Rojas"));
/// assert!(!validate_full_name(" Ana Rojas"));
/// ```
pub fn validate_full_name(name: &str) -> bool {
    match name.split_once(' ') {
        Some((first, last)) => !first.is_empty() && !last.is_empty() && !last.contains(' '),
        None => false,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> EnrollmentStamp {
        EnrollmentStamp::new(2025, 3, 14, 18, 5).unwrap()
    }

    #[test]
    fn keeps_first_three_unique_preferences() {
        let student = Student::new(
            42,
            "Ana Rojas",
            stamp(),
            [
                DanceStyle::Salsa,
                DanceStyle::Salsa,
                DanceStyle::Tango,
                DanceStyle::Bachata,
                DanceStyle::Cumbia,
            ],
        )
        .unwrap();

        assert_eq!(
            student.preferences(),
            &[DanceStyle::Salsa, DanceStyle::Tango, DanceStyle::Bachata]
        );
        assert_eq!(student.preferences_string(), "Salsa|Tango|Bachata");
    }

    #[test]
    fn rejects_bad_names_and_empty_preferences() {
        assert_eq!(
            Student::new(1, "Cher", stamp(), [DanceStyle::Salsa]),
            Err(RecordError::InvalidName("Cher".into()))
        );
        assert_eq!(
            Student::new(1, "Ana Rojas", stamp(), []),
            Err(RecordError::NoPreferences)
        );
    }

    #[test]
    fn keyed_by_enrollment_stamp() {
        let student = Student::new(7, "Luis Soto", stamp(), [DanceStyle::Cumbia]).unwrap();
        assert_eq!(student.key(), stamp());
    }

    #[test]
    fn display_matches_listing_format() {
        let student = Student::new(7, "Luis Soto", stamp(), [DanceStyle::Cumbia, DanceStyle::Tango]).unwrap();
        assert_eq!(
            student.to_string(),
            "ID: 7  Name: Luis Soto  Date: 14/03/2025  Time: 18:05  Prefs: Cumbia|Tango"
        );
    }

    #[test]
    fn full_name_rules() {
        assert!(validate_full_name("Maria Perez"));
        assert!(!validate_full_name(""));
        assert!(!validate_full_name("Maria "));
        assert!(!validate_full_name("Maria Jose Perez"));
    }
}
