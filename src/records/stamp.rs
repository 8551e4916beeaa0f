// =====================================================================
// File: records/stamp.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 5, 2025
//
//! [`EnrollmentStamp`] is the chronological sort key of the balanced
//! index. It orders by (year, month, day, hour, minute) as integers, which
//! is true chronological order. The zero-padded `MM/DD/YYYY HH:MM` text is
//! for display and input only and is never compared as a string, since
//! that would sort by month before year.
// =====================================================================
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::RecordError;

/// Text format used for display and parsing.
pub const STAMP_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Enrollment date and time, minute resolution.
///
/// Field order matters: the derived `Ord` compares fields top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnrollmentStamp {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}


impl EnrollmentStamp {
    /// Builds a validated stamp. Leap years are honored.
    ///
    /// # Example
    /// ```
    /// use academy_index::EnrollmentStamp;
    ///
    /// let a = EnrollmentStamp::new(2023, 6, 1, 9, 30).unwrap();
    /// let b = EnrollmentStamp::new(2025, 1, 15, 8, 0).unwrap();
    /// assert!(a < b);
    /// assert_eq!(b.to_string(), "01/15/2025 08:00");
    ///
    /// assert!(EnrollmentStamp::new(2023, 2, 29, 0, 0).is_err());
    /// assert!(EnrollmentStamp::new(2024, 2, 29, 0, 0).is_ok());
    /// ```
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, RecordError> {
        if year < 1 || NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(RecordError::InvalidDate { day, month, year });
        }
        if hour > 23 || minute > 59 {
            return Err(RecordError::InvalidTime { hour, minute });
        }
        Ok(Self { year, month, day, hour, minute })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// `DD/MM/YYYY`, the way listings show the date.
    pub fn date_display(&self) -> String {
        format!("{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}


impl TryFrom<NaiveDateTime> for EnrollmentStamp {
    type Error = RecordError;

    /// Goes through [`EnrollmentStamp::new`], so the same years are rejected.
    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::new(value.year(), value.month(), value.day(), value.hour(), value.minute())
    }
}


impl fmt::Display for EnrollmentStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{} {:02}:{:02}",
            self.month, self.day, self.year, self.hour, self.minute
        )
    }
}


impl FromStr for EnrollmentStamp {
    type Err = RecordError;

    /// Parses `MM/DD/YYYY HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = NaiveDateTime::parse_from_str(s.trim(), STAMP_FORMAT)
            .map_err(|_| RecordError::InvalidStamp(s.to_string()))?;
        Self::try_from(parsed)
    }
}


/// Month names accepted by [`parse_month`], Spanish first.
const MONTH_NAMES: [(&str, u32); 25] = [
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];


/// Parses a month given as a number (`1`-`12`) or a month name.
///
/// # Example
/// ```
/// use academy_index::records::parse_month;
///
/// assert_eq!(parse_month("3"), Ok(3));
/// assert_eq!(parse_month("Setiembre"), Ok(9));
/// assert_eq!(parse_month("DECEMBER"), Ok(12));
/// assert!(parse_month("13").is_err());
/// ```
pub fn parse_month(text: &str) -> Result<u32, RecordError> {
    let text = text.trim();

    if let Ok(number) = text.parse::<u32>() {
        return match number {
            1..=12 => Ok(number),
            _ => Err(RecordError::UnknownMonth(text.to_string())),
        };
    }

    let lowered = text.to_lowercase();
    MONTH_NAMES
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, number)| *number)
        .ok_or_else(|| RecordError::UnknownMonth(text.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> EnrollmentStamp {
        EnrollmentStamp::new(year, month, day, hour, minute).unwrap()
    }

    #[test]
    fn orders_by_year_before_month() {
        // As display strings these compare the other way around
        let early = stamp(2023, 6, 1, 0, 0);
        let late = stamp(2025, 1, 15, 0, 0);
        assert!(early < late);
        assert!(late.to_string() < early.to_string());
    }

    #[test]
    fn orders_by_time_within_a_day() {
        assert!(stamp(2024, 3, 3, 9, 59) < stamp(2024, 3, 3, 10, 0));
        assert!(stamp(2024, 3, 3, 10, 0) < stamp(2024, 3, 3, 10, 1));
    }

    #[test]
    fn rejects_bad_dates_and_times() {
        assert!(matches!(
            EnrollmentStamp::new(2025, 4, 31, 0, 0),
            Err(RecordError::InvalidDate { .. })
        ));
        assert!(matches!(
            EnrollmentStamp::new(2025, 13, 1, 0, 0),
            Err(RecordError::InvalidDate { .. })
        ));
        assert!(matches!(
            EnrollmentStamp::new(0, 1, 1, 0, 0),
            Err(RecordError::InvalidDate { .. })
        ));
        assert_eq!(
            EnrollmentStamp::new(2025, 1, 1, 24, 0),
            Err(RecordError::InvalidTime { hour: 24, minute: 0 })
        );
        assert_eq!(
            EnrollmentStamp::new(2025, 1, 1, 23, 60),
            Err(RecordError::InvalidTime { hour: 23, minute: 60 })
        );
    }

    #[test]
    fn display_and_parse_agree() {
        let original = stamp(2024, 2, 9, 7, 5);
        assert_eq!(original.to_string(), "02/09/2024 07:05");
        assert_eq!("02/09/2024 07:05".parse::<EnrollmentStamp>(), Ok(original));
        assert_eq!(original.date_display(), "09/02/2024");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "2024-02-09".parse::<EnrollmentStamp>(),
            Err(RecordError::InvalidStamp(_))
        ));
        assert!("02/30/2024 10:00".parse::<EnrollmentStamp>().is_err());
    }

    #[test]
    fn parse_rejects_year_zero() {
        assert_eq!(
            "01/01/0000 00:00".parse::<EnrollmentStamp>(),
            Err(RecordError::InvalidDate { day: 1, month: 1, year: 0 })
        );
        assert_eq!(
            "01/01/0000 00:00".parse::<EnrollmentStamp>(),
            EnrollmentStamp::new(0, 1, 1, 0, 0)
        );
        assert_eq!("01/01/0001 00:00".parse::<EnrollmentStamp>(), Ok(stamp(1, 1, 1, 0, 0)));
    }

    #[test]
    fn month_names_and_numbers() {
        assert_eq!(parse_month("enero"), Ok(1));
        assert_eq!(parse_month(" Mayo "), Ok(5));
        assert_eq!(parse_month("12"), Ok(12));
        assert_eq!(parse_month("0"), Err(RecordError::UnknownMonth("0".into())));
        assert_eq!(parse_month("smarch"), Err(RecordError::UnknownMonth("smarch".into())));
    }
}
