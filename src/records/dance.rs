// =====================================================================
// File: records/dance.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 5, 2025
//
// Description:
//   The dance styles taught at the academy, their menu numbers (1-5) and
//   the parser for a student's comma separated preference list.
// =====================================================================
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::RecordError;

/// A style taught at the academy. Declaration order is menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DanceStyle {
    Bachata,
    Reggaeton,
    Salsa,
    Cumbia,
    Tango,
}


impl DanceStyle {
    /// Every style, in menu order.
    pub const ALL: [DanceStyle; 5] = [
        DanceStyle::Bachata,
        DanceStyle::Reggaeton,
        DanceStyle::Salsa,
        DanceStyle::Cumbia,
        DanceStyle::Tango,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DanceStyle::Bachata => "Bachata",
            DanceStyle::Reggaeton => "Reggaeton",
            DanceStyle::Salsa => "Salsa",
            DanceStyle::Cumbia => "Cumbia",
            DanceStyle::Tango => "Tango",
        }
    }

    /// Position in [`DanceStyle::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Menu number, 1 for Bachata through 5 for Tango.
    pub fn menu_number(self) -> u32 {
        self.index() as u32 + 1
    }

    pub fn from_menu_number(number: u32) -> Result<Self, RecordError> {
        match number {
            1..=5 => Ok(Self::ALL[(number - 1) as usize]),
            _ => Err(RecordError::InvalidMenuNumber(number)),
        }
    }
}


impl fmt::Display for DanceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


impl FromStr for DanceStyle {
    type Err = RecordError;

    /// Case-insensitive: `"TANGO"`, `"tango"` and `"Tango"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RecordError::UnknownDanceStyle(wanted.to_string()))
    }
}


/// Parses a list of menu numbers such as `"3,1,5"`.
///
/// Entries that are not numbers 1-5, and repeats, are skipped. At most
/// `limit` styles are kept, in the order given.
///
/// # Returns
/// * `Err(RecordError::NoPreferences)` if nothing usable remains.
///
/// # Example
/// ```
/// use academy_index::records::{parse_preference_list, DanceStyle};
///
/// let prefs = parse_preference_list("3, 3, 9, 1", 3).unwrap();
/// assert_eq!(prefs, vec![DanceStyle::Salsa, DanceStyle::Bachata]);
/// ```
pub fn parse_preference_list(input: &str, limit: usize) -> Result<Vec<DanceStyle>, RecordError> {
    let mut styles: Vec<DanceStyle> = Vec::new();

    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if styles.len() == limit {
            break;
        }
        match token.parse::<u32>().map(DanceStyle::from_menu_number) {
            Ok(Ok(style)) if !styles.contains(&style) => styles.push(style),
            Ok(Ok(_)) => {}
            _ => warn!(token, "ignoring invalid dance preference"),
        }
    }

    if styles.is_empty() {
        return Err(RecordError::NoPreferences);
    }
    Ok(styles)
}
