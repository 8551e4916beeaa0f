// =====================================================================
// File: payroll.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 7, 2025
//
//! Monthly payroll. Student preferences are tallied over an in-order
//! walk of the balanced index to find the most requested style, then one
//! [`PayStub`] is produced per instructor in ascending id order.
// =====================================================================
use crate::config::PayrollConfig;
use crate::index::{BalancedIndex, UnbalancedIndex};
use crate::records::{DanceStyle, Instructor, Student};

/// Preference counts, indexed like [`DanceStyle::ALL`].
pub type PreferenceTally = [usize; DanceStyle::ALL.len()];

/// One instructor's pay for the period.
#[derive(Debug, Clone, PartialEq)]
pub struct PayStub {
    pub instructor_id: u32,
    pub name: String,
    pub gross: f64,
    pub pension: f64,
    pub net: f64,
}


/// Counts how many students list each style among their preferences.
pub fn tally_preferences<'a, I>(students: I) -> PreferenceTally
where
    I: IntoIterator<Item = &'a Student>,
{
    let mut tally = [0; DanceStyle::ALL.len()];
    for student in students {
        for style in student.preferences() {
            tally[style.index()] += 1;
        }
    }
    tally
}


/// The style with the strictly largest count. Ties go to the style that
/// comes first in menu order, so an empty tally yields Bachata.
///
/// # Example
/// ```
/// use academy_index::payroll::most_popular_style;
/// use academy_index::DanceStyle;
///
/// assert_eq!(most_popular_style(&[1, 4, 4, 0, 2]), DanceStyle::Reggaeton);
/// assert_eq!(most_popular_style(&[0; 5]), DanceStyle::Bachata);
/// ```
pub fn most_popular_style(tally: &PreferenceTally) -> DanceStyle {
    let mut best = 0;
    for (i, count) in tally.iter().enumerate().skip(1) {
        if *count > tally[best] {
            best = i;
        }
    }
    DanceStyle::ALL[best]
}


/// Builds the pay stub for a single instructor.
pub fn pay_stub(
    instructor: &Instructor,
    popular: DanceStyle,
    current_year: i32,
    config: &PayrollConfig,
) -> PayStub {
    let gross = instructor.gross_salary(current_year, instructor.style() == popular, config);
    PayStub {
        instructor_id: instructor.id(),
        name: instructor.name().to_string(),
        gross,
        pension: instructor.pension(gross, config),
        net: instructor.net_salary(gross, config),
    }
}


/// Pay stubs for every instructor, ascending by id.
pub fn compute_payroll(
    instructors: &UnbalancedIndex<Instructor>,
    students: &BalancedIndex<Student>,
    current_year: i32,
    config: &PayrollConfig,
) -> Vec<PayStub> {
    let popular = most_popular_style(&tally_preferences(students));

    instructors
        .iter()
        .map(|instructor| pay_stub(instructor, popular, current_year, config))
        .collect()
}
