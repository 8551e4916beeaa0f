// =====================================================================
// File: records/instructor.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 6, 2025
//
// Description:
//   An instructor hired by the academy, plus the salary arithmetic used
//   by payroll. Instructors live in the unbalanced index, keyed by id.
// =====================================================================
use std::fmt;

use crate::config::PayrollConfig;
use crate::error::RecordError;
use crate::index::Keyed;

use super::DanceStyle;

/// Hiring years accepted by [`Instructor::new`].
pub const HIRED_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    id: u32,
    name: String,
    hired_year: i32,
    base_salary: f64,
    style: DanceStyle,
}


impl Instructor {
    /// Creates an instructor.
    ///
    /// # Returns
    /// * `Err(RecordError::InvalidName)` if `name` is blank.
    /// * `Err(RecordError::InvalidYear)` if `hired_year` is outside
    ///   [`HIRED_YEARS`].
    /// * `Err(RecordError::InvalidSalary)` if `base_salary` is negative or
    ///   not a finite number.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        hired_year: i32,
        base_salary: f64,
        style: DanceStyle,
    ) -> Result<Self, RecordError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(RecordError::InvalidName(name));
        }
        if !HIRED_YEARS.contains(&hired_year) {
            return Err(RecordError::InvalidYear(hired_year));
        }
        if !base_salary.is_finite() || base_salary < 0.0 {
            return Err(RecordError::InvalidSalary(base_salary.to_string()));
        }

        Ok(Self {
            id,
            name,
            hired_year,
            base_salary,
            style,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hired_year(&self) -> i32 {
        self.hired_year
    }

    pub fn base_salary(&self) -> f64 {
        self.base_salary
    }

    pub fn style(&self) -> DanceStyle {
        self.style
    }

    pub fn teaches_tango(&self) -> bool {
        self.style == DanceStyle::Tango
    }

    pub fn years_of_service(&self, current_year: i32) -> i32 {
        current_year.saturating_sub(self.hired_year)
    }

    /// True when service strictly exceeds the configured seniority years.
    pub fn has_seniority(&self, current_year: i32, config: &PayrollConfig) -> bool {
        self.years_of_service(current_year) > config.seniority_years
    }

    /// Base salary plus bonuses:
    /// - seniority bonus if [`Self::has_seniority`],
    /// - `popularity_rate` of the base if the style is the most requested,
    /// - tango bonus for tango instructors.
    ///
    /// # Example
    /// ```
    /// use academy_index::{DanceStyle, Instructor, PayrollConfig};
    ///
    /// let cfg = PayrollConfig::default();
    /// let hired = Instructor::new(1, "Rosa Diaz", 2015, 500_000.0, DanceStyle::Tango).unwrap();
    /// // 500 000 + 24 350 + 25 000 + 5 600
    /// assert_eq!(hired.gross_salary(2025, true, &cfg), 554_950.0);
    /// ```
    pub fn gross_salary(&self, current_year: i32, most_popular: bool, config: &PayrollConfig) -> f64 {
        let mut gross = self.base_salary;

        if self.has_seniority(current_year, config) {
            gross += config.seniority_bonus;
        }
        if most_popular {
            gross += self.base_salary * config.popularity_rate;
        }
        if self.teaches_tango() {
            gross += config.tango_bonus;
        }
        gross
    }

    /// Pension contribution withheld from `gross`.
    pub fn pension(&self, gross: f64, config: &PayrollConfig) -> f64 {
        gross * config.pension_rate
    }

    /// Take-home pay: `gross` minus the pension.
    pub fn net_salary(&self, gross: f64, config: &PayrollConfig) -> f64 {
        gross - self.pension(gross, config)
    }

    /// Approximate days worked, assuming the instructor started on Jan 1
    /// of the year after `hired_year` was recorded. Adds one leap day per
    /// four complete years, then `day_of_year` for the current year.
    /// Never negative.
    pub fn days_worked(&self, current_year: i32, day_of_year: u32) -> i64 {
        let complete_years = i64::from(current_year) - i64::from(self.hired_year) - 1;
        let days = complete_years * 365 + complete_years / 4 + i64::from(day_of_year);
        days.max(0)
    }
}


impl Keyed for Instructor {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}


impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Hired: {}, Base Salary: ${:.0}, Style: {}",
            self.id, self.name, self.hired_year, self.base_salary, self.style
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn instructor(hired_year: i32, style: DanceStyle) -> Instructor {
        Instructor::new(1234, "Rosa Diaz", hired_year, 400_000.0, style).unwrap()
    }

    #[test]
    fn seniority_needs_more_than_five_years() {
        let cfg = PayrollConfig::default();
        assert!(!instructor(2020, DanceStyle::Salsa).has_seniority(2025, &cfg));
        assert!(instructor(2019, DanceStyle::Salsa).has_seniority(2025, &cfg));
    }

    #[test]
    fn gross_without_bonuses_is_base() {
        let cfg = PayrollConfig::default();
        let hired = instructor(2024, DanceStyle::Salsa);
        assert_eq!(hired.gross_salary(2025, false, &cfg), 400_000.0);
    }

    #[test]
    fn gross_adds_each_bonus() {
        let cfg = PayrollConfig::default();
        let hired = instructor(2010, DanceStyle::Tango);
        assert_eq!(hired.gross_salary(2025, false, &cfg), 400_000.0 + 24_350.0 + 5_600.0);
        assert_eq!(
            hired.gross_salary(2025, true, &cfg),
            400_000.0 + 24_350.0 + 20_000.0 + 5_600.0
        );
    }

    #[test]
    fn pension_and_net() {
        let cfg = PayrollConfig::default();
        let hired = instructor(2024, DanceStyle::Bachata);
        let gross = 100_000.0;
        assert!((hired.pension(gross, &cfg) - 19_000.0).abs() < 1e-9);
        assert!((hired.net_salary(gross, &cfg) - 81_000.0).abs() < 1e-9);
    }

    #[test]
    fn days_worked_counts_leap_days() {
        let hired = instructor(2015, DanceStyle::Cumbia);
        // 9 complete years: 9 * 365 + 2 leap days + 40
        assert_eq!(hired.days_worked(2025, 40), 3_327);
    }

    #[test]
    fn rejects_blank_name_and_bad_salary() {
        assert!(matches!(
            Instructor::new(1, "  ", 2020, 1.0, DanceStyle::Salsa),
            Err(RecordError::InvalidName(_))
        ));
        assert!(matches!(
            Instructor::new(1, "Rosa Diaz", 2020, -5.0, DanceStyle::Salsa),
            Err(RecordError::InvalidSalary(_))
        ));
        assert!(matches!(
            Instructor::new(1, "Rosa Diaz", 2020, f64::NAN, DanceStyle::Salsa),
            Err(RecordError::InvalidSalary(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_hired_year() {
        for year in [i32::MIN, -1, 0, 10_000, i32::MAX] {
            assert_eq!(
                Instructor::new(1, "Rosa Diaz", year, 1.0, DanceStyle::Salsa),
                Err(RecordError::InvalidYear(year))
            );
        }
        assert!(Instructor::new(1, "Rosa Diaz", 1, 1.0, DanceStyle::Salsa).is_ok());
        assert!(Instructor::new(1, "Rosa Diaz", 9999, 1.0, DanceStyle::Salsa).is_ok());
    }

    #[test]
    fn service_math_does_not_overflow() {
        let cfg = PayrollConfig::default();
        let hired = instructor(9999, DanceStyle::Salsa);
        assert_eq!(hired.years_of_service(i32::MIN), i32::MIN);
        assert!(!hired.has_seniority(i32::MIN, &cfg));
        assert_eq!(hired.days_worked(i32::MIN, 10), 0);

        let veteran = instructor(1, DanceStyle::Salsa);
        assert_eq!(veteran.years_of_service(i32::MAX), i32::MAX - 1);
        assert!(veteran.days_worked(i32::MAX, 1) > 0);
    }

    #[test]
    fn days_worked_is_never_negative() {
        // Hired this year, formula alone would give -325
        assert_eq!(instructor(2025, DanceStyle::Salsa).days_worked(2025, 40), 0);
        assert_eq!(instructor(2030, DanceStyle::Salsa).days_worked(2025, 40), 0);
        assert_eq!(instructor(2024, DanceStyle::Salsa).days_worked(2025, 40), 40);
    }

    #[test]
    fn display_rounds_salary() {
        let hired = Instructor::new(88, "Rosa Diaz", 2020, 350_000.4, DanceStyle::Salsa).unwrap();
        assert_eq!(
            hired.to_string(),
            "ID: 88, Name: Rosa Diaz, Hired: 2020, Base Salary: $350000, Style: Salsa"
        );
    }
}
