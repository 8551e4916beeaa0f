// =====================================================================
// File: config.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 1, 2025
//
// Description:
//   Tunable constants for the academy: payroll bonuses and rates, the
//   id space used for generated ids.
// =====================================================================

/// Payroll bonuses and deductions.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollConfig {
    /// Flat bonus for instructors with more than `seniority_years` of service.
    pub seniority_bonus: f64,
    /// Years of service that must be exceeded to earn the seniority bonus.
    pub seniority_years: i32,
    /// Share of the base salary paid when the instructor teaches the most
    /// requested style.
    pub popularity_rate: f64,
    /// Flat bonus for tango instructors.
    pub tango_bonus: f64,
    /// Pension contribution, as a share of the gross salary.
    pub pension_rate: f64,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            seniority_bonus: 24_350.0,
            seniority_years: 5,
            popularity_rate: 0.05,
            tango_bonus: 5_600.0,
            pension_rate: 0.19,
        }
    }
}


/// Top-level academy configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AcademyConfig {
    pub payroll: PayrollConfig,
    /// Generated ids fall in `0..id_ceiling` (4 digits by default).
    pub id_ceiling: u32,
}

impl Default for AcademyConfig {
    fn default() -> Self {
        Self {
            payroll: PayrollConfig::default(),
            id_ceiling: 10_000,
        }
    }
}
