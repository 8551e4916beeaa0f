// =====================================================================
// File: session.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 8, 2025
//
// Description:
// Defines the `Session` struct, the running academy context that owns
// both indexes and drives every user-level operation.
//
// Responsibilities:
// - Own the balanced index of students (keyed by enrollment stamp).
// - Own the unbalanced index of instructors (keyed by id).
// - Generate unique random ids, retrying on collision.
// - Enroll, hire, look up, dismiss, and run payroll.
//
// Each REPL run gets its own session; nothing is shared or global.
// =====================================================================
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::config::AcademyConfig;
use crate::error::{IndexError, SessionError};
use crate::index::{BalancedIndex, InOrder, UnbalancedIndex};
use crate::index::{AvlNode, BstNode};
use crate::payroll::{compute_payroll, PayStub};
use crate::records::{DanceStyle, EnrollmentStamp, Instructor, Student};

/// Represents a single in-memory academy session.
pub struct Session {
    /// Students in enrollment order.
    pub students: BalancedIndex<Student>,

    /// Instructors in id order.
    pub instructors: UnbalancedIndex<Instructor>,

    pub config: AcademyConfig,

    rng: StdRng,
}


impl Session {
    /// Creates an empty session with default config, seeded from the OS.
    ///
    /// # Example
    /// ```
    /// use academy_index::Session;
    /// let session = Session::new();
    /// assert!(session.students.is_empty());
    /// assert!(session.instructors.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::build(AcademyConfig::default(), StdRng::from_os_rng())
    }

    /// Creates an empty session whose generated ids are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(AcademyConfig::default(), seed)
    }

    pub fn with_config(config: AcademyConfig, seed: u64) -> Self {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: AcademyConfig, rng: StdRng) -> Self {
        Self {
            students: BalancedIndex::new(),
            instructors: UnbalancedIndex::new(),
            config,
            rng,
        }
    }


    // =========================
    // Id helpers
    // =========================

    /// Students are keyed by stamp, so this walks the whole index.
    pub fn student_id_exists(&self, id: u32) -> bool {
        self.students.iter().any(|student| student.id() == id)
    }

    pub fn instructor_id_exists(&self, id: u32) -> bool {
        self.instructors.contains(&id)
    }

    /// Random student id in `0..id_ceiling` not used by any student.
    pub fn generate_student_id(&mut self) -> Result<u32, SessionError> {
        if self.students.len() >= self.config.id_ceiling as usize {
            return Err(SessionError::IdSpaceExhausted(self.config.id_ceiling));
        }
        loop {
            let id = self.rng.random_range(0..self.config.id_ceiling);
            if !self.student_id_exists(id) {
                return Ok(id);
            }
            warn!(id, "student id collision, drawing again");
        }
    }

    /// Random instructor id in `0..id_ceiling` not used by any instructor.
    pub fn generate_instructor_id(&mut self) -> Result<u32, SessionError> {
        if self.instructors.len() >= self.config.id_ceiling as usize {
            return Err(SessionError::IdSpaceExhausted(self.config.id_ceiling));
        }
        loop {
            let id = self.rng.random_range(0..self.config.id_ceiling);
            if !self.instructor_id_exists(id) {
                return Ok(id);
            }
            warn!(id, "instructor id collision, drawing again");
        }
    }


    // =========================
    // Student operations
    // =========================

    /// Enrolls a new student with a freshly generated id.
    ///
    /// # Returns
    /// * `Ok(id)` - the id assigned to the student.
    /// * `Err(SessionError::Record(_))` - name or preferences rejected.
    /// * `Err(SessionError::Index(IndexError::DuplicateKey(_)))` - another
    ///   student already enrolled at exactly the same minute.
    ///
    /// # Example
    /// ```
    /// use academy_index::{DanceStyle, EnrollmentStamp, Session};
    ///
    /// let mut session = Session::with_seed(7);
    /// let stamp = EnrollmentStamp::new(2025, 3, 1, 18, 30).unwrap();
    /// let id = session.enroll_student("Ana Rojas", stamp, [DanceStyle::Salsa]).unwrap();
    /// assert!(id < 10_000);
    /// assert!(session.student_id_exists(id));
    /// ```
    pub fn enroll_student(
        &mut self,
        name: &str,
        enrolled: EnrollmentStamp,
        preferences: impl IntoIterator<Item = DanceStyle>,
    ) -> Result<u32, SessionError> {
        // Validate before spending an id draw
        let draft = Student::new(0, name, enrolled, preferences)?;
        if self.students.contains(&enrolled) {
            warn!(stamp = %enrolled, "enrollment stamp already taken");
            return Err(IndexError::DuplicateKey(enrolled.to_string()).into());
        }

        let id = self.generate_student_id()?;
        self.students.insert(draft.with_id(id)).into_result()?;

        info!(id, stamp = %enrolled, "student enrolled");
        Ok(id)
    }

    pub fn students(&self) -> InOrder<'_, AvlNode<Student>> {
        self.students.iter()
    }


    // =========================
    // Instructor operations
    // =========================

    /// Adds an instructor under its own id.
    ///
    /// # Returns
    /// * `Err(SessionError::Index(IndexError::DuplicateKey(_)))` if the id
    ///   is taken; the index is unchanged.
    pub fn hire_instructor(&mut self, instructor: Instructor) -> Result<(), SessionError> {
        let id = instructor.id();
        self.instructors.insert(instructor).into_result()?;
        info!(id, "instructor hired");
        Ok(())
    }

    /// Creates and adds an instructor with a generated id.
    pub fn hire_new_instructor(
        &mut self,
        name: &str,
        hired_year: i32,
        base_salary: f64,
        style: DanceStyle,
    ) -> Result<u32, SessionError> {
        // Validate before spending an id draw
        Instructor::new(0, name, hired_year, base_salary, style)?;

        let id = self.generate_instructor_id()?;
        self.hire_instructor(Instructor::new(id, name, hired_year, base_salary, style)?)?;
        Ok(id)
    }

    /// Looks an instructor up by id, calling `visit` with every instructor
    /// examined on the way down.
    pub fn find_instructor<F>(&self, id: u32, visit: F) -> Option<&Instructor>
    where
        F: FnMut(&Instructor),
    {
        self.instructors.find_with(&id, visit)
    }

    /// Removes an instructor by id.
    ///
    /// # Returns
    /// * `Ok(instructor)` - the removed record.
    /// * `Err(SessionError::Index(IndexError::NotFound(_)))` - no such id;
    ///   the index is unchanged.
    pub fn dismiss_instructor(&mut self, id: u32) -> Result<Instructor, SessionError> {
        let removed = self.instructors.remove(&id).into_result(id)?;
        info!(id, "instructor dismissed");
        Ok(removed)
    }

    pub fn instructors(&self) -> InOrder<'_, BstNode<Instructor>> {
        self.instructors.iter()
    }


    // =========================
    // Payroll
    // =========================

    /// One pay stub per instructor, ascending by id.
    pub fn payroll(&self, current_year: i32) -> Vec<PayStub> {
        compute_payroll(&self.instructors, &self.students, current_year, &self.config.payroll)
    }
}


impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}


// =====================================================================
// Unit Tests for Session
// =====================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;

    fn stamp(year: i32, month: u32, day: u32) -> EnrollmentStamp {
        EnrollmentStamp::new(year, month, day, 12, 0).unwrap()
    }

    // Basic Session Creation
    #[test]
    fn test_new_session_initial_state() {
        let session = Session::with_seed(1);
        assert!(session.students.is_empty());
        assert!(session.instructors.is_empty());
        assert_eq!(session.config, AcademyConfig::default());
    }

    // Enrollment
    #[test]
    fn test_enroll_assigns_unique_ids() {
        let mut session = Session::with_seed(3);
        let mut ids = Vec::new();
        for day in 1..=20 {
            let id = session
                .enroll_student("Ana Rojas", stamp(2025, 1, day), [DanceStyle::Salsa])
                .unwrap();
            ids.push(id);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(session.students.len(), 20);
    }

    #[test]
    fn test_enroll_same_minute_is_duplicate() {
        let mut session = Session::with_seed(3);
        session.enroll_student("Ana Rojas", stamp(2025, 2, 2), [DanceStyle::Tango]).unwrap();

        let err = session
            .enroll_student("Luis Soto", stamp(2025, 2, 2), [DanceStyle::Salsa])
            .unwrap_err();
        assert!(matches!(err, SessionError::Index(IndexError::DuplicateKey(_))));
        assert_eq!(session.students.len(), 1);
    }

    #[test]
    fn test_enroll_rejects_bad_name() {
        let mut session = Session::with_seed(3);
        let err = session
            .enroll_student("Ana", stamp(2025, 2, 2), [DanceStyle::Tango])
            .unwrap_err();
        assert_eq!(err, SessionError::Record(RecordError::InvalidName("Ana".into())));
        assert!(session.students.is_empty());
    }

    #[test]
    fn test_students_listed_chronologically() {
        let mut session = Session::with_seed(5);
        for (y, m, d) in [(2024, 6, 1), (2023, 1, 1), (2025, 1, 1), (2024, 1, 1)] {
            session.enroll_student("Ana Rojas", stamp(y, m, d), [DanceStyle::Salsa]).unwrap();
        }
        let years: Vec<(i32, u32)> = session
            .students()
            .map(|s| (s.enrolled().year(), s.enrolled().month()))
            .collect();
        assert_eq!(years, vec![(2023, 1), (2024, 1), (2024, 6), (2025, 1)]);
    }

    // Id space
    #[test]
    fn test_id_space_exhaustion_is_reported() {
        let config = AcademyConfig {
            id_ceiling: 2,
            ..AcademyConfig::default()
        };
        let mut session = Session::with_config(config, 9);
        session.enroll_student("Ana Rojas", stamp(2025, 1, 1), [DanceStyle::Salsa]).unwrap();
        session.enroll_student("Ana Rojas", stamp(2025, 1, 2), [DanceStyle::Salsa]).unwrap();

        let err = session
            .enroll_student("Ana Rojas", stamp(2025, 1, 3), [DanceStyle::Salsa])
            .unwrap_err();
        assert_eq!(err, SessionError::IdSpaceExhausted(2));
    }

    // Instructors
    #[test]
    fn test_hire_duplicate_id_rejected() {
        let mut session = Session::with_seed(1);
        let first = Instructor::new(10, "Rosa Diaz", 2020, 1.0, DanceStyle::Salsa).unwrap();
        let second = Instructor::new(10, "Other Person", 2021, 2.0, DanceStyle::Tango).unwrap();

        session.hire_instructor(first).unwrap();
        let err = session.hire_instructor(second).unwrap_err();
        assert_eq!(err, SessionError::Index(IndexError::DuplicateKey("10".into())));
        assert_eq!(session.find_instructor(10, |_| {}).map(|i| i.name()), Some("Rosa Diaz"));
    }

    #[test]
    fn test_hire_new_instructor_generates_id() {
        let mut session = Session::with_seed(11);
        let id = session
            .hire_new_instructor("Rosa Diaz", 2019, 300_000.0, DanceStyle::Cumbia)
            .unwrap();
        assert!(session.instructor_id_exists(id));
        assert_eq!(session.instructors.len(), 1);
    }

    #[test]
    fn test_hire_new_instructor_rejects_bad_year() {
        let mut session = Session::with_seed(11);
        let err = session
            .hire_new_instructor("Rosa Diaz", i32::MIN, 1.0, DanceStyle::Salsa)
            .unwrap_err();
        assert_eq!(err, SessionError::Record(RecordError::InvalidYear(i32::MIN)));
        assert!(session.instructors.is_empty());
        assert!(session.payroll(2025).is_empty());
    }

    #[test]
    fn test_find_reports_descent_path() {
        let mut session = Session::with_seed(1);
        for id in [50, 20, 80, 10, 30] {
            let hired = Instructor::new(id, "Rosa Diaz", 2020, 1.0, DanceStyle::Salsa).unwrap();
            session.hire_instructor(hired).unwrap();
        }

        let mut path = Vec::new();
        let found = session.find_instructor(30, |i| path.push(i.id()));
        assert_eq!(found.map(|i| i.id()), Some(30));
        assert_eq!(path, vec![50, 20, 30]);

        path.clear();
        assert!(session.find_instructor(25, |i| path.push(i.id())).is_none());
        assert_eq!(path, vec![50, 20, 30]);
    }

    #[test]
    fn test_dismiss_instructor() {
        let mut session = Session::with_seed(1);
        let hired = Instructor::new(77, "Rosa Diaz", 2020, 1.0, DanceStyle::Salsa).unwrap();
        session.hire_instructor(hired.clone()).unwrap();

        assert_eq!(session.dismiss_instructor(77), Ok(hired));
        assert_eq!(
            session.dismiss_instructor(77),
            Err(SessionError::Index(IndexError::NotFound("77".into())))
        );
        assert!(session.instructors.is_empty());
    }

    // Payroll
    #[test]
    fn test_payroll_uses_student_preferences() {
        let mut session = Session::with_seed(2);
        session.enroll_student("Ana Rojas", stamp(2025, 1, 1), [DanceStyle::Cumbia]).unwrap();
        session
            .hire_instructor(Instructor::new(1, "Rosa Diaz", 2024, 200_000.0, DanceStyle::Cumbia).unwrap())
            .unwrap();

        let stubs = session.payroll(2025);
        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].gross, 210_000.0);
    }
}
