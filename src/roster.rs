//! Roster - In-memory entity store and relationship rules
//!
//! The single authoritative owner of all [`Student`] and [`Course`]
//! records. Creation, lookup, enrollment, and grading all go through this
//! type so the two sides of an enrollment can never drift apart:
//! - an id identifies at most one record of its kind
//! - enrollment mutates the student's course list and the course's member
//!   list in the same call, idempotently
//! - a grade attaches only to a course the student is enrolled in
//!
//! Failed operations leave the roster unchanged.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::course::Course;
use crate::student::Student;
use crate::{Error, Result};

/// In-memory store of all student and course records.
///
/// Records are keyed by their identity (`student_id` / `course_code`).
/// The roster is an explicit value passed to every operation; there is no
/// process-global store, which keeps lifecycles clear and lets tests run
/// independent rosters side by side.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Roster {
    /// All students indexed by their id
    students: HashMap<String, Student>,
    /// All courses indexed by their code
    courses: HashMap<String, Course>,
}

impl Roster {
    /// Create a new empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a roster from already-keyed collections.
    ///
    /// Used by the snapshot codec. Performs no cross-checks against the
    /// enrollment invariants: an externally edited snapshot can carry an
    /// inconsistent state, and it is restored as-is rather than silently
    /// repaired.
    pub fn from_parts(
        students: HashMap<String, Student>,
        courses: HashMap<String, Course>,
    ) -> Self {
        Self { students, courses }
    }

    // ========== Record Creation ==========

    /// Add a student record, failing on id collision
    pub fn add_student(&mut self, student: Student) -> Result<()> {
        match self.students.entry(student.student_id.clone()) {
            Entry::Occupied(entry) => Err(Error::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(student);
                Ok(())
            }
        }
    }

    /// Create and insert a student with empty grades and enrollments
    pub fn create_student(
        &mut self,
        student_id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        address: impl Into<String>,
    ) -> Result<&Student> {
        match self.students.entry(student_id.into()) {
            Entry::Occupied(entry) => Err(Error::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                let student = Student::new(entry.key().clone(), name, age, address);
                Ok(entry.insert(student))
            }
        }
    }

    /// Add a course record, failing on code collision
    pub fn add_course(&mut self, course: Course) -> Result<()> {
        match self.courses.entry(course.course_code.clone()) {
            Entry::Occupied(entry) => Err(Error::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(course);
                Ok(())
            }
        }
    }

    /// Create and insert a course with no members
    pub fn create_course(
        &mut self,
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Result<&Course> {
        match self.courses.entry(course_code.into()) {
            Entry::Occupied(entry) => Err(Error::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                let course = Course::new(entry.key().clone(), course_name, instructor);
                Ok(entry.insert(course))
            }
        }
    }

    // ========== Lookups ==========

    /// Get a student by id
    pub fn get_student(&self, student_id: &str) -> Option<&Student> {
        self.students.get(student_id)
    }

    /// Get a course by code
    pub fn get_course(&self, course_code: &str) -> Option<&Course> {
        self.courses.get(course_code)
    }

    /// Iterate over all students
    pub fn all_students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Iterate over all courses
    pub fn all_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Check whether the roster holds no records at all
    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.courses.is_empty()
    }

    // ========== Enrollment Operations ==========

    /// Enroll a student in a course, linking both sides in one call.
    ///
    /// The course's *name* is appended to the student's course list and
    /// the student's *name* to the course's member list; both appends are
    /// idempotent, so re-enrolling is a silent no-op.
    pub fn enroll(&mut self, student_id: &str, course_code: &str) -> Result<()> {
        let Some(student) = self.students.get_mut(student_id) else {
            return Err(Error::StudentNotFound(student_id.to_string()));
        };
        let Some(course) = self.courses.get_mut(course_code) else {
            return Err(Error::CourseNotFound(course_code.to_string()));
        };

        student.enroll_in(course.course_name.as_str());
        course.add_member(student.name.as_str());
        Ok(())
    }

    /// Record a grade for a student in a course.
    ///
    /// The student must already be enrolled in the course. A grade
    /// already recorded for that course is overwritten (last write wins).
    pub fn assign_grade(
        &mut self,
        student_id: &str,
        course_code: &str,
        grade: impl Into<String>,
    ) -> Result<()> {
        let Some(student) = self.students.get_mut(student_id) else {
            return Err(Error::StudentNotFound(student_id.to_string()));
        };
        let Some(course) = self.courses.get(course_code) else {
            return Err(Error::CourseNotFound(course_code.to_string()));
        };

        if !student.is_enrolled_in(&course.course_name) {
            return Err(Error::NotEnrolled {
                student: student_id.to_string(),
                course: course_code.to_string(),
            });
        }

        student.record_grade(course.course_name.as_str(), grade);
        Ok(())
    }

    // ========== Statistics ==========

    /// Number of student records
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of course records
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Total number of (student, course) enrollment links
    pub fn enrollment_count(&self) -> usize {
        self.students
            .values()
            .map(|s| s.enrolled_courses.len())
            .sum()
    }

    /// Get statistics about the roster
    pub fn stats(&self) -> RosterStats {
        let graded = self.students.values().map(|s| s.grades.len()).sum();
        RosterStats {
            students: self.student_count(),
            courses: self.course_count(),
            enrollments: self.enrollment_count(),
            graded,
        }
    }
}

/// Statistics about a roster
#[derive(Debug, Clone)]
pub struct RosterStats {
    pub students: usize,
    pub courses: usize,
    pub enrollments: usize,
    pub graded: usize,
}

impl std::fmt::Display for RosterStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Roster Statistics:")?;
        writeln!(f, "  Students: {}", self.students)?;
        writeln!(f, "  Courses: {}", self.courses)?;
        writeln!(
            f,
            "  Enrollments: {} (graded: {})",
            self.enrollments, self.graded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        roster
            .create_student("S1", "Ada", 20, "1 Infinite Loop")
            .unwrap();
        roster
            .create_course("CS101", "Algorithms", "Turing")
            .unwrap();
        roster
    }

    #[test]
    fn test_create_and_get_student() {
        let roster = sample_roster();
        let student = roster.get_student("S1").unwrap();
        assert_eq!(student.name, "Ada");
        assert_eq!(student.age, 20);
        assert!(student.enrolled_courses.is_empty());
        assert!(roster.get_student("S2").is_none());
    }

    #[test]
    fn test_duplicate_student_id_rejected() {
        let mut roster = sample_roster();
        let err = roster
            .create_student("S1", "Impostor", 99, "nowhere")
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateId(ref id) if id == "S1"));

        // The colliding call must leave the store unchanged
        let student = roster.get_student("S1").unwrap();
        assert_eq!(student.name, "Ada");
        assert_eq!(roster.student_count(), 1);
    }

    #[test]
    fn test_duplicate_course_code_rejected() {
        let mut roster = sample_roster();
        let err = roster
            .create_course("CS101", "Knitting", "Nobody")
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateId(ref code) if code == "CS101"));
        assert_eq!(roster.get_course("CS101").unwrap().course_name, "Algorithms");
    }

    #[test]
    fn test_enroll_links_both_sides() {
        let mut roster = sample_roster();
        roster.enroll("S1", "CS101").unwrap();

        let student = roster.get_student("S1").unwrap();
        assert_eq!(student.enrolled_courses, vec!["Algorithms"]);

        let course = roster.get_course("CS101").unwrap();
        assert_eq!(course.enrolled_student_names, vec!["Ada"]);
    }

    #[test]
    fn test_enroll_twice_is_silent_noop() {
        let mut roster = sample_roster();
        roster.enroll("S1", "CS101").unwrap();
        roster.enroll("S1", "CS101").unwrap();

        assert_eq!(roster.get_student("S1").unwrap().enrolled_courses.len(), 1);
        assert_eq!(
            roster
                .get_course("CS101")
                .unwrap()
                .enrolled_student_names
                .len(),
            1
        );
    }

    #[test]
    fn test_enroll_unknown_student() {
        let mut roster = sample_roster();
        let err = roster.enroll("S2", "CS101").unwrap_err();
        assert!(matches!(err, Error::StudentNotFound(ref id) if id == "S2"));
    }

    #[test]
    fn test_enroll_unknown_course() {
        let mut roster = sample_roster();
        let err = roster.enroll("S1", "CS999").unwrap_err();
        assert!(matches!(err, Error::CourseNotFound(ref code) if code == "CS999"));
    }

    #[test]
    fn test_grade_requires_enrollment() {
        let mut roster = sample_roster();

        // Both records exist, but no enrollment links them yet
        let err = roster.assign_grade("S1", "CS101", "A").unwrap_err();
        assert!(matches!(err, Error::NotEnrolled { .. }));
        assert!(roster.get_student("S1").unwrap().grades.is_empty());
    }

    #[test]
    fn test_grade_unknown_student() {
        let mut roster = sample_roster();
        let err = roster.assign_grade("S2", "CS101", "B").unwrap_err();
        assert!(matches!(err, Error::StudentNotFound(_)));
    }

    #[test]
    fn test_grade_after_enrollment() {
        let mut roster = sample_roster();
        roster.enroll("S1", "CS101").unwrap();
        roster.assign_grade("S1", "CS101", "A").unwrap();

        let student = roster.get_student("S1").unwrap();
        assert_eq!(student.grades.get("Algorithms"), Some(&"A".to_string()));
    }

    #[test]
    fn test_grade_overwrite_keeps_latest() {
        let mut roster = sample_roster();
        roster.enroll("S1", "CS101").unwrap();
        roster.assign_grade("S1", "CS101", "B").unwrap();
        roster.assign_grade("S1", "CS101", "A").unwrap();

        let student = roster.get_student("S1").unwrap();
        assert_eq!(student.grades.get("Algorithms"), Some(&"A".to_string()));
        assert_eq!(student.grades.len(), 1);
    }

    #[test]
    fn test_stats_counts() {
        let mut roster = sample_roster();
        roster
            .create_student("S2", "Alan", 22, "Bletchley Park")
            .unwrap();
        roster.enroll("S1", "CS101").unwrap();
        roster.enroll("S2", "CS101").unwrap();
        roster.assign_grade("S1", "CS101", "A").unwrap();

        let stats = roster.stats();
        assert_eq!(stats.students, 2);
        assert_eq!(stats.courses, 1);
        assert_eq!(stats.enrollments, 2);
        assert_eq!(stats.graded, 1);

        let rendered = stats.to_string();
        assert!(rendered.contains("Students: 2"));
        assert!(rendered.contains("Enrollments: 2"));
    }

    #[test]
    fn test_namesake_students_collapse_in_member_list() {
        // Known quirk: the member list stores names, so two students who
        // share a name occupy a single member entry.
        let mut roster = sample_roster();
        roster
            .create_student("S2", "Ada", 31, "Elsewhere")
            .unwrap();
        roster.enroll("S1", "CS101").unwrap();
        roster.enroll("S2", "CS101").unwrap();

        let course = roster.get_course("CS101").unwrap();
        assert_eq!(course.enrolled_student_names, vec!["Ada"]);
        assert_eq!(roster.enrollment_count(), 2);
    }
}
