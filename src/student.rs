//! Student record type
//!
//! A student owns two relationship projections:
//! - `grades`: course-name → grade-string mapping
//! - `enrolled_courses`: ordered course-name sequence, no duplicates
//!
//! Consistency between a student's `enrolled_courses` and the matching
//! course's member list is maintained by [`crate::Roster`] operations,
//! not here — mutate through the store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A student in the roster.
///
/// `student_id` is the unique, immutable identity; all other attributes
/// are plain values. Serialized field names are the snapshot-file
/// compatibility surface and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name (also the token used in course member lists)
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Postal address, free-form
    pub address: String,
    /// Unique identifier, immutable once assigned
    pub student_id: String,
    /// Grades keyed by course name (grade is an opaque string)
    pub grades: BTreeMap<String, String>,
    /// Course names this student is enrolled in, in enrollment order
    pub enrolled_courses: Vec<String>,
}

impl Student {
    /// Create a new student with no enrollments and no grades
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            address: address.into(),
            student_id: student_id.into(),
            grades: BTreeMap::new(),
            enrolled_courses: Vec::new(),
        }
    }

    /// Append a course name to the enrollment sequence.
    ///
    /// Idempotent: re-enrolling in a course already present is a no-op.
    pub fn enroll_in(&mut self, course_name: impl Into<String>) {
        let course_name = course_name.into();
        if !self.enrolled_courses.contains(&course_name) {
            self.enrolled_courses.push(course_name);
        }
    }

    /// Record a grade for a course, overwriting any prior grade
    pub fn record_grade(&mut self, course_name: impl Into<String>, grade: impl Into<String>) {
        self.grades.insert(course_name.into(), grade.into());
    }

    /// Check whether this student is enrolled in the named course
    pub fn is_enrolled_in(&self, course_name: &str) -> bool {
        self.enrolled_courses.iter().any(|c| c == course_name)
    }

    /// Get a short description for display
    pub fn summary(&self) -> String {
        format!("{} (ID: {})", self.name, self.student_id)
    }

    /// Enrolled courses joined for display, `None` when empty
    pub fn enrolled_courses_display(&self) -> String {
        if self.enrolled_courses.is_empty() {
            "None".to_string()
        } else {
            self.enrolled_courses.join(", ")
        }
    }

    /// Grades formatted for display, `None` when empty
    pub fn grades_display(&self) -> String {
        if self.grades.is_empty() {
            "None".to_string()
        } else {
            self.grades
                .iter()
                .map(|(course, grade)| format!("{}: {}", course, grade))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student_has_empty_relationships() {
        let student = Student::new("S1", "Ada", 20, "1 Infinite Loop");
        assert_eq!(student.student_id, "S1");
        assert_eq!(student.name, "Ada");
        assert_eq!(student.age, 20);
        assert!(student.grades.is_empty());
        assert!(student.enrolled_courses.is_empty());
    }

    #[test]
    fn test_enroll_in_is_idempotent() {
        let mut student = Student::new("S1", "Ada", 20, "1 Infinite Loop");
        student.enroll_in("Algorithms");
        student.enroll_in("Algorithms");
        assert_eq!(student.enrolled_courses, vec!["Algorithms"]);
    }

    #[test]
    fn test_record_grade_overwrites() {
        let mut student = Student::new("S1", "Ada", 20, "1 Infinite Loop");
        student.record_grade("Algorithms", "B");
        student.record_grade("Algorithms", "A");
        assert_eq!(student.grades.get("Algorithms"), Some(&"A".to_string()));
        assert_eq!(student.grades.len(), 1);
    }

    #[test]
    fn test_display_fallbacks_when_empty() {
        let student = Student::new("S1", "Ada", 20, "1 Infinite Loop");
        assert_eq!(student.enrolled_courses_display(), "None");
        assert_eq!(student.grades_display(), "None");
    }

    #[test]
    fn test_display_joins_entries() {
        let mut student = Student::new("S1", "Ada", 20, "1 Infinite Loop");
        student.enroll_in("Algorithms");
        student.enroll_in("Logic");
        student.record_grade("Algorithms", "A");
        assert_eq!(student.enrolled_courses_display(), "Algorithms, Logic");
        assert_eq!(student.grades_display(), "Algorithms: A");
    }
}
