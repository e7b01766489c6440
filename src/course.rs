//! Course record type
//!
//! A course owns one relationship projection: `enrolled_student_names`,
//! an ordered sequence of student *names* with no duplicates. Storing
//! names rather than IDs means two students sharing a name are
//! indistinguishable in the member list; this matches the snapshot file
//! format and is kept deliberately.

use serde::{Deserialize, Serialize};

/// A course in the roster.
///
/// `course_code` is the unique, immutable identity. Serialized field
/// names are the snapshot-file compatibility surface and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Human-readable course name (the token students enroll under)
    pub course_name: String,
    /// Unique identifier, immutable once assigned
    pub course_code: String,
    /// Instructor display name
    pub instructor: String,
    /// Names of enrolled students, in enrollment order
    pub enrolled_student_names: Vec<String>,
}

impl Course {
    /// Create a new course with no members
    pub fn new(
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            course_name: course_name.into(),
            course_code: course_code.into(),
            instructor: instructor.into(),
            enrolled_student_names: Vec::new(),
        }
    }

    /// Append a student name to the member sequence.
    ///
    /// Idempotent: a name already present is not appended again.
    pub fn add_member(&mut self, student_name: impl Into<String>) {
        let student_name = student_name.into();
        if !self.enrolled_student_names.contains(&student_name) {
            self.enrolled_student_names.push(student_name);
        }
    }

    /// Get a short description for display
    pub fn summary(&self) -> String {
        format!("{} (Code: {})", self.course_name, self.course_code)
    }

    /// Member names joined for display, `None` when empty
    pub fn members_display(&self) -> String {
        if self.enrolled_student_names.is_empty() {
            "None".to_string()
        } else {
            self.enrolled_student_names.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_course_has_no_members() {
        let course = Course::new("CS101", "Algorithms", "Turing");
        assert_eq!(course.course_code, "CS101");
        assert_eq!(course.course_name, "Algorithms");
        assert_eq!(course.instructor, "Turing");
        assert!(course.enrolled_student_names.is_empty());
    }

    #[test]
    fn test_add_member_is_idempotent() {
        let mut course = Course::new("CS101", "Algorithms", "Turing");
        course.add_member("Ada");
        course.add_member("Ada");
        assert_eq!(course.enrolled_student_names, vec!["Ada"]);
    }

    #[test]
    fn test_members_display_fallback() {
        let mut course = Course::new("CS101", "Algorithms", "Turing");
        assert_eq!(course.members_display(), "None");
        course.add_member("Ada");
        course.add_member("Alan");
        assert_eq!(course.members_display(), "Ada, Alan");
    }
}
