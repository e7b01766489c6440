//! # Roster - Student and course record management
//!
//! Single-process, interactive record keeping for students, courses,
//! enrollments, and grades.
//!
//! Roster provides:
//! - An in-memory entity store owning all student and course records
//! - Enrollment and grade-attachment rules enforced at the store boundary
//! - A flat-file JSON snapshot codec, round-trip safe
//! - An interactive menu shell plus one-shot CLI commands

pub mod student;
pub mod course;
pub mod roster;
pub mod snapshot;
pub mod config;
pub mod shell;
pub mod ui;

// Re-exports for convenient access
pub use student::Student;
pub use course::Course;
pub use roster::{Roster, RosterStats};
pub use snapshot::Snapshot;

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Roster operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Student {student} is not enrolled in {course}")]
    NotEnrolled { student: String, course: String },

    #[error("Malformed snapshot data: {0}")]
    MalformedData(String),

    #[error("Invalid option: {0}")]
    InvalidChoice(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
