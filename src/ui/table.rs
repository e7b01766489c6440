use crate::{Course, Student};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, field: &str, value: &str) {
        self.rows.push(TableRow {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the detail table for a student record
pub fn student_table(student: &Student) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Name", &student.name);
    builder.add_row("ID", &student.student_id);
    builder.add_row("Age", &student.age.to_string());
    builder.add_row("Address", &student.address);
    builder.add_row("Enrolled Courses", &student.enrolled_courses_display());
    builder.add_row("Grades", &student.grades_display());
    builder.build()
}

/// Render the detail table for a course record
pub fn course_table(course: &Course) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Course Name", &course.course_name);
    builder.add_row("Code", &course.course_code);
    builder.add_row("Instructor", &course.instructor);
    builder.add_row("Enrolled Students", &course.members_display());
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_renders_nothing() {
        assert_eq!(TableBuilder::new().build(), "");
    }

    #[test]
    fn test_student_table_contains_fields() {
        let mut student = Student::new("S1", "Ada", 20, "1 Infinite Loop");
        student.enroll_in("Algorithms");
        student.record_grade("Algorithms", "A");

        let rendered = student_table(&student);
        assert!(rendered.contains("Ada"));
        assert!(rendered.contains("S1"));
        assert!(rendered.contains("Algorithms"));
        assert!(rendered.contains("Algorithms: A"));
    }

    #[test]
    fn test_course_table_contains_fields() {
        let mut course = Course::new("CS101", "Algorithms", "Turing");
        course.add_member("Ada");

        let rendered = course_table(&course);
        assert!(rendered.contains("CS101"));
        assert!(rendered.contains("Turing"));
        assert!(rendered.contains("Ada"));
    }
}
