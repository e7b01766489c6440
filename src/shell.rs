//! Interactive menu shell
//!
//! The line-based surface driving the eight record operations plus exit.
//! Every operation prompts for its primitive inputs, runs the matching
//! store or snapshot operation, and reports the outcome; errors are
//! messages, never fatal — the loop always returns to the menu.
//!
//! Input is generic over [`BufRead`] so sessions can be scripted in
//! tests; output goes through [`crate::ui`].

use std::io::BufRead;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{snapshot, ui, Error, Result, Roster};

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    AddCourse,
    Enroll,
    Grade,
    ShowStudent,
    ShowCourse,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    /// The digit selecting this entry
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "1",
            MenuChoice::AddCourse => "2",
            MenuChoice::Enroll => "3",
            MenuChoice::Grade => "4",
            MenuChoice::ShowStudent => "5",
            MenuChoice::ShowCourse => "6",
            MenuChoice::Save => "7",
            MenuChoice::Load => "8",
            MenuChoice::Exit => "0",
        }
    }

    /// Menu line shown for this entry
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "Add New Student",
            MenuChoice::AddCourse => "Add New Course",
            MenuChoice::Enroll => "Enroll Student in Course",
            MenuChoice::Grade => "Add Grade for Student",
            MenuChoice::ShowStudent => "Display Student Details",
            MenuChoice::ShowCourse => "Display Course Details",
            MenuChoice::Save => "Save Data to File",
            MenuChoice::Load => "Load Data from File",
            MenuChoice::Exit => "Exit",
        }
    }

    /// All entries in menu order
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::AddStudent,
            MenuChoice::AddCourse,
            MenuChoice::Enroll,
            MenuChoice::Grade,
            MenuChoice::ShowStudent,
            MenuChoice::ShowCourse,
            MenuChoice::Save,
            MenuChoice::Load,
            MenuChoice::Exit,
        ]
    }
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddStudent),
            "2" => Ok(MenuChoice::AddCourse),
            "3" => Ok(MenuChoice::Enroll),
            "4" => Ok(MenuChoice::Grade),
            "5" => Ok(MenuChoice::ShowStudent),
            "6" => Ok(MenuChoice::ShowCourse),
            "7" => Ok(MenuChoice::Save),
            "8" => Ok(MenuChoice::Load),
            "0" => Ok(MenuChoice::Exit),
            other => Err(Error::InvalidChoice(other.to_string())),
        }
    }
}

/// Interactive session over a roster.
///
/// Owns the roster for the duration of the session; save and load use
/// the snapshot path the shell was constructed with.
pub struct Shell<R> {
    input: R,
    roster: Roster,
    snapshot_path: PathBuf,
}

impl<R: BufRead> Shell<R> {
    pub fn new(input: R, roster: Roster, snapshot_path: PathBuf) -> Self {
        Self {
            input,
            roster,
            snapshot_path,
        }
    }

    /// Borrow the current roster state
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consume the shell, yielding the final roster state
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Run the menu loop until exit or end of input.
    ///
    /// Only IO failures propagate; record operations report their errors
    /// as messages and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu();

            let Some(line) = self.read_line("Select Option")? else {
                break;
            };

            let choice = match MenuChoice::from_str(&line) {
                Ok(choice) => choice,
                Err(_) => {
                    ui::warn("Invalid option. Try again.");
                    continue;
                }
            };

            match choice {
                MenuChoice::AddStudent => self.add_student()?,
                MenuChoice::AddCourse => self.add_course()?,
                MenuChoice::Enroll => self.enroll()?,
                MenuChoice::Grade => self.grade()?,
                MenuChoice::ShowStudent => self.show_student()?,
                MenuChoice::ShowCourse => self.show_course()?,
                MenuChoice::Save => self.save(),
                MenuChoice::Load => self.load(),
                MenuChoice::Exit => {
                    println!("{} Exiting. Goodbye!", ui::Icons::WAVE);
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_menu(&self) {
        ui::section("==== Student Management System ====");
        for choice in MenuChoice::all() {
            println!("{}. {}", choice.as_str(), choice.label());
        }
    }

    /// Prompt and read one trimmed line; `None` means end of input
    fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        ui::prompt(label);
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_student(&mut self) -> Result<()> {
        let Some(name) = self.read_line("Enter Name")? else {
            return Ok(());
        };
        let Some(age_line) = self.read_line("Enter Age")? else {
            return Ok(());
        };
        let age: u32 = match age_line.parse() {
            Ok(age) => age,
            Err(_) => {
                ui::error(&format!("Invalid age: {}", age_line));
                return Ok(());
            }
        };
        let Some(address) = self.read_line("Enter Address")? else {
            return Ok(());
        };
        let Some(student_id) = self.read_line("Enter Student ID")? else {
            return Ok(());
        };

        match self.roster.create_student(&student_id, &name, age, &address) {
            Ok(student) => {
                ui::success(&format!("Student {} added successfully.", student.summary()));
            }
            Err(err) => ui::error(&err.to_string()),
        }
        Ok(())
    }

    fn add_course(&mut self) -> Result<()> {
        let Some(course_name) = self.read_line("Enter Course Name")? else {
            return Ok(());
        };
        let Some(course_code) = self.read_line("Enter Course Code")? else {
            return Ok(());
        };
        let Some(instructor) = self.read_line("Enter Instructor")? else {
            return Ok(());
        };

        match self
            .roster
            .create_course(&course_code, &course_name, &instructor)
        {
            Ok(course) => {
                ui::success(&format!(
                    "Course {} created with instructor {}.",
                    course.summary(),
                    course.instructor
                ));
            }
            Err(err) => ui::error(&err.to_string()),
        }
        Ok(())
    }

    fn enroll(&mut self) -> Result<()> {
        let Some(student_id) = self.read_line("Enter Student ID")? else {
            return Ok(());
        };
        let Some(course_code) = self.read_line("Enter Course Code")? else {
            return Ok(());
        };

        match self.roster.enroll(&student_id, &course_code) {
            Ok(()) => {
                // Both lookups succeeded if enroll did
                let student = self.roster.get_student(&student_id);
                let course = self.roster.get_course(&course_code);
                if let (Some(student), Some(course)) = (student, course) {
                    ui::success(&format!(
                        "Student {} enrolled in {}.",
                        student.summary(),
                        course.summary()
                    ));
                }
            }
            Err(err) => ui::error(&err.to_string()),
        }
        Ok(())
    }

    fn grade(&mut self) -> Result<()> {
        let Some(student_id) = self.read_line("Enter Student ID")? else {
            return Ok(());
        };
        let Some(course_code) = self.read_line("Enter Course Code")? else {
            return Ok(());
        };
        let Some(grade) = self.read_line("Enter Grade")? else {
            return Ok(());
        };

        match self.roster.assign_grade(&student_id, &course_code, &grade) {
            Ok(()) => {
                ui::success(&format!(
                    "Grade {} added for student {} in {}.",
                    grade, student_id, course_code
                ));
            }
            Err(err) => ui::error(&err.to_string()),
        }
        Ok(())
    }

    fn show_student(&mut self) -> Result<()> {
        let Some(student_id) = self.read_line("Enter Student ID")? else {
            return Ok(());
        };

        match self.roster.get_student(&student_id) {
            Some(student) => {
                ui::section(&format!("{} Student Information", ui::Icons::STUDENT));
                println!("{}", ui::student_table(student));
            }
            None => ui::error(&Error::StudentNotFound(student_id).to_string()),
        }
        Ok(())
    }

    fn show_course(&mut self) -> Result<()> {
        let Some(course_code) = self.read_line("Enter Course Code")? else {
            return Ok(());
        };

        match self.roster.get_course(&course_code) {
            Some(course) => {
                ui::section(&format!("{} Course Information", ui::Icons::COURSE));
                println!("{}", ui::course_table(course));
            }
            None => ui::error(&Error::CourseNotFound(course_code).to_string()),
        }
        Ok(())
    }

    fn save(&mut self) {
        match snapshot::save(&self.roster, &self.snapshot_path) {
            Ok(()) => ui::success("All student and course data saved successfully."),
            Err(err) => ui::error(&err.to_string()),
        }
    }

    fn load(&mut self) {
        let existed = self.snapshot_path.exists();
        match snapshot::load(&self.snapshot_path) {
            Ok(roster) => {
                self.roster = roster;
                if existed {
                    ui::success("Data loaded successfully.");
                } else {
                    ui::warn("No saved data found; starting with an empty roster.");
                }
            }
            Err(err) => ui::error(&err.to_string()),
        }
    }
}
