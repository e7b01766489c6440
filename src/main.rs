//! Roster CLI - Student and course record management

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roster::shell::Shell;
use roster::{config, snapshot, ui};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Student and course record management with a flat-file JSON snapshot")]
#[command(long_about = r#"
Roster tracks students, courses, enrollments, and grades in memory and
persists them to a single JSON snapshot file.

Example usage:
  roster                          # interactive menu shell
  roster add-student --id S1 --name Ada --age 20 --address "1 Infinite Loop"
  roster add-course --code CS101 --name Algorithms --instructor Turing
  roster enroll --student S1 --course CS101
  roster grade --student S1 --course CS101 --grade A
  roster show student S1
"#)]
struct Cli {
    /// Snapshot file path (overrides roster.toml)
    #[arg(short, long, global = true)]
    snapshot: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu shell (the default)
    Shell,

    /// Add a student record
    AddStudent {
        /// Unique student id
        #[arg(long)]
        id: String,

        /// Student name
        #[arg(long)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Postal address
        #[arg(long)]
        address: String,
    },

    /// Add a course record
    AddCourse {
        /// Unique course code
        #[arg(long)]
        code: String,

        /// Course name
        #[arg(long)]
        name: String,

        /// Instructor name
        #[arg(long)]
        instructor: String,
    },

    /// Enroll a student in a course
    Enroll {
        /// Student id
        #[arg(long)]
        student: String,

        /// Course code
        #[arg(long)]
        course: String,
    },

    /// Record a grade for an enrolled student
    Grade {
        /// Student id
        #[arg(long)]
        student: String,

        /// Course code
        #[arg(long)]
        course: String,

        /// Grade value (free-form)
        #[arg(long)]
        grade: String,
    },

    /// Display a stored record
    Show {
        #[command(subcommand)]
        target: ShowTarget,
    },

    /// Show statistics about the stored records
    Stats,

    /// Write a starter roster.toml config
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Display a student by id
    Student { id: String },

    /// Display a course by code
    Course { code: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let file_config = config::load_config(None)?;
    let snapshot_path = config::resolve_snapshot_path(cli.snapshot, file_config.as_ref());

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            tracing::debug!("starting shell against {:?}", snapshot_path);
            let roster = snapshot::load(&snapshot_path)?;
            let stdin = std::io::stdin();
            let mut shell = Shell::new(stdin.lock(), roster, snapshot_path);
            shell.run()?;
        }

        Commands::AddStudent {
            id,
            name,
            age,
            address,
        } => {
            let mut roster = snapshot::load(&snapshot_path)?;
            let summary = roster.create_student(&id, &name, age, &address)?.summary();
            snapshot::save(&roster, &snapshot_path)?;
            ui::success(&format!("Student {} added successfully.", summary));
        }

        Commands::AddCourse {
            code,
            name,
            instructor,
        } => {
            let mut roster = snapshot::load(&snapshot_path)?;
            let summary = roster.create_course(&code, &name, &instructor)?.summary();
            snapshot::save(&roster, &snapshot_path)?;
            ui::success(&format!(
                "Course {} created with instructor {}.",
                summary, instructor
            ));
        }

        Commands::Enroll { student, course } => {
            let mut roster = snapshot::load(&snapshot_path)?;
            roster.enroll(&student, &course)?;
            snapshot::save(&roster, &snapshot_path)?;
            ui::success(&format!("Student {} enrolled in {}.", student, course));
        }

        Commands::Grade {
            student,
            course,
            grade,
        } => {
            let mut roster = snapshot::load(&snapshot_path)?;
            roster.assign_grade(&student, &course, &grade)?;
            snapshot::save(&roster, &snapshot_path)?;
            ui::success(&format!(
                "Grade {} added for student {} in {}.",
                grade, student, course
            ));
        }

        Commands::Show { target } => {
            let roster = snapshot::load(&snapshot_path)?;
            match target {
                ShowTarget::Student { id } => match roster.get_student(&id) {
                    Some(student) => {
                        ui::section(&format!("{} Student Information", ui::Icons::STUDENT));
                        println!("{}", ui::student_table(student));
                    }
                    None => anyhow::bail!("Student not found: {}", id),
                },
                ShowTarget::Course { code } => match roster.get_course(&code) {
                    Some(course) => {
                        ui::section(&format!("{} Course Information", ui::Icons::COURSE));
                        println!("{}", ui::course_table(course));
                    }
                    None => anyhow::bail!("Course not found: {}", code),
                },
            }
        }

        Commands::Stats => {
            let roster = snapshot::load(&snapshot_path)?;
            println!("{} Roster ({})", ui::Icons::STATS, snapshot_path.display());
            println!("------------------------------------");
            println!("{}", roster.stats());
        }

        Commands::Init { force } => {
            let config_path = config::default_config_path();
            let starter = config::RosterConfig {
                snapshot: Some(snapshot_path.display().to_string()),
            };
            config::write_config(&config_path, &starter, force)?;
            ui::success(&format!("Wrote {}", config_path.display()));
        }
    }

    Ok(())
}
