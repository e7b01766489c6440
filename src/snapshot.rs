//! Snapshot codec - flat-file JSON persistence
//!
//! System of record on disk is a single JSON document with two top-level
//! collections:
//! - `students`: student_id → student record
//! - `courses`: course_code → course record
//!
//! The field names inside each record are the compatibility surface for
//! existing snapshot files and must be reproduced verbatim. Every field
//! is present even when empty. Collections serialize in sorted key order
//! so repeated saves of the same store are byte-identical.
//!
//! A missing snapshot file is not an error: loading one yields an empty
//! store. Loading performs no cross-check of enrollment invariants, so an
//! externally edited file can restore an inconsistent state as-is.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::roster::Roster;
use crate::student::Student;
use crate::{Error, Result};

/// On-disk shape of the full store.
///
/// `BTreeMap` keeps the encoding deterministic; the in-memory store is
/// rebuilt into its own keyed collections on load.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    students: BTreeMap<String, Student>,
    courses: BTreeMap<String, Course>,
}

impl Snapshot {
    /// Capture the full content of a roster
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            students: roster
                .all_students()
                .map(|s| (s.student_id.clone(), s.clone()))
                .collect(),
            courses: roster
                .all_courses()
                .map(|c| (c.course_code.clone(), c.clone()))
                .collect(),
        }
    }

    /// Rebuild the roster this snapshot was captured from.
    ///
    /// No validation beyond shape: enrollment consistency is whatever the
    /// snapshot says it is.
    pub fn into_roster(self) -> Roster {
        Roster::from_parts(
            self.students.into_iter().collect(),
            self.courses.into_iter().collect(),
        )
    }
}

/// Encode a roster as pretty-printed JSON
pub fn to_json(roster: &Roster) -> Result<String> {
    serde_json::to_string_pretty(&Snapshot::from_roster(roster))
        .map_err(|e| Error::MalformedData(e.to_string()))
}

/// Decode a roster from JSON produced by [`to_json`].
///
/// Fails with [`Error::MalformedData`] when the document is not valid
/// JSON or does not match the expected shape (missing required field,
/// wrong primitive type).
pub fn from_json(data: &str) -> Result<Roster> {
    let snapshot: Snapshot =
        serde_json::from_str(data).map_err(|e| Error::MalformedData(e.to_string()))?;
    Ok(snapshot.into_roster())
}

/// Save the full store content to `path`.
///
/// Writes to a temporary sibling file and renames it over the target, so
/// a failure partway through writing never leaves a truncated snapshot
/// in place of a valid one.
pub fn save(roster: &Roster, path: &Path) -> Result<()> {
    let json = to_json(roster)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);

    fs::write(&tmp, &json)?;
    fs::rename(&tmp, path)?;

    tracing::debug!(
        "snapshot saved to {} ({} bytes)",
        path.display(),
        json.len()
    );
    Ok(())
}

/// Load the full store content from `path`.
///
/// A missing file yields an empty roster rather than an error; any other
/// IO failure or shape mismatch is reported.
pub fn load(path: &Path) -> Result<Roster> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let roster = from_json(&contents)?;
            tracing::debug!(
                "snapshot loaded from {} ({} students, {} courses)",
                path.display(),
                roster.student_count(),
                roster.course_count()
            );
            Ok(roster)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("no snapshot at {}, starting empty", path.display());
            Ok(Roster::new())
        }
        Err(err) => Err(err.into()),
    }
}
