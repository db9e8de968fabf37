//! Roster parsing.
//!
//! Any malformed line aborts the load; no partial roster is ever returned.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::info;

use crate::error::{AdmissionError, AdmissionResult};
use crate::models::{Applicant, Grades};

/// Number of whitespace-separated fields on a roster line.
pub const ROSTER_FIELD_COUNT: usize = 10;

const GRADE_FIELDS: [&str; 5] = [
    "physics",
    "chemistry",
    "maths",
    "computer_science",
    "admission_score",
];

/// Loads the roster file at `path`.
///
/// # Returns
///
/// Returns the applicants in file order, or an error if:
/// - The file does not exist (`RosterNotFound`)
/// - The file cannot be read (`RosterRead`)
/// - A line is malformed (`MalformedRecord` or `InvalidGrade`)
pub fn load_roster<P: AsRef<Path>>(path: P) -> AdmissionResult<Vec<Applicant>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AdmissionError::RosterNotFound {
            path: path_str.clone(),
        },
        _ => AdmissionError::RosterRead {
            path: path_str.clone(),
            message: e.to_string(),
        },
    })?;

    let applicants = parse_roster(BufReader::new(file), &path_str)?;
    info!(path = %path_str, applicants = applicants.len(), "Roster loaded");
    Ok(applicants)
}

/// Parses a roster from any buffered reader.
///
/// Blank lines are skipped. `source` names the input in read errors.
pub fn parse_roster<R: BufRead>(reader: R, source: &str) -> AdmissionResult<Vec<Applicant>> {
    let mut applicants = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| AdmissionError::RosterRead {
            path: source.to_string(),
            message: e.to_string(),
        })?;

        if line.trim().is_empty() {
            continue;
        }

        applicants.push(parse_record(&line, index + 1)?);
    }

    Ok(applicants)
}

/// Parses one roster line into an unenrolled applicant.
///
/// Tokens after the tenth field are ignored.
///
/// # Examples
///
/// ```
/// use admission_engine::roster::parse_record;
///
/// let applicant = parse_record(
///     "Ada Lovelace 81 62.5 99 90 70 Mathematics Physics Engineering",
///     1,
/// )
/// .unwrap();
/// assert_eq!(applicant.grades.chemistry, 62.5);
/// assert_eq!(applicant.preferences[0], "Mathematics");
/// assert!(!applicant.enrolled);
/// ```
pub fn parse_record(line: &str, line_number: usize) -> AdmissionResult<Applicant> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < ROSTER_FIELD_COUNT {
        return Err(AdmissionError::MalformedRecord {
            line: line_number,
            found: fields.len(),
        });
    }

    let mut grades = [0.0f64; 5];
    for (slot, (raw, field)) in grades
        .iter_mut()
        .zip(fields[2..7].iter().zip(GRADE_FIELDS))
    {
        *slot = raw.parse().map_err(|_| AdmissionError::InvalidGrade {
            line: line_number,
            field: field.to_string(),
            value: raw.to_string(),
        })?;
    }
    let [physics, chemistry, maths, computer_science, admission_score] = grades;

    Ok(Applicant {
        first_name: fields[0].to_string(),
        last_name: fields[1].to_string(),
        preferences: [
            fields[7].to_string(),
            fields[8].to_string(),
            fields[9].to_string(),
        ],
        grades: Grades {
            physics,
            chemistry,
            maths,
            computer_science,
            admission_score,
        },
        enrolled: false,
    })
}
