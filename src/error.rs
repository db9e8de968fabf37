//! Error types for the Admission Allocation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every fatal condition in the pipeline. Malformed capacity input is
//! not represented here: it is recovered locally as a capacity of zero.

use thiserror::Error;

/// The main error type for the Admission Allocation Engine.
///
/// Any of these variants aborts the pipeline. Output files written before
/// the failure remain on disk.
///
/// # Example
///
/// ```
/// use admission_engine::error::AdmissionError;
///
/// let error = AdmissionError::RosterNotFound {
///     path: "applicants.txt".to_string(),
/// };
/// assert_eq!(error.to_string(), "Roster file not found: applicants.txt");
/// ```
#[derive(Debug, Error)]
pub enum AdmissionError {
    /// The roster file does not exist at the specified path.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The roster file exists but could not be read.
    #[error("Failed to read roster '{path}': {message}")]
    RosterRead {
        /// The roster path.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// A roster line had fewer than ten fields.
    #[error("Malformed roster line {line}: expected 10 fields, found {found}")]
    MalformedRecord {
        /// The 1-based line number.
        line: usize,
        /// The number of fields present on the line.
        found: usize,
    },

    /// A grade field could not be parsed as a number.
    #[error("Invalid {field} grade '{value}' on roster line {line}")]
    InvalidGrade {
        /// The 1-based line number.
        line: usize,
        /// The name of the grade field.
        field: String,
        /// The raw text that failed to parse.
        value: String,
    },

    /// An output file could not be created or written.
    #[error("Failed to write course list '{path}': {message}")]
    OutputWrite {
        /// The output file path.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

/// A type alias for Results that return AdmissionError.
pub type AdmissionResult<T> = Result<T, AdmissionError>;
