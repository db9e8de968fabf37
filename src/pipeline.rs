//! End-to-end allocation run.
//!
//! Loads the roster, allocates places and writes the course lists. The roster
//! is fully parsed before anything is written, so a malformed roster leaves no
//! output behind.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::allocation::allocate;
use crate::config::AdmissionConfig;
use crate::error::AdmissionResult;
use crate::output::write_course_lists;
use crate::roster::load_roster;

/// Counts and outputs from a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Applicants read from the roster.
    pub applicants: usize,
    /// Applicants admitted to a course.
    pub admitted: usize,
    /// Applicants left without a place.
    pub unassigned: usize,
    /// Course list files written, in course order.
    pub written: Vec<PathBuf>,
}

/// Runs the whole allocation described by `config`.
pub fn run(config: &AdmissionConfig) -> AdmissionResult<PipelineSummary> {
    let applicants = load_roster(&config.roster_path)?;
    let total = applicants.len();

    let result = allocate(applicants, config.capacity);
    info!(
        capacity = config.capacity,
        admitted = result.admitted_count(),
        unassigned = result.unassigned.len(),
        duration_us = result.trace.duration_us,
        "Allocation completed"
    );
    if let Ok(trace) = serde_json::to_string(&result.trace) {
        debug!(trace = %trace, "Allocation trace");
    }

    let written = write_course_lists(&config.output_dir, &result.enrollments)?;

    Ok(PipelineSummary {
        applicants: total,
        admitted: result.admitted_count(),
        unassigned: result.unassigned.len(),
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdmissionError;
    use std::fs;

    #[test]
    fn test_run_reports_counts() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let roster = dir.path().join("applicants.txt");
        fs::write(
            &roster,
            "Ann Lee 90 90 90 90 0 Physics Biotech Chemistry\n\
             Bob Ray 80 80 80 80 0 Physics Biotech Chemistry\n\
             Cal Fox 70 70 70 70 0 Physics Biotech Chemistry\n",
        )
        .unwrap();
        let config = AdmissionConfig::new(1)
            .with_roster_path(&roster)
            .with_output_dir(dir.path());

        let summary = run(&config).unwrap();

        assert_eq!(summary.applicants, 3);
        assert_eq!(summary.admitted, 3);
        assert_eq!(summary.unassigned, 0);
        assert_eq!(summary.written.len(), 5);
    }

    #[test]
    fn test_run_with_invalid_grade_writes_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let roster = dir.path().join("applicants.txt");
        fs::write(&roster, "Ann Lee 90 x 90 90 0 Physics Biotech Chemistry\n").unwrap();
        let config = AdmissionConfig::new(1)
            .with_roster_path(&roster)
            .with_output_dir(dir.path());

        let result = run(&config);

        assert!(matches!(result, Err(AdmissionError::InvalidGrade { .. })));
        assert!(!dir.path().join("physics.txt").exists());
    }
}
