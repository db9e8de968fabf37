//! Allocation result models for the Admission Allocation Engine.
//!
//! This module contains the [`AllocationResult`] type and the audit trace that
//! records every round of the allocation for transparency.

use serde::Serialize;

use super::{Applicant, Course, Enrollment, PreferenceRank};

/// A single round in the audit trace.
///
/// One step is recorded for every (rank, course) pair, fifteen in total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The course being filled.
    pub course: Course,
    /// The preference rank being matched.
    pub rank: PreferenceRank,
    /// Size of the unassigned pool when the round started.
    pub pool_before: usize,
    /// Size of the unassigned pool when the round finished.
    pub pool_after: usize,
    /// Full names of the applicants admitted this round, in admission order.
    pub admitted: Vec<String>,
    /// Places left on the course after the round.
    pub remaining_capacity: usize,
    /// Human-readable explanation of the round.
    pub reasoning: String,
}

/// The complete audit trace for an allocation.
///
/// # Example
///
/// ```
/// use admission_engine::models::AllocationTrace;
///
/// let trace = AllocationTrace {
///     steps: vec![],
///     duration_us: 42,
/// };
/// assert_eq!(trace.total_admitted(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AllocationTrace {
    /// The rounds in execution order.
    pub steps: Vec<AuditStep>,
    /// The total allocation duration in microseconds.
    pub duration_us: u64,
}

impl AllocationTrace {
    /// Returns the number of admissions across all recorded rounds.
    pub fn total_admitted(&self) -> usize {
        self.steps.iter().map(|step| step.admitted.len()).sum()
    }
}

/// The outcome of running all preference rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationResult {
    /// One enrollment per course, in [`Course::ALL`] order.
    pub enrollments: Vec<Enrollment>,
    /// Applicants left without a place, in final pool order.
    pub unassigned: Vec<Applicant>,
    /// Round-by-round record of the allocation.
    pub trace: AllocationTrace,
}

impl AllocationResult {
    /// Returns the enrollment for `course`.
    pub fn enrollment(&self, course: Course) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.course == course)
    }

    /// Returns the total number of admitted applicants.
    pub fn admitted_count(&self) -> usize {
        self.enrollments.iter().map(Enrollment::len).sum()
    }
}
