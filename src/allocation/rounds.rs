//! Preference round assignment.
//!
//! A round fills one course from applicants who list it at one preference
//! rank. [`allocate`] runs every rank across every course, in order, over a
//! shrinking pool of unassigned applicants.

use std::time::Instant;

use tracing::debug;

use crate::models::{
    AllocationResult, AllocationTrace, Applicant, AuditStep, Course, Enrollment, PreferenceRank,
};

use super::rank_for_course;

/// The outcome of a single preference round.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// Applicants still unassigned after the round, in ranked order.
    pub pool: Vec<Applicant>,
    /// Full names of applicants admitted this round, in admission order.
    pub admitted: Vec<String>,
}

/// Runs one preference round for a course.
///
/// The pool is ranked for the enrollment's course and walked in order. Every
/// applicant who lists the course at `rank` is admitted while the course has
/// space under `capacity`. Admitted applicants are marked enrolled, appended to
/// the enrollment and left out of the returned pool.
///
/// # Examples
///
/// ```
/// use admission_engine::allocation::assign_round;
/// use admission_engine::models::{Applicant, Course, Enrollment, Grades, PreferenceRank};
///
/// let applicant = Applicant {
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
///     preferences: [
///         "Mathematics".to_string(),
///         "Physics".to_string(),
///         "Engineering".to_string(),
///     ],
///     grades: Grades::default(),
///     enrolled: false,
/// };
///
/// let mut enrollment = Enrollment::new(Course::Mathematics);
/// let outcome = assign_round(vec![applicant], &mut enrollment, PreferenceRank::First, 1);
/// assert!(outcome.pool.is_empty());
/// assert_eq!(outcome.admitted, vec!["Ada Lovelace"]);
/// assert!(enrollment.applicants[0].enrolled);
/// ```
pub fn assign_round(
    mut pool: Vec<Applicant>,
    enrollment: &mut Enrollment,
    rank: PreferenceRank,
    capacity: usize,
) -> RoundOutcome {
    let course = enrollment.course;
    rank_for_course(&mut pool, course);

    let mut remaining = Vec::with_capacity(pool.len());
    let mut admitted = Vec::new();

    for mut applicant in pool {
        if applicant.prefers(course, rank) && enrollment.has_space(capacity) {
            applicant.enrolled = true;
            admitted.push(applicant.full_name());
            enrollment.applicants.push(applicant);
        } else {
            remaining.push(applicant);
        }
    }

    RoundOutcome {
        pool: remaining,
        admitted,
    }
}

/// Allocates applicants to courses across all preference rounds.
///
/// Rounds run rank by rank; within a rank courses are filled in
/// [`Course::ALL`] order. An applicant admitted in any round is never
/// considered again.
///
/// # Arguments
///
/// * `applicants` - The roster, in file order
/// * `capacity` - The number of places on every course
pub fn allocate(applicants: Vec<Applicant>, capacity: usize) -> AllocationResult {
    let start_time = Instant::now();

    let mut enrollments: Vec<Enrollment> = Course::ALL.iter().map(|&c| Enrollment::new(c)).collect();
    let mut pool: Vec<Applicant> = applicants.into_iter().filter(|a| !a.enrolled).collect();
    let mut steps = Vec::with_capacity(PreferenceRank::ALL.len() * Course::ALL.len());

    for rank in PreferenceRank::ALL {
        for enrollment in enrollments.iter_mut() {
            let pool_before = pool.len();
            let outcome = assign_round(pool, enrollment, rank, capacity);
            pool = outcome.pool;

            let remaining_capacity = enrollment.remaining(capacity);
            debug!(
                course = %enrollment.course,
                rank = rank.number(),
                admitted = outcome.admitted.len(),
                remaining_capacity,
                unassigned = pool.len(),
                "Preference round completed"
            );

            steps.push(AuditStep {
                step_number: steps.len() as u32 + 1,
                course: enrollment.course,
                rank,
                pool_before,
                pool_after: pool.len(),
                reasoning: format!(
                    "Admitted {} of {} unassigned applicants with {} as choice {}; {} places left",
                    outcome.admitted.len(),
                    pool_before,
                    enrollment.course,
                    rank.number(),
                    remaining_capacity
                ),
                admitted: outcome.admitted,
                remaining_capacity,
            });
        }
    }

    AllocationResult {
        enrollments,
        unassigned: pool,
        trace: AllocationTrace {
            steps,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}
