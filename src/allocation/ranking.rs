//! Ranking order for a course.
//!
//! Applicants are ordered by course score, highest first, then by first name.
//! The sort is stable so applicants equal on both keys keep their relative order.

use std::cmp::Ordering;

use crate::models::{Applicant, Course};

use super::course_score;

/// Compares two applicants in ranking order for `course`.
///
/// Scores are recomputed on every comparison. Zero scores compare equal
/// regardless of sign.
pub fn compare_for_course(a: &Applicant, b: &Applicant, course: Course) -> Ordering {
    // -0.0 + 0.0 == +0.0
    let score_a = course_score(a, course) + 0.0;
    let score_b = course_score(b, course) + 0.0;

    score_b
        .total_cmp(&score_a)
        .then_with(|| a.first_name.cmp(&b.first_name))
}

/// Sorts `applicants` in ranking order for `course`.
pub fn rank_for_course(applicants: &mut [Applicant], course: Course) {
    applicants.sort_by(|a, b| compare_for_course(a, b, course));
}
