//! Allocation logic for the Admission Allocation Engine.
//!
//! This module contains the course scoring table, the ranking order used both
//! for admission and for output, a single preference round, and the driver
//! that runs all fifteen rounds (three ranks across five courses).

mod ranking;
mod rounds;
mod scoring;

pub use ranking::{compare_for_course, rank_for_course};
pub use rounds::{RoundOutcome, allocate, assign_round};
pub use scoring::{ScoringRule, Subject, course_score, mean, scoring_rule};
