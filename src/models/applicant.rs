//! Applicant model and related types.
//!
//! This module defines the Applicant struct, the grades it carries, and the
//! PreferenceRank enum used to address its three ranked course choices.

use serde::Serialize;

use super::Course;

/// One of an applicant's three ranked course choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceRank {
    /// The applicant's first choice.
    First,
    /// The applicant's second choice.
    Second,
    /// The applicant's third choice.
    Third,
}

impl PreferenceRank {
    /// All ranks in the order their rounds are processed.
    pub const ALL: [PreferenceRank; 3] = [
        PreferenceRank::First,
        PreferenceRank::Second,
        PreferenceRank::Third,
    ];

    /// Returns the 1-based rank number.
    pub fn number(self) -> u8 {
        match self {
            PreferenceRank::First => 1,
            PreferenceRank::Second => 2,
            PreferenceRank::Third => 3,
        }
    }

    fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

/// The subject grades recorded for an applicant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Grades {
    /// Physics exam grade.
    pub physics: f64,
    /// Chemistry exam grade.
    pub chemistry: f64,
    /// Mathematics exam grade.
    pub maths: f64,
    /// Computer science exam grade.
    pub computer_science: f64,
    /// Special admission score; used instead of the subject grades when higher.
    pub admission_score: f64,
}

/// Represents a single applicant from the roster.
///
/// Everything except `enrolled` is fixed once the roster is loaded.
/// `enrolled` flips to `true` exactly once, when the applicant is admitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Applicant {
    /// The applicant's first name; also the ranking tie-break key.
    pub first_name: String,
    /// The applicant's last name.
    pub last_name: String,
    /// Course names in preference order, kept exactly as written in the roster.
    pub preferences: [String; 3],
    /// The applicant's grades.
    pub grades: Grades,
    /// Whether the applicant has been admitted to a course.
    pub enrolled: bool,
}

impl Applicant {
    /// Returns the course name listed at the given rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use admission_engine::models::{Applicant, Grades, PreferenceRank};
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
    /// assert_eq!(applicant.preference(PreferenceRank::Second), "Physics");
    /// ```
    pub fn preference(&self, rank: PreferenceRank) -> &str {
        &self.preferences[rank.index()]
    }

    /// Returns true if the applicant lists `course` at `rank`.
    ///
    /// Names are compared verbatim, so a misspelled preference never matches.
    pub fn prefers(&self, course: Course, rank: PreferenceRank) -> bool {
        self.preference(rank) == course.name()
    }

    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
