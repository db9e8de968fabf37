//! Course score calculation.
//!
//! Each course ranks applicants by a fixed rule over their subject grades.
//! The applicant's admission score replaces the rule's result when it is
//! strictly higher.

use crate::models::{Applicant, Course, Grades};

/// A graded subject that a scoring rule can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// Physics.
    Physics,
    /// Chemistry.
    Chemistry,
    /// Mathematics.
    Maths,
    /// Computer science.
    ComputerScience,
}

impl Subject {
    /// Returns this subject's grade from `grades`.
    pub fn grade(self, grades: &Grades) -> f64 {
        match self {
            Subject::Physics => grades.physics,
            Subject::Chemistry => grades.chemistry,
            Subject::Maths => grades.maths,
            Subject::ComputerScience => grades.computer_science,
        }
    }
}

/// How a course combines subject grades into a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringRule {
    /// The grade of one subject.
    Single(Subject),
    /// The arithmetic mean of two subjects.
    Mean(Subject, Subject),
}

impl ScoringRule {
    /// Applies the rule to `grades`, ignoring the admission score.
    pub fn apply(self, grades: &Grades) -> f64 {
        match self {
            ScoringRule::Single(subject) => subject.grade(grades),
            ScoringRule::Mean(a, b) => mean(a.grade(grades), b.grade(grades)),
        }
    }
}

/// Returns the scoring rule for `course`.
pub fn scoring_rule(course: Course) -> ScoringRule {
    match course {
        Course::Biotech => ScoringRule::Mean(Subject::Chemistry, Subject::Physics),
        Course::Chemistry => ScoringRule::Single(Subject::Chemistry),
        Course::Engineering => ScoringRule::Mean(Subject::ComputerScience, Subject::Maths),
        Course::Mathematics => ScoringRule::Single(Subject::Maths),
        Course::Physics => ScoringRule::Mean(Subject::Physics, Subject::Maths),
    }
}

/// Returns the arithmetic mean of two grades.
pub fn mean(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

/// Calculates the score used to rank `applicant` for `course`.
///
/// # Examples
///
/// ```
/// use admission_engine::allocation::course_score;
/// use admission_engine::models::{Applicant, Course, Grades};
///
/// let applicant = Applicant {
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
///     preferences: [
///         "Physics".to_string(),
///         "Mathematics".to_string(),
///         "Engineering".to_string(),
///     ],
///     grades: Grades {
///         physics: 80.0,
///         chemistry: 50.0,
///         maths: 90.0,
///         computer_science: 70.0,
///         admission_score: 60.0,
///     },
///     enrolled: false,
/// };
/// assert_eq!(course_score(&applicant, Course::Physics), 85.0);
/// assert_eq!(course_score(&applicant, Course::Chemistry), 60.0);
/// ```
pub fn course_score(applicant: &Applicant, course: Course) -> f64 {
    let grades = &applicant.grades;
    let score = scoring_rule(course).apply(grades);

    if grades.admission_score > score {
        grades.admission_score
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_applicant(grades: Grades) -> Applicant {
        Applicant {
            first_name: "Test".to_string(),
            last_name: "Applicant".to_string(),
            preferences: [
                "Biotech".to_string(),
                "Chemistry".to_string(),
                "Physics".to_string(),
            ],
            grades,
            enrolled: false,
        }
    }

    fn sample_grades() -> Grades {
        Grades {
            physics: 60.0,
            chemistry: 70.0,
            maths: 80.0,
            computer_science: 90.0,
            admission_score: 0.0,
        }
    }

    #[test]
    fn test_biotech_is_mean_of_chemistry_and_physics() {
        let applicant = create_applicant(sample_grades());
        assert_eq!(course_score(&applicant, Course::Biotech), 65.0);
    }

    #[test]
    fn test_chemistry_is_chemistry_grade() {
        let applicant = create_applicant(sample_grades());
        assert_eq!(course_score(&applicant, Course::Chemistry), 70.0);
    }

    #[test]
    fn test_engineering_is_mean_of_computer_science_and_maths() {
        let applicant = create_applicant(sample_grades());
        assert_eq!(course_score(&applicant, Course::Engineering), 85.0);
    }

    #[test]
    fn test_mathematics_is_maths_grade() {
        let applicant = create_applicant(sample_grades());
        assert_eq!(course_score(&applicant, Course::Mathematics), 80.0);
    }

    #[test]
    fn test_physics_is_mean_of_physics_and_maths() {
        let applicant = create_applicant(sample_grades());
        assert_eq!(course_score(&applicant, Course::Physics), 70.0);
    }

    #[test]
    fn test_admission_score_replaces_lower_course_grade() {
        let mut grades = sample_grades();
        grades.admission_score = 75.0;
        let applicant = create_applicant(grades);

        assert_eq!(course_score(&applicant, Course::Biotech), 75.0);
        assert_eq!(course_score(&applicant, Course::Mathematics), 80.0);
        assert_eq!(course_score(&applicant, Course::Engineering), 85.0);
    }

    #[test]
    fn test_admission_score_equal_to_course_grade() {
        let mut grades = sample_grades();
        grades.admission_score = 70.0;
        let applicant = create_applicant(grades);
        assert_eq!(course_score(&applicant, Course::Chemistry), 70.0);
    }

    #[test]
    fn test_mean_handles_fractions() {
        assert_eq!(mean(85.5, 90.0), 87.75);
    }

    proptest! {
        #[test]
        fn prop_score_is_max_of_rule_and_admission_score(
            physics in 0.0f64..100.0,
            chemistry in 0.0f64..100.0,
            maths in 0.0f64..100.0,
            computer_science in 0.0f64..100.0,
            admission_score in 0.0f64..100.0,
            course_index in 0usize..5,
        ) {
            let grades = Grades { physics, chemistry, maths, computer_science, admission_score };
            let course = Course::ALL[course_index];
            let applicant = create_applicant(grades);
            let rule_score = scoring_rule(course).apply(&grades);

            let score = course_score(&applicant, course);
            prop_assert!(score >= admission_score);
            prop_assert!(score >= rule_score);
            prop_assert!(score == admission_score || score == rule_score);
        }
    }
}
