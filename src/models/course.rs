//! Course model.
//!
//! The set of courses is closed; [`Course::ALL`] fixes the order in which
//! courses are processed within a preference round and emitted.

use std::fmt;

use serde::Serialize;

use super::Applicant;

/// A course offered by the university.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Course {
    /// Biotech, ranked by the mean of chemistry and physics.
    Biotech,
    /// Chemistry, ranked by the chemistry grade.
    Chemistry,
    /// Engineering, ranked by the mean of computer science and maths.
    Engineering,
    /// Mathematics, ranked by the maths grade.
    Mathematics,
    /// Physics, ranked by the mean of physics and maths.
    Physics,
}

impl Course {
    /// All courses in processing order.
    pub const ALL: [Course; 5] = [
        Course::Biotech,
        Course::Chemistry,
        Course::Engineering,
        Course::Mathematics,
        Course::Physics,
    ];

    /// Returns the course name as it appears in applicant preferences.
    pub fn name(self) -> &'static str {
        match self {
            Course::Biotech => "Biotech",
            Course::Chemistry => "Chemistry",
            Course::Engineering => "Engineering",
            Course::Mathematics => "Mathematics",
            Course::Physics => "Physics",
        }
    }

    /// Returns the output file name, e.g. `biotech.txt`.
    pub fn file_name(self) -> String {
        format!("{}.txt", self.name().to_lowercase())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The applicants admitted to a single course.
///
/// During allocation `applicants` is in admission order; the emitter
/// re-ranks it before writing.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    /// The course.
    pub course: Course,
    /// Admitted applicants.
    pub applicants: Vec<Applicant>,
}

impl Enrollment {
    /// Creates an empty enrollment for `course`.
    pub fn new(course: Course) -> Self {
        Self {
            course,
            applicants: Vec::new(),
        }
    }

    /// Returns the number of admitted applicants.
    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    /// Returns true if nobody has been admitted.
    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    /// Returns true if another applicant fits under `capacity`.
    pub fn has_space(&self, capacity: usize) -> bool {
        self.applicants.len() < capacity
    }

    /// Returns how many places are left under `capacity`.
    pub fn remaining(&self, capacity: usize) -> usize {
        capacity.saturating_sub(self.applicants.len())
    }
}
