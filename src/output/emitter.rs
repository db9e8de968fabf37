//! Course list emitter.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::allocation::{compare_for_course, course_score};
use crate::error::{AdmissionError, AdmissionResult};
use crate::models::{Applicant, Enrollment};

/// Renders an enrollment as course list text.
///
/// Applicants are re-ranked for the course with freshly computed scores, so
/// the result does not depend on admission order.
///
/// # Examples
///
/// ```
/// use admission_engine::models::{Applicant, Course, Enrollment, Grades};
/// use admission_engine::output::format_course_list;
///
/// let mut enrollment = Enrollment::new(Course::Chemistry);
/// enrollment.applicants.push(Applicant {
///     first_name: "Marie".to_string(),
///     last_name: "Curie".to_string(),
///     preferences: [
///         "Chemistry".to_string(),
///         "Physics".to_string(),
///         "Biotech".to_string(),
///     ],
///     grades: Grades {
///         chemistry: 97.5,
///         ..Grades::default()
///     },
///     enrolled: true,
/// });
/// assert_eq!(format_course_list(&enrollment), "Marie Curie 97.50\n");
/// ```
pub fn format_course_list(enrollment: &Enrollment) -> String {
    let course = enrollment.course;
    let mut ranked: Vec<&Applicant> = enrollment.applicants.iter().collect();
    ranked.sort_by(|a, b| compare_for_course(a, b, course));

    ranked
        .into_iter()
        .map(|applicant| {
            format!(
                "{} {} {:.2}\n",
                applicant.first_name,
                applicant.last_name,
                course_score(applicant, course)
            )
        })
        .collect()
}

/// Writes one enrollment to `dir`, replacing any existing file.
///
/// Returns the path written.
pub fn write_course_list(dir: &Path, enrollment: &Enrollment) -> AdmissionResult<PathBuf> {
    let path = dir.join(enrollment.course.file_name());
    let write_error = |e: std::io::Error| AdmissionError::OutputWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let file = File::create(&path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(format_course_list(enrollment).as_bytes())
        .map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    info!(
        course = %enrollment.course,
        path = %path.display(),
        applicants = enrollment.len(),
        "Course list written"
    );
    Ok(path)
}

/// Writes every enrollment to `dir`, in order.
///
/// Stops at the first failure; lists already written stay on disk.
pub fn write_course_lists(dir: &Path, enrollments: &[Enrollment]) -> AdmissionResult<Vec<PathBuf>> {
    enrollments
        .iter()
        .map(|enrollment| write_course_list(dir, enrollment))
        .collect()
}
