//! Course list output.
//!
//! Each course is written to `<lowercased course name>.txt` with one line per
//! admitted applicant: `first last score`, score to two decimal places.

mod emitter;

pub use emitter::{format_course_list, write_course_list, write_course_lists};
