//! Roster loading for the Admission Allocation Engine.
//!
//! The roster is a flat text file with one applicant per line:
//!
//! ```text
//! first last physics chemistry maths computer_science admission_score choice1 choice2 choice3
//! ```

mod loader;

pub use loader::{ROSTER_FIELD_COUNT, load_roster, parse_record, parse_roster};
