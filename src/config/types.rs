//! Run configuration types.

use std::path::{Path, PathBuf};

/// The roster path used when none is given, relative to the working directory.
pub const DEFAULT_ROSTER_PATH: &str = "applicants.txt";

/// Settings for a single allocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionConfig {
    /// Path of the applicant roster.
    pub roster_path: PathBuf,
    /// Directory the course lists are written to.
    pub output_dir: PathBuf,
    /// Number of places on every course.
    pub capacity: usize,
}

impl AdmissionConfig {
    /// Creates a configuration reading `applicants.txt` and writing to the
    /// working directory.
    pub fn new(capacity: usize) -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            output_dir: PathBuf::from("."),
            capacity,
        }
    }

    /// Replaces the roster path.
    pub fn with_roster_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.roster_path = path.as_ref().to_path_buf();
        self
    }

    /// Replaces the output directory.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_fixed_paths() {
        let config = AdmissionConfig::new(2);
        assert_eq!(config.roster_path, PathBuf::from("applicants.txt"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.capacity, 2);
    }

    #[test]
    fn test_overrides() {
        let config = AdmissionConfig::new(1)
            .with_roster_path("/data/roster.txt")
            .with_output_dir("/data/out");
        assert_eq!(config.roster_path, PathBuf::from("/data/roster.txt"));
        assert_eq!(config.output_dir, PathBuf::from("/data/out"));
        assert_eq!(config.capacity, 1);
    }
}
