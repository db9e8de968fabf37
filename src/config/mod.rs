//! Configuration for the Admission Allocation Engine.
//!
//! This module provides the run configuration and the capacity reader.
//! The capacity is read from standard input by the binary and threaded
//! explicitly into allocation.
//!
//! # Example
//!
//! ```
//! use admission_engine::config::{AdmissionConfig, read_capacity};
//!
//! let capacity = read_capacity("3\n".as_bytes());
//! let config = AdmissionConfig::new(capacity);
//! assert_eq!(config.capacity, 3);
//! assert_eq!(config.roster_path.to_str(), Some("applicants.txt"));
//! ```

mod capacity;
mod types;

pub use capacity::read_capacity;
pub use types::{AdmissionConfig, DEFAULT_ROSTER_PATH};
