//! Core data models for the Admission Allocation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allocation_result;
mod applicant;
mod course;

pub use allocation_result::{AllocationResult, AllocationTrace, AuditStep};
pub use applicant::{Applicant, Grades, PreferenceRank};
pub use course::{Course, Enrollment};
