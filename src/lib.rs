//! University Admission Allocation Engine
//!
//! This crate reads an applicant roster, assigns each applicant to at most one
//! course across three preference rounds while respecting a per-course capacity,
//! and writes the per-course enrollment lists ranked by course score.

#![warn(missing_docs)]

pub mod allocation;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod roster;
pub mod telemetry;
