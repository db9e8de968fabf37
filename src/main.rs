//! Command-line entry point.
//!
//! Reads the per-course capacity from standard input, allocates the roster in
//! `applicants.txt` and writes one list per course to the working directory.

use std::io;

use admission_engine::config::{AdmissionConfig, read_capacity};
use admission_engine::error::AdmissionResult;
use admission_engine::pipeline;
use admission_engine::telemetry::{self, DEFAULT_LOG_FILTER};
use tracing::info;

fn main() {
    if let Err(err) = telemetry::init(DEFAULT_LOG_FILTER) {
        eprintln!("logging disabled: {err}");
    }

    if let Err(err) = run() {
        eprintln!("admission error: {err}");
        std::process::exit(1);
    }
}

fn run() -> AdmissionResult<()> {
    let capacity = read_capacity(io::stdin().lock());
    let config = AdmissionConfig::new(capacity);

    let summary = pipeline::run(&config)?;
    info!(
        applicants = summary.applicants,
        admitted = summary.admitted,
        unassigned = summary.unassigned,
        files = summary.written.len(),
        "Admission run completed"
    );
    Ok(())
}
