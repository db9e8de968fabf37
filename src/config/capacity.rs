//! Capacity input.

use std::io::BufRead;

use tracing::warn;

/// Reads the per-course capacity from the first whitespace-delimited token.
///
/// Anything that is not a non-negative integer, including empty input or a
/// read failure, yields 0 so the run continues with every course empty.
pub fn read_capacity<R: BufRead>(mut reader: R) -> usize {
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                warn!("No capacity given; defaulting to 0");
                return 0;
            }
            Ok(_) => {
                if let Some(token) = line.split_whitespace().next() {
                    return parse_capacity(token);
                }
            }
            Err(err) => {
                warn!(error = %err, "Failed to read capacity; defaulting to 0");
                return 0;
            }
        }
    }
}

fn parse_capacity(token: &str) -> usize {
    match token.parse() {
        Ok(capacity) => capacity,
        Err(_) => {
            warn!(input = token, "Capacity is not a non-negative integer; defaulting to 0");
            0
        }
    }
}
