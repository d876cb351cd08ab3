//! Report Module
//!
//! Renders a `SafetyOutcome` as console text. Every process is written as
//! `P(<index>) ` with a trailing space, and the order line ends with a newline.

use std::fmt::Write as _;
use std::io::{self, Write};

use entities_resources::ResourceMatrix;
use usecases_safety_check::{SafetyOutcome, Verdict};

/// Render the verdict and completion order
///
/// Safe:
/// ```text
/// System is in safe state.
/// Safe process order: P(1) P(3) P(4) P(0) P(2)
/// ```
///
/// Unsafe:
/// ```text
/// System is in unsafe state.
/// Number of processes completed: 2
/// Partial process order: P(1) P(3)
/// ```
pub fn render_report(outcome: &SafetyOutcome) -> String {
    let mut out = String::new();
    match outcome.verdict() {
        Verdict::Safe => {
            out.push_str("System is in safe state.\n");
            out.push_str("Safe process order: ");
        }
        Verdict::Unsafe => {
            out.push_str("System is in unsafe state.\n");
            let _ = writeln!(out, "Number of processes completed: {}", outcome.completed_count());
            out.push_str("Partial process order: ");
        }
    }
    for process in &outcome.order()[..outcome.completed_count()] {
        let _ = write!(out, "P({}) ", process);
    }
    out.push('\n');
    out
}

/// Write the rendered report to `writer`
pub fn write_report<W: Write>(mut writer: W, outcome: &SafetyOutcome) -> io::Result<()> {
    writer.write_all(render_report(outcome).as_bytes())?;
    writer.flush()
}

/// Render the derived need matrix, one process per line
pub fn render_need_matrix(need: &ResourceMatrix) -> String {
    let mut out = String::from("Need matrix:\n");
    for (process, row) in need.iter_rows().enumerate() {
        let cells: Vec<String> = row.iter().map(|units| units.to_string()).collect();
        let _ = writeln!(out, "P({}): {}", process, cells.join(" "));
    }
    out
}
