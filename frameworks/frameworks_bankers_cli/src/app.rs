//! Application Module
//!
//! Wires loader, need derivation, simulation and reporter together for one
//! invocation of the `bankers` tool.

use std::fmt;
use std::io::{self, Write};

use adapters_snapshot_io::{
    load_snapshot, read_snapshot, render_need_matrix, write_report, SnapshotLoadError,
};
use entities_resources::Snapshot;
use tracing::info;
use usecases_safety_check::{derive_needs, simulate, SafetyError, SafetyOutcome};

use crate::args::CheckArgs;

/// Load the snapshot, run the safety check and write the report to `out`
///
/// An unsafe verdict is a successful run. Errors are returned before anything
/// is written to `out`.
pub fn run<W: Write>(args: &CheckArgs, mut out: W) -> Result<SafetyOutcome, CliError> {
    let snapshot = load(args)?;
    info!(
        processes = snapshot.num_processes(),
        resources = snapshot.num_resources(),
        "snapshot loaded"
    );

    let need = derive_needs(snapshot.allocation(), snapshot.max())?;
    let outcome = simulate(&need, snapshot.allocation(), snapshot.available());

    if args.show_need {
        out.write_all(render_need_matrix(&need).as_bytes())
            .map_err(CliError::Output)?;
    }
    write_report(&mut out, &outcome).map_err(CliError::Output)?;
    Ok(outcome)
}

fn load(args: &CheckArgs) -> Result<Snapshot, SnapshotLoadError> {
    if args.reads_stdin() {
        read_snapshot(io::stdin().lock())
    } else {
        load_snapshot(&args.input)
    }
}

/// Fatal errors for one invocation
#[derive(Debug)]
pub enum CliError {
    /// The snapshot could not be loaded
    Load(SnapshotLoadError),
    /// The snapshot was loaded but cannot be evaluated
    Safety(SafetyError),
    /// Writing the report failed
    Output(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Load(e) => write!(f, "{}", e),
            CliError::Safety(e) => write!(f, "{}", e),
            CliError::Output(e) => write!(f, "Failed to write report: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Load(e) => Some(e),
            CliError::Safety(e) => Some(e),
            CliError::Output(e) => Some(e),
        }
    }
}

impl From<SnapshotLoadError> for CliError {
    fn from(e: SnapshotLoadError) -> Self {
        CliError::Load(e)
    }
}

impl From<SafetyError> for CliError {
    fn from(e: SafetyError) -> Self {
        CliError::Safety(e)
    }
}
