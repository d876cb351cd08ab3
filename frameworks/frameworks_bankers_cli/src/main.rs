//! bankers Binary Entry Point
//!
//! Reads a resource-allocation snapshot and reports whether it is in a safe
//! state, printing the completion order (full or partial).

use std::io;
use std::process;

use clap::Parser;
use frameworks_bankers_cli::{init_logging, run, CheckArgs};
use tracing::debug;

fn main() {
    let args = CheckArgs::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        process::exit(2);
    }

    if let Err(e) = init_logging(args.log_level()) {
        eprintln!("Warning: {}", e);
        // Continue without logging
    }

    let stdout = io::stdout();
    match run(&args, stdout.lock()) {
        Ok(_) => process::exit(0),
        Err(e) => {
            debug!(input = %args.input.display(), error = ?e, "safety check aborted");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
