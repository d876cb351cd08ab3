//! Frameworks Layer: bankers CLI
//!
//! Provides the outermost layer of the workspace: the `bankers` binary that
//! reads a snapshot file, runs the safety check and prints the verdict.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: Command-line arguments (clap)
//! - **[`logging`](logging/index.html)**: `tracing` subscriber setup and the `BANKERS_LOG` override
//! - **[`app`](app/index.html)**: One invocation, from input path to report
//!
//! ## Exit Codes
//!
//! - `0`: The check ran, whether the verdict was safe or unsafe
//! - `1`: The input was missing, malformed, or allocation exceeded max
//! - `2`: Invalid command-line arguments (reported by clap)

pub mod app;
pub mod args;
pub mod logging;

pub use app::{run, CliError};
pub use args::CheckArgs;
pub use logging::init_logging;
