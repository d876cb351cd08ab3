//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

use std::path::{Path, PathBuf};

use clap::Parser;

/// Path value that selects standard input
pub const STDIN_PATH: &str = "-";

/// bankers command-line arguments
#[derive(Parser, Debug)]
#[command(name = "bankers")]
#[command(about = "Check whether a resource-allocation snapshot is in a safe state")]
pub struct CheckArgs {
    /// Snapshot description file ("-" reads standard input)
    pub input: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the derived need matrix before the verdict
    #[arg(long)]
    pub show_need: bool,
}

impl CheckArgs {
    /// Check if the snapshot comes from standard input
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN_PATH)
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.verbose > 0 {
            return Err("--quiet cannot be combined with --verbose".to_string());
        }

        if self.input.as_os_str().is_empty() {
            return Err("input path must not be empty".to_string());
        }

        Ok(())
    }

    /// Default log level directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_stdin() {
        let args = CheckArgs::parse_from(["bankers", "-"]);
        assert!(args.reads_stdin());

        let args = CheckArgs::parse_from(["bankers", "input.txt"]);
        assert!(!args.reads_stdin());
    }

    #[test]
    fn test_log_level() {
        let args = CheckArgs::parse_from(["bankers", "input.txt"]);
        assert_eq!(args.log_level(), "warn");

        let args = CheckArgs::parse_from(["bankers", "-vv", "input.txt"]);
        assert_eq!(args.log_level(), "debug");

        let args = CheckArgs::parse_from(["bankers", "-vvvv", "input.txt"]);
        assert_eq!(args.log_level(), "trace");

        let args = CheckArgs::parse_from(["bankers", "--quiet", "input.txt"]);
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn test_validate() {
        let args = CheckArgs::parse_from(["bankers", "-q", "-v", "input.txt"]);
        assert!(args.validate().is_err());

        let args = CheckArgs::parse_from(["bankers", "--show-need", "input.txt"]);
        assert!(args.validate().is_ok());
        assert!(args.show_need);
    }

    #[test]
    fn test_input_required() {
        assert!(CheckArgs::try_parse_from(["bankers"]).is_err());
    }
}
