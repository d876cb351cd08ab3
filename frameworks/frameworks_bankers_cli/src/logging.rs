//! Logging Setup Module
//!
//! Installs the global `tracing` subscriber. Logs go to standard error so that
//! standard output only ever carries the report.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive that overrides `-v`/`-q`
pub const LOG_ENV_VAR: &str = "BANKERS_LOG";

/// Build the filter: `BANKERS_LOG` when set and non-empty, otherwise `default_level`
pub fn build_filter(env_directive: Option<&str>, default_level: &str) -> Result<EnvFilter, String> {
    match env_directive.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| format!("invalid {} directive {:?}: {}", LOG_ENV_VAR, directive, e)),
        None => EnvFilter::try_new(default_level).map_err(|e| e.to_string()),
    }
}

/// Install the stderr subscriber
///
/// # Arguments
/// * `default_level` - Level used when `BANKERS_LOG` is unset
pub fn init_logging(default_level: &str) -> Result<(), String> {
    let env_directive = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(env_directive.as_deref(), default_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("failed to install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_used_without_env() {
        assert!(build_filter(None, "debug").is_ok());
        assert!(build_filter(Some("  "), "warn").is_ok());
    }

    #[test]
    fn test_env_directive_overrides() {
        assert!(build_filter(Some("usecases_safety_check=trace"), "usecases_safety_check=loudest").is_ok());
    }

    #[test]
    fn test_invalid_env_directive() {
        let err = build_filter(Some("usecases_safety_check=loudest"), "warn").unwrap_err();
        assert!(err.contains(LOG_ENV_VAR));
    }
}
