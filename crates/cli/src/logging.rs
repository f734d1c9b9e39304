//! tracing setup for the binary.
//!
//! Logs go to stderr so they never mix with command output on stdout.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Pick the filter directive from the command-line flags and config.
///
/// 0 = info (or the configured filter), 1 = debug, 2+ = trace; quiet
/// overrides everything and shows errors only.
pub fn filter_directive(verbose_level: u8, quiet: bool, configured: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose_level {
        0 => configured.unwrap_or("info").to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber.
///
/// RUST_LOG, when set, takes precedence over the flags (except `--quiet`).
pub fn init_logging(verbose_level: u8, quiet: bool, configured: Option<&str>) -> Result<()> {
    let directive = filter_directive(verbose_level, quiet, configured);
    let filter = if quiet {
        EnvFilter::new(directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(0, false, None), "info");
        assert_eq!(filter_directive(0, false, Some("warn,store=debug")), "warn,store=debug");
        assert_eq!(filter_directive(1, false, Some("warn")), "debug");
        assert_eq!(filter_directive(3, false, None), "trace");
        assert_eq!(filter_directive(2, true, None), "error");
    }
}
