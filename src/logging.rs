//! Diagnostic logging.
//!
//! Logs go to stderr so that reports on stdout (and the MCP protocol stream)
//! stay clean. `CODETR_LOG` takes an `EnvFilter` directive and wins over the
//! verbosity flag.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CODETR_LOG";

pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "codetr=info" } else { "codetr=warn" }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
