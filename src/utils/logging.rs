//! Diagnostics for fie.
//!
//! Logs go to stderr so the listing on stdout stays clean. The filter is read from
//! `FIE_LOG` (e.g. `FIE_LOG=debug`) and defaults to warnings only.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "FIE_LOG";

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
