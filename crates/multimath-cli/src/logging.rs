//! Diagnostic logging setup

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
#[must_use]
pub fn default_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::new(format!("multimath={0},multimath_cli={0}", verbosity.log_filter()))
}

/// Installs a stderr subscriber; later calls are no-ops
///
/// `RUST_LOG` takes precedence over the `-v`/`-q` derived level.
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbosity));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
