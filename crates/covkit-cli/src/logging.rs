//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the level follows `-q` / `-v`.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Filter for the given verbosity, honouring `RUST_LOG`
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Install the global subscriber, logging to stderr.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init_tracing(verbosity: Verbosity, ansi: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init_tracing(Verbosity::Quiet, false);
        init_tracing(Verbosity::Debug, false);
        tracing::info!("still fine");
    }

    #[test]
    fn test_env_filter_builds() {
        let filter = env_filter(Verbosity::Verbose);
        assert!(!filter.to_string().is_empty());
    }
}
