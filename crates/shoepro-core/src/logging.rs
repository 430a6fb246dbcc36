//! Tracing subscriber setup shared by the desktop app and the CLI.
//!
//! `RUST_LOG` takes precedence over the configured level, so
//! `RUST_LOG=shoepro_core=debug` still works for ad-hoc debugging.

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Filter used when `RUST_LOG` is unset.
///
/// Noisy dependencies are held at `warn`.
pub fn default_filter(level: LogLevel) -> String {
    format!("{level},hyper=warn,reqwest=warn,tao=warn,wry=warn")
}

/// Install the global fmt subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_starts_with_level() {
        assert!(default_filter(LogLevel::Debug).starts_with("debug,"));
        assert!(default_filter(LogLevel::Warn).contains("reqwest=warn"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(LogLevel::Info);
        init(LogLevel::Debug);
    }
}
