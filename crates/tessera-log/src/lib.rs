//! Structured logging for Tessera.
//!
//! Console output with uptime timestamps and module paths, plus optional JSON
//! file logging for post-mortem analysis of a generation run. The filter comes
//! from `RUST_LOG` when set, otherwise from the config `debug.log_level`.

use std::path::{Path, PathBuf};

use tessera_config::DebugConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";
const LOG_FILE: &str = "tessera.log";

/// Install the global tracing subscriber.
///
/// Writes JSON lines to `log_dir/tessera.log` when `debug.log_to_file` is set
/// and a directory is given. Returns the log file path only when the file
/// layer was actually installed. Calling this more than once keeps the first
/// subscriber and returns `None`.
pub fn init_logging(log_dir: Option<&Path>, debug: Option<&DebugConfig>) -> Option<PathBuf> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(debug)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let wants_file = debug.is_some_and(|d| d.log_to_file);
    if wants_file
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
    {
        let path = log_dir.join(LOG_FILE);
        if let Ok(log_file) = std::fs::File::create(&path) {
            let file_layer = fmt::layer()
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::uptime())
                .json();

            return subscriber.with(file_layer).try_init().ok().map(|()| path);
        }
    }

    let _ = subscriber.try_init();
    None
}

/// The filter string used when `RUST_LOG` is unset.
pub fn filter_directive(debug: Option<&DebugConfig>) -> String {
    match debug {
        Some(d) if !d.log_level.trim().is_empty() => d.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// An `EnvFilter` with the default directive.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter = default_env_filter();
        assert!(format!("{filter}").contains("info"));
    }

    #[test]
    fn test_filter_from_config() {
        let debug = DebugConfig {
            log_level: "warn,tessera_terrain=debug".to_string(),
            log_to_file: false,
        };
        assert_eq!(filter_directive(Some(&debug)), "warn,tessera_terrain=debug");
    }

    #[test]
    fn test_blank_level_falls_back() {
        let debug = DebugConfig {
            log_level: "  ".to_string(),
            log_to_file: false,
        };
        assert_eq!(filter_directive(Some(&debug)), DEFAULT_FILTER);
        assert_eq!(filter_directive(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_env_filter_parsing() {
        for directive in ["info", "debug,tessera_terrain=trace", "error"] {
            assert!(
                EnvFilter::try_new(directive).is_ok(),
                "Failed to parse filter: {directive}"
            );
        }
    }

    // Both calls share one test: the global subscriber can only be set once
    // per process.
    #[test]
    fn test_file_logging_creates_log_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("logs");
        let debug = DebugConfig {
            log_level: "debug".to_string(),
            log_to_file: true,
        };

        let path = init_logging(Some(&log_dir), Some(&debug)).unwrap();
        tracing::info!("file logging test");
        assert_eq!(path, log_dir.join(LOG_FILE));
        assert!(path.exists());

        let second_dir = temp_dir.path().join("second");
        assert_eq!(init_logging(Some(&second_dir), Some(&debug)), None);
    }
}
