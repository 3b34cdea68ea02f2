//! Logging setup. Components log through `tracing`; the subscriber is
//! installed once by the binary.

use std::fs::{create_dir_all, File};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use chrono::Local;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{ErrorContext, MigrationResult};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the verbosity flags. With `save_log` a plain copy of
/// the log is written under the user cache directory and its path returned.
pub fn init_logging(verbosity: u8, quiet: bool, save_log: bool) -> MigrationResult<Option<PathBuf>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbosity, quiet)))
        .context("Invalid log filter")?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal());

    let (file_layer, log_path) = if save_log {
        let path = default_log_path();
        if let Some(dir) = path.parent() {
            create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        }
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        let layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_target(false)
            .with_ansi(false);
        (Some(layer), Some(path))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(log_path)
}

pub fn default_filter(verbosity: u8, quiet: bool) -> String {
    if quiet {
        return "warn".to_string();
    }

    match verbosity {
        0 => "gc2gh=info".to_string(),
        1 => "gc2gh=debug".to_string(),
        _ => "gc2gh=trace,reqwest=debug".to_string(),
    }
}

pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("gc2gh")
        .join("logs")
        .join(format!("gc2gh-{}.log", Local::now().format("%Y%m%d-%H%M%S")))
}

/// Route log output through the test harness
pub fn init_test_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("gc2gh=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}
