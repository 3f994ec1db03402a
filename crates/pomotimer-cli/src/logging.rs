//! Tracing setup.
//!
//! The interactive timer owns the terminal, so its log goes to a file.
//! The `config` commands log to stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Returns `<data dir>/pomotimer[-dev]/` based on POMOTIMER_ENV.
///
/// Set POMOTIMER_ENV=dev to use the development directory.
pub fn log_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    let env = std::env::var("POMOTIMER_ENV").unwrap_or_else(|_| "production".to_string());
    if env == "dev" {
        base.join("pomotimer-dev")
    } else {
        base.join("pomotimer")
    }
}

pub fn default_log_file() -> PathBuf {
    log_dir().join("pomotimer.log")
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Append log records to `path`, creating its directory if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created.
pub fn init_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(filter("warn"))
        .with_writer(io::stderr)
        .init();
}
