//! Tracing setup for the `urlguard` binary.
//!
//! Events go to `$XDG_STATE_HOME/urlguard/urlguard.log`. If that file cannot
//! be opened they go to stderr instead; logging never stops a scan.

use anyhow::Result;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "urlguard.log";

/// Used when `RUST_LOG` is unset, empty or unparseable. The `urlguard` target
/// prefix covers both the binary and `urlguard_core`.
const DEFAULT_DIRECTIVES: &str = "warn,urlguard=info";

/// Where log events ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

impl fmt::Display for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSink::File(path) => write!(f, "{}", path.display()),
            LogSink::Stderr => f.write_str("stderr"),
        }
    }
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Opens (creating if needed) the log file inside `dir` for appending.
fn open_log_in(dir: &Path) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

fn open_state_log() -> Result<(PathBuf, File)> {
    let dirs = xdg::BaseDirectories::with_prefix("urlguard")?;
    let dir = dirs.create_state_directory("")?;
    Ok(open_log_in(&dir)?)
}

/// Installs the global subscriber. Call once, before anything logs.
pub fn init() -> LogSink {
    let filter = filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match open_state_log() {
        Ok((path, file)) => {
            builder.with_writer(Mutex::new(file)).init();
            LogSink::File(path)
        }
        Err(err) => {
            builder.with_writer(io::stderr).init();
            tracing::debug!(error = %err, "state directory unusable, logging to stderr");
            LogSink::Stderr
        }
    }
}
