use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

pub const FILTER_ENV: &str = "SYSMONITOR_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stderr,
    File(PathBuf),
}

/// Default log file for the terminal UI, which owns stdout and stderr.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("sysmonitor").join("sysmonitor.log"))
}

pub fn build_filter(level: &str) -> Result<EnvFilter> {
    match std::env::var(FILTER_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .wrap_err_with(|| format!("invalid {FILTER_ENV} directives `{directives}`")),
        _ => EnvFilter::try_new(level)
            .wrap_err_with(|| format!("invalid logging.level `{level}`")),
    }
}

pub fn init(config: &LoggingConfig, sink: Sink) -> Result<()> {
    let filter = build_filter(&config.level)?;
    let json = match config.format.to_lowercase().as_str() {
        "json" => true,
        "text" | "" => false,
        other => return Err(eyre!("unknown logging.format `{other}`; use text or json")),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match sink {
        Sink::Stderr => {
            let builder = builder.with_writer(std::io::stderr);
            if json {
                builder.json().try_init()
            } else {
                builder.try_init()
            }
        }
        Sink::File(path) => {
            let file = open_log_file(&path)?;
            let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
            if json {
                builder.json().try_init()
            } else {
                builder.try_init()
            }
        }
    };

    result.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))
}
