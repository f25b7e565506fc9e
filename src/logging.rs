//! Event log: one file per local calendar day, mirrored to stderr.
//!
//! Lines look like
//! `2026-10-17 09:41:07.312  INFO hook{event=Stop}: Stop`.
//! The `hook` span carries the event name; see [`crate::cli::hook`].

use crate::config::LoggingConfig;
use chrono::{Local, NaiveDate};
use std::env;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{Subscriber, debug, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::prelude::*;

/// Environment variable holding a filter directive that beats the config.
pub const LOG_ENV: &str = "HOOKBELL_LOG";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Log file name for `date`, e.g. `hooks_20261017.log`.
#[must_use]
pub fn log_file_name(date: NaiveDate) -> String {
    format!("hooks_{}.log", date.format("%Y%m%d"))
}

/// Open today's log file for appending, creating `dir` if needed.
///
/// # Errors
///
/// Returns an error if the directory or the file cannot be created.
pub fn open_log_file(dir: &Path, date: NaiveDate) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(log_file_name(date));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Build the subscriber writing to `file` (if any) and to `mirror`.
pub fn subscriber<W>(
    filter: EnvFilter,
    file: Option<File>,
    mirror: Option<W>,
) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let file_layer = file.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
    });

    let mirror_layer = mirror.map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(mirror_layer)
}

/// Level used when the configured directive is unusable.
pub const FALLBACK_LEVEL: &str = "info";

/// Parse a filter directive.
///
/// A bare word must be a level (`trace` ... `error`, `off`); otherwise
/// `EnvFilter` would read it as a target name and silence every line.
///
/// # Errors
///
/// Returns a description of the problem if the directive is not usable.
pub fn parse_filter(directive: &str) -> std::result::Result<EnvFilter, String> {
    let directive = directive.trim();
    if directive.contains(['=', ',', '[']) {
        return EnvFilter::try_new(directive).map_err(|e| e.to_string());
    }
    directive
        .parse::<LevelFilter>()
        .map(|level| EnvFilter::new(level.to_string()))
        .map_err(|_| format!("not a log level: {directive:?}"))
}

/// Install the process-wide logger.
///
/// Never fails: an unusable level falls back to `info`, and if the log file
/// cannot be opened, logging continues on stderr alone.
pub fn init(config: &LoggingConfig) {
    let directive = env::var(LOG_ENV).unwrap_or_else(|_| config.level.clone());
    let (filter, filter_err) = match parse_filter(&directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e)),
    };

    let (path, file, open_err) = match open_log_file(&config.dir, Local::now().date_naive()) {
        Ok((path, file)) => (Some(path), Some(file), None),
        Err(e) => (None, None, Some(e)),
    };

    // Without a file the stderr mirror is the only sink left.
    let mirror = (config.mirror_stderr || file.is_none()).then_some(io::stderr);

    if tracing::subscriber::set_global_default(subscriber(filter, file, mirror)).is_err() {
        eprintln!("hookbell: warning: logger already installed");
    }

    if let Some(e) = filter_err {
        warn!("bad log level, using {FALLBACK_LEVEL}: {e}");
    }

    match (path, open_err) {
        (Some(path), _) => debug!("logging to {}", path.display()),
        (None, Some(e)) => warn!(
            "cannot open log file in {}: {e}; logging to stderr only",
            config.dir.display()
        ),
        (None, None) => {}
    }
}
