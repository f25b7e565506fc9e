//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`HOOKBELL_*`)
//! 2. Config file (`~/.claude/hookbell.toml`)
//! 3. Defaults

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file inside the hookbell home directory.
const CONFIG_FILE_NAME: &str = "hookbell.toml";

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Log sink configuration.
    pub logging: LoggingConfig,

    /// Notification sound configuration.
    pub sounds: SoundConfig,
}

/// Log sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory holding the per-day log files.
    pub dir: PathBuf,

    /// Filter directive, e.g. "info" or "debug".
    pub level: String,

    /// Mirror every log line to stderr.
    pub mirror_stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_home().join("logs"),
            level: "info".to_string(),
            mirror_stderr: true,
        }
    }
}

/// Notification sound configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Play sounds at all.
    pub enabled: bool,

    /// Directory holding `<EventName>.<extension>` files.
    pub dir: PathBuf,

    /// Playback command, invoked with the sound file as its only argument.
    pub player: String,

    /// Sound file extension, without the dot.
    pub extension: String,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: default_sound_dir(),
            player: default_player().to_string(),
            extension: "mp3".to_string(),
        }
    }
}

/// Get the default hookbell home directory (`~/.claude`).
fn default_home() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".claude"), |h| h.join(".claude"))
}

/// Sounds ship next to the installed binary.
fn default_sound_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("sounds")))
        .unwrap_or_else(|| default_home().join("hooks").join("sounds"))
}

fn default_player() -> &'static str {
    if cfg!(target_os = "macos") {
        "afplay"
    } else {
        "mpg123"
    }
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// A config file that cannot be read or parsed is skipped; the error is
/// returned alongside the defaults (env overrides still applied).
#[must_use]
pub fn load_config_or_default() -> (Config, Option<Error>) {
    load_config_or_default_with(|key| env::var(key).ok())
}

/// [`load_config_or_default`] using `lookup` in place of the process environment.
#[must_use]
pub fn load_config_or_default_with<F>(lookup: F) -> (Config, Option<Error>)
where
    F: Fn(&str) -> Option<String>,
{
    match load_config_with(&lookup) {
        Ok(config) => (config, None),
        Err(e) => {
            let mut config = Config::default();
            apply_env_overrides(&mut config, &lookup);
            (config, Some(e))
        }
    }
}

/// Load configuration using `lookup` in place of the process environment.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn load_config_with<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    let config_path = config_path(&lookup);
    if config_path.exists() {
        config = parse_config_file(&config_path)?;
    }

    apply_env_overrides(&mut config, &lookup);

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
}

/// Get the path to the config file.
fn config_path<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup("HOOKBELL_CONFIG") {
        return PathBuf::from(path);
    }

    if let Some(home) = lookup("HOOKBELL_HOME") {
        return PathBuf::from(home).join(CONFIG_FILE_NAME);
    }

    default_home().join(CONFIG_FILE_NAME)
}

/// Apply environment variable overrides to config.
fn apply_env_overrides<F>(config: &mut Config, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    // Log directory
    if let Some(dir) = lookup("HOOKBELL_LOG_DIR") {
        config.logging.dir = PathBuf::from(dir);
    } else if let Some(home) = lookup("HOOKBELL_HOME") {
        config.logging.dir = PathBuf::from(home).join("logs");
    }

    if let Some(level) = lookup("HOOKBELL_LOG_LEVEL") {
        config.logging.level = level;
    }

    // Sounds
    if let Some(dir) = lookup("HOOKBELL_SOUND_DIR") {
        config.sounds.dir = PathBuf::from(dir);
    }

    if let Some(player) = lookup("HOOKBELL_PLAYER") {
        config.sounds.player = player;
    }

    if let Some(val) = lookup("HOOKBELL_MUTE") {
        if is_truthy(&val) {
            config.sounds.enabled = false;
        }
    }
}

fn is_truthy(val: &str) -> bool {
    matches!(
        val.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
