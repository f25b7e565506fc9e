//! Sound playback through an external player command.

use crate::config::SoundConfig;
use crate::notify::traits::Notifier;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Plays `<dir>/<name>.<extension>` with an external player.
#[derive(Debug, Clone)]
pub struct SoundPlayer {
    dir: PathBuf,
    player: String,
    extension: String,
}

impl SoundPlayer {
    /// Create a player for sounds under `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, player: &str, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            player: player.to_string(),
            extension: extension.to_string(),
        }
    }

    /// Create a player from the sound configuration.
    #[must_use]
    pub fn from_config(config: &SoundConfig) -> Self {
        Self::new(&config.dir, &config.player, &config.extension)
    }

    /// Path of the sound file for `name`, if it exists.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = self.dir.join(format!("{name}.{}", self.extension));
        path.is_file().then_some(path)
    }

    /// Spawn the player without waiting for it.
    fn spawn_detached(&self, path: &Path) -> std::io::Result<()> {
        let mut command = Command::new(&self.player);
        command
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Keep playback alive if the host signals our process group.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        // Dropping the child neither waits for nor kills it.
        command.spawn().map(drop)
    }
}

impl Notifier for SoundPlayer {
    fn play(&self, name: &str) {
        if let Some(path) = self.resolve(name) {
            let _ = self.spawn_detached(&path);
        }
    }
}
