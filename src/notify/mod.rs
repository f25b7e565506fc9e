//! Notification sound backends.

pub mod player;
pub mod silent;
pub mod traits;

pub use player::SoundPlayer;
pub use silent::SilentNotifier;
pub use traits::Notifier;

use crate::config::SoundConfig;

/// Build the notifier described by the sound configuration.
#[must_use]
pub fn from_config(config: &SoundConfig) -> Box<dyn Notifier> {
    if config.enabled {
        Box::new(SoundPlayer::from_config(config))
    } else {
        Box::new(SilentNotifier)
    }
}
