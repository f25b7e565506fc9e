//! Notifier that plays nothing.

use crate::notify::traits::Notifier;

/// Used when sounds are muted.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn play(&self, _name: &str) {}
}
