//! Notifier trait definition.

/// Plays a named notification for a hook event.
///
/// Implementations must return promptly and never fail: a missing sound or a
/// broken player is the notifier's problem, not the handler's.
pub trait Notifier: Send + Sync {
    /// Start playing the sound called `name` (e.g. `"Stop"`).
    fn play(&self, name: &str);
}
