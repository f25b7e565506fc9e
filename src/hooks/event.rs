//! Hook event names.

use crate::hooks::HookInput;
use std::fmt;

/// Event name used when neither argv nor the payload names one.
pub const UNKNOWN_EVENT: &str = "unknown";

/// Lifecycle events reported by Claude Code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Before a tool runs; the only event answered with a permission verdict.
    PreToolUse,
    /// After a tool completed successfully.
    PostToolUse,
    /// A permission dialog is shown to the user.
    PermissionRequest,
    /// Before the user's prompt is processed.
    UserPromptSubmit,
    /// The main agent finished responding.
    Stop,
    /// A subagent finished responding.
    SubagentStop,
    /// Session started or resumed.
    SessionStart,
    /// Session ended.
    SessionEnd,
    /// Claude Code sent a notification.
    Notification,
    /// Context is about to be compacted.
    PreCompact,
    /// Anything else, keeping the name as received.
    Unknown(String),
}

impl EventKind {
    /// Every event with a dedicated handler.
    pub const KNOWN: &'static [EventKind] = &[
        EventKind::PreToolUse,
        EventKind::PostToolUse,
        EventKind::PermissionRequest,
        EventKind::UserPromptSubmit,
        EventKind::Stop,
        EventKind::SubagentStop,
        EventKind::SessionStart,
        EventKind::SessionEnd,
        EventKind::Notification,
        EventKind::PreCompact,
    ];

    /// Classify an event name. Matching is case-sensitive.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "PreToolUse" => Self::PreToolUse,
            "PostToolUse" => Self::PostToolUse,
            "PermissionRequest" => Self::PermissionRequest,
            "UserPromptSubmit" => Self::UserPromptSubmit,
            "Stop" => Self::Stop,
            "SubagentStop" => Self::SubagentStop,
            "SessionStart" => Self::SessionStart,
            "SessionEnd" => Self::SessionEnd,
            "Notification" => Self::Notification,
            "PreCompact" => Self::PreCompact,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The event name as Claude Code spells it.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::PreToolUse => "PreToolUse",
            Self::PostToolUse => "PostToolUse",
            Self::PermissionRequest => "PermissionRequest",
            Self::UserPromptSubmit => "UserPromptSubmit",
            Self::Stop => "Stop",
            Self::SubagentStop => "SubagentStop",
            Self::SessionStart => "SessionStart",
            Self::SessionEnd => "SessionEnd",
            Self::Notification => "Notification",
            Self::PreCompact => "PreCompact",
            Self::Unknown(name) => name,
        }
    }

    /// Whether this event has a dedicated handler.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve the event for this invocation.
///
/// The command-line argument wins over the payload's `event_type` field.
#[must_use]
pub fn resolve_event(arg: Option<&str>, input: &HookInput) -> EventKind {
    let name = match arg {
        Some(name) => name,
        None => match input.str_field("event_type") {
            "" => UNKNOWN_EVENT,
            name => name,
        },
    };
    EventKind::parse(name)
}
