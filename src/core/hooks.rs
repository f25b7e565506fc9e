//! Hook handler implementations.
//!
//! Each handler logs what it saw, optionally plays a sound, and returns the
//! decision for its event. Handlers never fail and never mutate the input.

use crate::hooks::{Decision, HookInput};
use crate::notify::Notifier;
use tracing::info;

/// Handle `PreToolUse`: allow every tool.
pub fn handle_pre_tool_use(input: &HookInput, _notifier: &dyn Notifier) -> Decision {
    let tool_name = input.str_field("tool_name");
    info!("PreToolUse: {tool_name}");
    Decision::allow()
}

/// Handle `PostToolUse`.
pub fn handle_post_tool_use(input: &HookInput, _notifier: &dyn Notifier) -> Decision {
    let tool_name = input.str_field("tool_name");
    info!("PostToolUse: {tool_name}");
    Decision::proceed()
}

/// Handle `PermissionRequest`.
pub fn handle_permission_request(_input: &HookInput, _notifier: &dyn Notifier) -> Decision {
    info!("PermissionRequest");
    Decision::proceed()
}

/// Handle `UserPromptSubmit`.
pub fn handle_user_prompt_submit(_input: &HookInput, _notifier: &dyn Notifier) -> Decision {
    info!("UserPromptSubmit");
    Decision::proceed()
}

/// Handle `Stop`: chime when the main agent is done.
pub fn handle_stop(_input: &HookInput, notifier: &dyn Notifier) -> Decision {
    info!("Stop");
    notifier.play("Stop");
    Decision::proceed()
}

/// Handle `SubagentStop`.
pub fn handle_subagent_stop(input: &HookInput, notifier: &dyn Notifier) -> Decision {
    let subagent_type = input.str_field("subagent_type");
    info!("SubagentStop: {subagent_type}");
    notifier.play("SubagentStop");
    Decision::proceed()
}

/// Handle `SessionStart`.
pub fn handle_session_start(input: &HookInput, _notifier: &dyn Notifier) -> Decision {
    let session_id = input.str_field("session_id");
    info!("SessionStart: {session_id}");
    Decision::proceed()
}

/// Handle `SessionEnd`.
pub fn handle_session_end(input: &HookInput, _notifier: &dyn Notifier) -> Decision {
    let session_id = input.str_field("session_id");
    info!("SessionEnd: {session_id}");
    Decision::proceed()
}

/// Handle `Notification`.
pub fn handle_notification(input: &HookInput, _notifier: &dyn Notifier) -> Decision {
    let notification_type = input.str_field("notification_type");
    info!("Notification: {notification_type}");
    Decision::proceed()
}

/// Handle `PreCompact`: log the token count and chime.
///
/// The count is logged as the host sent it; a missing or non-numeric count
/// shows as `0`.
pub fn handle_pre_compact(input: &HookInput, notifier: &dyn Notifier) -> Decision {
    match input.number_field("current_token_count") {
        Some(current_tokens) => info!("PreCompact: {current_tokens} tokens"),
        None => info!("PreCompact: 0 tokens"),
    }
    notifier.play("PreCompact");
    Decision::proceed()
}
