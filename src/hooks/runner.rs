//! Hook dispatch logic.

use crate::core::{
    handle_notification, handle_permission_request, handle_post_tool_use, handle_pre_compact,
    handle_pre_tool_use, handle_session_end, handle_session_start, handle_stop,
    handle_subagent_stop, handle_user_prompt_submit,
};
use crate::hooks::{Decision, EventKind, HookInput};
use crate::notify::Notifier;
use tracing::info;

/// Dispatch a hook event to its handler.
///
/// Unknown events are not an error: they are logged and answered with
/// `{"continue": true}`.
pub fn dispatch_hook(event: &EventKind, input: &HookInput, notifier: &dyn Notifier) -> Decision {
    match event {
        EventKind::PreToolUse => handle_pre_tool_use(input, notifier),
        EventKind::PostToolUse => handle_post_tool_use(input, notifier),
        EventKind::PermissionRequest => handle_permission_request(input, notifier),
        EventKind::UserPromptSubmit => handle_user_prompt_submit(input, notifier),
        EventKind::Stop => handle_stop(input, notifier),
        EventKind::SubagentStop => handle_subagent_stop(input, notifier),
        EventKind::SessionStart => handle_session_start(input, notifier),
        EventKind::SessionEnd => handle_session_end(input, notifier),
        EventKind::Notification => handle_notification(input, notifier),
        EventKind::PreCompact => handle_pre_compact(input, notifier),
        EventKind::Unknown(name) => {
            info!("Unknown event type: {name}");
            Decision::proceed()
        }
    }
}
