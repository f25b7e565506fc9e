//! Event handlers.

pub mod hooks;

pub use hooks::{
    handle_notification, handle_permission_request, handle_post_tool_use, handle_pre_compact,
    handle_pre_tool_use, handle_session_end, handle_session_start, handle_stop,
    handle_subagent_stop, handle_user_prompt_submit,
};
