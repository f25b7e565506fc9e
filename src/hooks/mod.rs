//! Hook input/output types and dispatch.

pub mod event;
pub mod input;
pub mod output;
pub mod runner;

pub use event::{EventKind, UNKNOWN_EVENT, resolve_event};
pub use input::{HookInput, read_input};
pub use output::{Decision, PermissionDecision, write_decision};
pub use runner::dispatch_hook;
