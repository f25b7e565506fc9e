//! hookbell - lifecycle hook dispatcher for Claude Code.
//!
//! Spawned once per hook event: reads the event payload from stdin, logs it,
//! rings a bell for the events worth hearing about, and answers the host
//! with a JSON decision on stdout.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod notify;

pub use config::Config;
pub use error::{Error, Result};
