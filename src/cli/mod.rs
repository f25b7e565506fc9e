//! CLI command implementations.

pub mod hook;
