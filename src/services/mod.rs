//! Process-level plumbing: terminal modes and diagnostics.

pub mod terminal_modes;
pub mod tracing_setup;
