//! Shared helpers for terminal output and tool lookup

pub mod terminal;
pub mod tools;
