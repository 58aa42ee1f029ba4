//! External process execution

pub mod subprocess;

pub use subprocess::{CommandResult, SystemRunner, ToolInvocation, ToolRunner};
