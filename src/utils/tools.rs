//! Tool detection with install hints
//!
//! The build and test tools are resolved on `PATH` before they are spawned so
//! a missing installation is reported as such instead of as an opaque spawn
//! failure.

use std::path::PathBuf;

use which::which;

use crate::error::{hints, BuildfrontError};

/// Resolve a tool on PATH, or fail with an install hint
pub fn require_tool(tool_name: &str, required_for: &str) -> Result<PathBuf, BuildfrontError> {
    which(tool_name).map_err(|_| {
        BuildfrontError::missing_tool(tool_name, required_for, get_tool_hint(tool_name))
    })
}

/// Get installation hint for a tool
fn get_tool_hint(tool_name: &str) -> &'static str {
    match tool_name {
        "cmake" | "ctest" => hints::cmake(),
        _ => "Install this tool and ensure it's in your PATH",
    }
}
