//! Error types and helpers for user-friendly error messages
//!
//! Every failure the dispatcher can hit is one of these variants. `main`
//! downcasts the propagated `anyhow::Error` back to a [`BuildfrontError`] to
//! pick the process exit code and print the hint.

use std::path::PathBuf;

use thiserror::Error;

use crate::build::Step;
use crate::utils::terminal::{print_error, print_hint};

/// Exit code for usage errors, matching what clap uses for bad arguments.
pub const USAGE_EXIT_CODE: u8 = 2;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum BuildfrontError {
    /// Command token outside of the supported set
    #[error("unknown argument: '{token}'")]
    UnknownCommand { token: String },

    /// Tool/executable not found on PATH
    #[error("missing tool: {tool} (required for {required_for})")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// The OS refused to start the tool
    #[error("failed to execute {tool}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran and reported failure
    #[error("{step} step failed ({})", describe_exit(*exit_code))]
    ToolFailed { step: Step, exit_code: Option<i32> },

    /// Recursive removal of the build output directory failed
    #[error("failed to remove {}", path.display())]
    Clean {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn describe_exit(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl BuildfrontError {
    /// Create an unknown command error
    pub fn unknown_command(token: impl Into<String>) -> Self {
        Self::UnknownCommand {
            token: token.into(),
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a tool failure error
    pub fn tool_failed(step: Step, exit_code: Option<i32>) -> Self {
        Self::ToolFailed { step, exit_code }
    }

    /// Process exit code for this error.
    ///
    /// A failing tool's own exit code is forwarded when it fits in a process
    /// exit status; anything else collapses to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownCommand { .. } => USAGE_EXIT_CODE,
            Self::ToolFailed {
                exit_code: Some(code),
                ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }

    /// Hint shown under the error, if any
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::UnknownCommand { .. } => Some(hints::usage()),
            Self::MissingTool { hint, .. } => Some(hint.as_str()),
            Self::Clean { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some(hints::clean())
            }
            Self::Clean { .. } | Self::Spawn { .. } | Self::ToolFailed { .. } => None,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        let mut message = self.to_string();
        if let Some(source) = std::error::Error::source(self) {
            message = format!("{}: {}", message, source);
        }
        print_error(&message);

        if let Some(hint) = self.hint() {
            print_hint(hint);
        }
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for missing CMake (which also ships ctest)
    pub fn cmake() -> &'static str {
        "Install CMake from https://cmake.org/ or use your package manager:\n\
         • macOS: brew install cmake\n\
         • Ubuntu: sudo apt install cmake\n\
         • Windows: winget install Kitware.CMake"
    }

    /// Get hint for an unrecognized command token
    pub fn usage() -> &'static str {
        "Run with no argument to build, or use one of: test, clean"
    }

    /// Get hint for a failed clean
    pub fn clean() -> &'static str {
        "Nothing to clean if the project has not been built yet"
    }
}
