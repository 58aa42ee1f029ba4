//! Subprocess execution for the external build and test tools
//!
//! Every external invocation goes through [`ToolRunner`] and comes back as a
//! [`CommandResult`]; callers decide what a failed status means. Tool output
//! is never captured, it streams straight to the terminal.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::BuildfrontError;
use crate::utils::tools::require_tool;

/// A single external program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Program name, resolved on PATH at run time
    pub program: String,
    /// Arguments passed verbatim
    pub args: Vec<OsString>,
    /// Working directory for the child, inherited when `None`
    pub current_dir: Option<PathBuf>,
    /// What the tool is being run for, used in missing-tool errors
    pub purpose: String,
}

impl ToolInvocation {
    /// Create an invocation with no arguments
    pub fn new(program: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            purpose: purpose.into(),
        }
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the child's working directory
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Result of a subprocess execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code, `None` when terminated by a signal
    pub exit_code: Option<i32>,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code(),
            duration,
        }
    }
}

/// Runs external tools on behalf of the dispatcher
pub trait ToolRunner {
    /// Run the invocation to completion, blocking until the child exits
    fn run(&self, invocation: &ToolInvocation) -> Result<CommandResult, BuildfrontError>;
}

/// Runs tools as real child processes with inherited stdout/stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<CommandResult, BuildfrontError> {
        let program = require_tool(&invocation.program, &invocation.purpose)?;
        let start = Instant::now();

        let mut cmd = Command::new(&program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.current_dir {
            cmd.current_dir(dir);
        }

        debug!("Running: {}", invocation);

        let status = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| BuildfrontError::Spawn {
                tool: invocation.program.clone(),
                source,
            })?;

        let result = CommandResult::from_status(status, start.elapsed());
        debug!(
            "{} finished in {:.2?} (exit code {:?})",
            invocation.program, result.duration, result.exit_code
        );
        Ok(result)
    }
}
