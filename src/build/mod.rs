//! Build orchestration
//!
//! Everything here is a thin layer over the external tools:
//!
//! ```text
//! commands/ → build/mod.rs → cmake.rs / ctest.rs → ToolRunner → cmake / ctest
//! ```
//!
//! ## Modules
//!
//! - `cmake` - configure and compile invocations
//! - `ctest` - test suite invocation

pub mod cmake;
pub mod ctest;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::error::BuildfrontError;
use crate::exec::{ToolInvocation, ToolRunner};

/// Build output directory, relative to the source directory
pub const BUILD_DIR: &str = "build";

/// External invocation performed by an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Generate build descriptors in the build output directory
    Configure,
    /// Compile every configured target
    Compile,
    /// Run the test suite against the build output directory
    Test,
}

impl Step {
    /// Name of the external program that performs this step
    pub fn tool(&self) -> &'static str {
        match self {
            Step::Configure | Step::Compile => cmake::CMAKE,
            Step::Test => ctest::CTEST,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Configure => write!(f, "configure"),
            Step::Compile => write!(f, "compile"),
            Step::Test => write!(f, "test"),
        }
    }
}

/// Where the project lives and where its build output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Source directory (where CMakeLists.txt is located)
    pub source_dir: PathBuf,
    /// Build output directory, owned by the build tool
    pub build_dir: PathBuf,
}

impl ProjectLayout {
    /// Layout rooted at `source_dir` with the standard build directory
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let build_dir = source_dir.join(BUILD_DIR);
        Self {
            source_dir,
            build_dir,
        }
    }

    /// Layout rooted at the current working directory
    pub fn current() -> Result<Self> {
        let source_dir =
            std::env::current_dir().context("Failed to get current working directory")?;
        Ok(Self::new(source_dir))
    }

    /// Build directory as shown to the user
    pub fn build_dir_display(&self) -> String {
        display_relative(&self.build_dir, &self.source_dir)
    }
}

fn display_relative(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) => format!("{}/", relative.display()),
        Err(_) => path.display().to_string(),
    }
}

/// Layout plus the runner that executes the external tools
pub struct BuildContext<'a> {
    /// Project paths
    pub layout: ProjectLayout,
    /// Executes external tools
    pub runner: &'a dyn ToolRunner,
    /// Ask the tools for verbose output
    pub verbose: bool,
}

impl<'a> BuildContext<'a> {
    /// Create a new build context
    pub fn new(layout: ProjectLayout, runner: &'a dyn ToolRunner, verbose: bool) -> Self {
        Self {
            layout,
            runner,
            verbose,
        }
    }

    /// Run one step and turn a failed status into an error
    pub fn run_step(&self, step: Step, invocation: &ToolInvocation) -> Result<()> {
        let result = self.runner.run(invocation)?;
        debug!("{} step ({}): {:?}", step, step.tool(), result);

        if !result.success {
            return Err(BuildfrontError::tool_failed(step, result.exit_code).into());
        }

        Ok(())
    }

    /// Configure, then compile.
    ///
    /// The compile step never runs after a failed configure.
    pub fn build(&self) -> Result<()> {
        let cmake = cmake::CMakeConfig::new(&self.layout).verbose(self.verbose);
        self.run_step(Step::Configure, &cmake.configure())?;
        self.run_step(Step::Compile, &cmake.build())?;
        Ok(())
    }

    /// Run the test suite against the build directory
    pub fn run_tests(&self) -> Result<()> {
        let ctest = ctest::CTestConfig::new(&self.layout).verbose(self.verbose);
        self.run_step(Step::Test, &ctest.run())
    }
}
