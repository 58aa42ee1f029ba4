//! CTest invocation

use std::path::PathBuf;

use super::ProjectLayout;
use crate::exec::ToolInvocation;

/// CTest executable name
pub const CTEST: &str = "ctest";

/// Test runner configuration
#[derive(Debug, Clone)]
pub struct CTestConfig {
    source_dir: PathBuf,
    build_dir: PathBuf,
    verbose: bool,
}

impl CTestConfig {
    pub fn new(layout: &ProjectLayout) -> Self {
        Self {
            source_dir: layout.source_dir.clone(),
            build_dir: layout.build_dir.clone(),
            verbose: false,
        }
    }

    /// Print the output of failing tests
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run every test registered in the build directory
    pub fn run(&self) -> ToolInvocation {
        let cmd = ToolInvocation::new(CTEST, "running tests")
            .arg("--test-dir")
            .arg(&self.build_dir)
            .current_dir(&self.source_dir);

        if self.verbose {
            cmd.arg("--output-on-failure")
        } else {
            cmd
        }
    }
}
