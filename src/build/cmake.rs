//! CMake configure and build invocations

use std::path::PathBuf;

use super::ProjectLayout;
use crate::exec::ToolInvocation;

/// CMake executable name
pub const CMAKE: &str = "cmake";

/// CMake configuration builder
#[derive(Debug, Clone)]
pub struct CMakeConfig {
    /// Source directory (where CMakeLists.txt is located)
    source_dir: PathBuf,
    /// Build directory
    build_dir: PathBuf,
    /// Verbose output
    verbose: bool,
}

impl CMakeConfig {
    /// Create a new CMake configuration
    pub fn new(layout: &ProjectLayout) -> Self {
        Self {
            source_dir: layout.source_dir.clone(),
            build_dir: layout.build_dir.clone(),
            verbose: false,
        }
    }

    /// Enable verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// CMake configure step.
    ///
    /// Safe to re-run against an existing build directory; CMake creates the
    /// directory itself when it is missing.
    pub fn configure(&self) -> ToolInvocation {
        ToolInvocation::new(CMAKE, "configuring the project")
            .arg("-S")
            .arg(&self.source_dir)
            .arg("-B")
            .arg(&self.build_dir)
            .current_dir(&self.source_dir)
    }

    /// CMake build step
    pub fn build(&self) -> ToolInvocation {
        let cmd = ToolInvocation::new(CMAKE, "compiling the project")
            .arg("--build")
            .arg(&self.build_dir)
            .current_dir(&self.source_dir);

        if self.verbose {
            cmd.arg("--verbose")
        } else {
            cmd
        }
    }
}
