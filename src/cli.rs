//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use tracing::debug;

use crate::build::{BuildContext, ProjectLayout};
use crate::commands::{dispatch, Action};
use crate::exec::SystemRunner;

/// Build, test, or clean a CMake project
///
/// With no argument the project is configured and compiled into `build/`.
/// `test` additionally runs the test suite with CTest, and `clean` removes
/// the build directory.
#[derive(Parser, Debug)]
#[command(name = "buildfront")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "The flags -h/--help, -V/--version, -v/--verbose and --no-color are reserved \
                  and are never treated as COMMAND."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Command to run: test, clean, or nothing to build
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Anything after COMMAND; ignored
    #[arg(hide = true, num_args = 0..)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Classify the command token
    pub fn action(&self) -> Action {
        Action::from_token(self.command.as_deref())
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let layout = ProjectLayout::current()?;
        let runner = SystemRunner;
        let ctx = BuildContext::new(layout, &runner, self.verbose);

        if !self.rest.is_empty() {
            debug!("Ignoring extra arguments: {:?}", self.rest);
        }

        dispatch(&self.action(), &ctx)
    }
}
