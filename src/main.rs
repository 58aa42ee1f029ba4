//! buildfront - a thin front door to a CMake project
//!
//! Forwards a single optional command token to the external tools:
//!
//! ```text
//! buildfront         → cmake -S . -B build && cmake --build build
//! buildfront test    → (build) && ctest --test-dir build
//! buildfront clean   → rm -r build
//! ```

mod build;
mod cli;
mod commands;
mod error;
mod exec;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use error::BuildfrontError;
use utils::terminal::{disable_colors, print_error};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        disable_colors();
    }
    init_tracing(cli.verbose, !cli.no_color);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<BuildfrontError>() {
            Some(error) => {
                error.display_with_hints();
                ExitCode::from(error.exit_code())
            }
            None => {
                print_error(&format!("{:#}", err));
                ExitCode::FAILURE
            }
        },
    }
}

fn init_tracing(verbose: bool, ansi: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false),
        )
        .with(EnvFilter::new(filter))
        .init();
}
