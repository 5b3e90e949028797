//! Application entry point.
//!
//! Parses command-line arguments, merges configuration and delegates
//! execution to [`runner::run`].

use clap::Parser;
use greeter::cli::{self, Cli};
use greeter::runner;
use std::io;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt;

fn init_logging(verbose: bool) {
    let max_level = if verbose { Level::DEBUG } else { Level::ERROR };
    fmt()
        .with_max_level(max_level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let parsed = Cli::parse();
    let settings = match cli::merge_with_config(&parsed) {
        Ok(settings) => settings,
        Err(err) => {
            init_logging(parsed.verbose);
            tracing::error!(error = %format!("{err:#}"), "configuration failed");
            return ExitCode::FAILURE;
        }
    };
    init_logging(settings.verbose);
    match runner::run(&parsed, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            ExitCode::FAILURE
        }
    }
}
