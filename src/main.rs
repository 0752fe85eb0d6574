//! # Linter Registry CLI
//!
//! Binary entry point for the `linter-registry` command-line tool. It parses
//! the arguments with `clap`, runs the selected command and turns its outcome
//! into the process exit code. The logic lives in the library crate.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.execute()
}
