//! # Last-Updated Command Implementation
//!
//! Implements the `last-updated` subcommand: list every checkout with the
//! author date of its newest commit, oldest first, to spot abandoned linters.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use linter_registry::config::StatusConfig;
use linter_registry::output::OutputConfig;
use linter_registry::report::UpdatedReport;
use linter_registry::status;

use super::WorkerArgs;

/// Show the last commit date of every checkout
#[derive(Args, Debug)]
pub struct LastUpdatedArgs {
    /// Directory containing the checkouts.
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,

    #[command(flatten)]
    pub workers: WorkerArgs,
}

/// Execute the `last-updated` command.
pub fn execute(args: LastUpdatedArgs, out: &OutputConfig) -> Result<u8> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let config = StatusConfig::new(args.dest.as_deref(), args.workers.jobs, &cwd);
    let git = args.workers.git();

    let outcome = status::last_updated_all(&config, &git)
        .with_context(|| format!("Failed to read checkouts in {}", config.dest_dir.display()))?;

    let report = UpdatedReport::new(outcome);
    print!("{}", report.render(out));

    Ok(report.exit_code())
}
