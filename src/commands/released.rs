//! # Released Command Implementation
//!
//! Implements the `released` subcommand: for every checkout under the
//! destination directory, report whether HEAD is exactly on a tag.
//!
//! Tagged checkouts are listed first with their tag, then the checkouts
//! whose latest commits are not released yet. This is a read-only command.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use linter_registry::config::StatusConfig;
use linter_registry::output::OutputConfig;
use linter_registry::report::ReleaseReport;
use linter_registry::status;

use super::WorkerArgs;

/// Show which checkouts have HEAD on a release tag
#[derive(Args, Debug)]
pub struct ReleasedArgs {
    /// Directory containing the checkouts.
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,

    #[command(flatten)]
    pub workers: WorkerArgs,
}

/// Execute the `released` command.
pub fn execute(args: ReleasedArgs, out: &OutputConfig) -> Result<u8> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let config = StatusConfig::new(args.dest.as_deref(), args.workers.jobs, &cwd);
    let git = args.workers.git();

    let outcome = status::released(&config, &git)
        .with_context(|| format!("Failed to read checkouts in {}", config.dest_dir.display()))?;

    let report = ReleaseReport::new(outcome);
    print!("{}", report.render(out));

    Ok(report.exit_code())
}
