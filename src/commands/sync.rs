//! # Sync Command Implementation
//!
//! Implements the `sync` subcommand, the main maintenance task for the
//! mirror of linter repositories.
//!
//! ## Usage
//!
//! - `linter-registry sync` reads `org.json` and `contrib.json` from the
//!   current directory and mirrors into `linter_repos/`.
//! - `linter-registry sync org.json contrib.json` reads the given registry
//!   files.
//! - `linter-registry sync other/dest/folder/ org.json` mirrors into a
//!   different directory; the destination must come first.
//! - `linter-registry sync --check org.json` only verifies that every URL
//!   exists and every entry is named, without touching the disk.
//!
//! Checkouts whose package left the registry are deleted before syncing. The
//! exit code is non-zero if any repository failed, which makes `--check`
//! usable in automated tests of the registry.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use linter_registry::config::SyncConfig;
use linter_registry::output::OutputConfig;
use linter_registry::report::SyncReport;
use linter_registry::sync;

use super::WorkerArgs;

/// Clone, pull or check every registered repository
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Only check that repository URLs exist; do not clone or pull.
    #[arg(long)]
    pub check: bool,

    /// Optional destination directory, followed by registry `.json` files.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub workers: WorkerArgs,
}

/// Execute the `sync` command.
pub fn execute(args: SyncArgs, out: &OutputConfig) -> Result<u8> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let config = SyncConfig::from_positionals(&args.paths, args.check, args.workers.jobs, &cwd)?;
    let git = args.workers.git();

    let outcome = sync::run(&config, &git).with_context(|| {
        if config.check {
            "Failed to check repositories".to_string()
        } else {
            format!("Failed to sync into {}", config.dest_dir.display())
        }
    })?;

    let report = SyncReport::from_outcome(config.check, &outcome);
    println!();
    print!("{}", report.render(out));

    Ok(report.exit_code())
}
