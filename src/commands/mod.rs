//! # CLI Command Implementations
//!
//! Each subcommand of `linter-registry` lives in its own file with:
//! - an `Args` struct derived with `clap`;
//! - an `execute` function that builds the run configuration, calls into the
//!   `linter_registry` library, prints the report and returns the exit code.

use std::path::PathBuf;

use clap::Args;
use log::debug;

use linter_registry::defaults::DEFAULT_GIT_PROGRAM;
use linter_registry::repository::SystemGit;

pub mod last_updated;
pub mod lint;
pub mod released;
pub mod sync;

/// Options shared by every command that runs git in parallel.
#[derive(Args, Debug)]
pub struct WorkerArgs {
    /// Number of repositories processed in parallel.
    ///
    /// Defaults to 10. Can also be set with the `LINTER_REGISTRY_JOBS`
    /// environment variable.
    #[arg(short, long, value_name = "N", env = "LINTER_REGISTRY_JOBS")]
    pub jobs: Option<usize>,

    /// The git program to run.
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "LINTER_REGISTRY_GIT",
        default_value = DEFAULT_GIT_PROGRAM
    )]
    pub git: PathBuf,
}

impl WorkerArgs {
    pub fn git(&self) -> SystemGit {
        let git = SystemGit::new(&self.git);
        debug!("Using git program {}", git.program().display());
        git
    }
}
