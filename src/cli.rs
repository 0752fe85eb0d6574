//! CLI argument parsing and command dispatch

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use linter_registry::logging;
use linter_registry::output::{ColorChoice, OutputConfig};

use crate::commands;

/// Linter Registry - Mirror and audit registered linter repositories
#[derive(Parser, Debug)]
#[command(name = "linter-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output
    #[arg(long, global = true, value_name = "WHEN", value_enum, default_value = "auto")]
    color: ColorChoice,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone or pull every registered repository, or check that their URLs exist
    Sync(commands::sync::SyncArgs),

    /// Show which checkouts have HEAD on a release tag
    Released(commands::released::ReleasedArgs),

    /// Show the last commit date of every checkout
    LastUpdated(commands::last_updated::LastUpdatedArgs),

    /// Check that registry files are sorted and names are unique
    Lint(commands::lint::LintArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        logging::init(&self.log_level);
        let out = OutputConfig::new(self.color);

        let code = match self.command {
            Commands::Sync(args) => commands::sync::execute(args, &out)?,
            Commands::Released(args) => commands::released::execute(args, &out)?,
            Commands::LastUpdated(args) => commands::last_updated::execute(args, &out)?,
            Commands::Lint(args) => commands::lint::execute(args, &out)?,
        };

        Ok(ExitCode::from(code))
    }
}
