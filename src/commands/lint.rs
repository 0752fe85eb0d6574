//! # Lint Command Implementation
//!
//! Implements the `lint` subcommand, which checks the registry files
//! themselves: packages must be sorted by lowercased display name and every
//! display name may be used once per file.
//!
//! Registry files can be given directly; otherwise they are taken from the
//! `includes` list of the channel file (`packages.json` by default).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use linter_registry::defaults::DEFAULT_CHANNEL_FILE;
use linter_registry::output::OutputConfig;
use linter_registry::registry;
use linter_registry::report::LintReport;

/// Check that registry files are sorted and names are unique
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Channel file listing the registry files to check.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CHANNEL_FILE)]
    pub channel: PathBuf,

    /// Registry files to check instead of the channel's includes.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Execute the `lint` command.
pub fn execute(args: LintArgs, out: &OutputConfig) -> Result<u8> {
    let files = if args.files.is_empty() {
        registry::load_channel(&args.channel)
            .with_context(|| format!("Failed to load channel {}", args.channel.display()))?
    } else {
        args.files
    };

    let mut report = LintReport::default();
    for file in files {
        let packages = registry::load_file(&file)?;
        report.push(file, registry::lint(&packages));
    }

    print!("{}", report.render(out));
    Ok(report.exit_code())
}
