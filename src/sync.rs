//! # Mirror Synchronization
//!
//! Clones new packages, pulls existing checkouts, or (in check mode) only
//! verifies that every registered URL is reachable.
//!
//! Each package is one unit of work on the [`FanOut`] pool. Workers never
//! return errors: a failed git command becomes a [`SyncResult::Failed`]
//! record so one broken repository cannot stop the rest of the run. Only
//! registry problems and failures to prepare the destination directory abort
//! [`run`].

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::checkouts::{self, Removal};
use crate::config::SyncConfig;
use crate::error::{Error, Result};
use crate::executor::FanOut;
use crate::registry::{self, Package};
use crate::repository::GitOperations;

/// What a unit of work tried to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncMode {
    Clone,
    Pull,
    Check,
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncMode::Clone => "clone",
            SyncMode::Pull => "pull",
            SyncMode::Check => "check",
        };
        f.write_str(name)
    }
}

/// Outcome of one unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncResult {
    Cloned { url: String },
    Pulled { url: String, summary: String },
    Checked { url: String },
    Failed {
        mode: SyncMode,
        url: String,
        messages: Vec<String>,
    },
}

impl SyncResult {
    pub fn mode(&self) -> SyncMode {
        match self {
            SyncResult::Cloned { .. } => SyncMode::Clone,
            SyncResult::Pulled { .. } => SyncMode::Pull,
            SyncResult::Checked { .. } => SyncMode::Check,
            SyncResult::Failed { mode, .. } => *mode,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            SyncResult::Cloned { url }
            | SyncResult::Pulled { url, .. }
            | SyncResult::Checked { url }
            | SyncResult::Failed { url, .. } => url,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, SyncResult::Failed { .. })
    }

    pub fn messages(&self) -> &[String] {
        match self {
            SyncResult::Failed { messages, .. } => messages,
            _ => &[],
        }
    }

    fn rejected(mode: SyncMode, url: &str, messages: Vec<String>) -> Self {
        warn!("Skipping {} of {}: {}", mode, url, messages.join("; "));
        SyncResult::Failed {
            mode,
            url: url.to_string(),
            messages,
        }
    }

    fn failed(mode: SyncMode, url: &str, error: &Error) -> Self {
        let message = error
            .git_output()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        SyncResult::Failed {
            mode,
            url: url.to_string(),
            messages: vec![message],
        }
    }
}

/// Reasons the entry cannot be handed to git or placed under the destination.
fn entry_problems(package: &Package) -> Vec<String> {
    let mut problems = Vec::new();
    if let Err(reason) = registry::validate_url(&package.url) {
        problems.push(reason.to_string());
    }
    if let Err(reason) = registry::validate_name(package.display_name()) {
        problems.push(format!("{:?}: {}", package.display_name(), reason));
    }
    problems
}

/// Pull if the package is already cloned under `dest_dir`, clone otherwise.
pub fn clone_or_pull(git: &dyn GitOperations, dest_dir: &Path, package: &Package) -> SyncResult {
    if checkouts::is_cloned(dest_dir, package.display_name()) {
        pull(git, dest_dir, package)
    } else {
        clone(git, dest_dir, package)
    }
}

/// Clone the package into `dest_dir/<display name>`.
pub fn clone(git: &dyn GitOperations, dest_dir: &Path, package: &Package) -> SyncResult {
    let url = &package.url;
    let problems = entry_problems(package);
    if !problems.is_empty() {
        return SyncResult::rejected(SyncMode::Clone, url, problems);
    }

    match git.clone_repo(url, dest_dir, package.display_name()) {
        Ok(()) => {
            info!("Cloned {}", url);
            SyncResult::Cloned { url: url.clone() }
        }
        Err(e) => {
            warn!("Failed to clone {}: {}", url, e);
            SyncResult::failed(SyncMode::Clone, url, &e)
        }
    }
}

/// Pull the existing checkout of the package.
pub fn pull(git: &dyn GitOperations, dest_dir: &Path, package: &Package) -> SyncResult {
    let url = &package.url;
    let problems = entry_problems(package);
    if !problems.is_empty() {
        return SyncResult::rejected(SyncMode::Pull, url, problems);
    }

    match git.pull(&dest_dir.join(package.display_name())) {
        Ok(summary) => {
            info!("{}  {}", url, summary);
            SyncResult::Pulled {
                url: url.clone(),
                summary,
            }
        }
        Err(e) => {
            warn!("Failed to pull {}: {}", url, e);
            SyncResult::failed(SyncMode::Pull, url, &e)
        }
    }
}

/// Verify the package URL without a local checkout.
///
/// Fails if the remote is unreachable or missing, if the URL or display name
/// is unusable, or if the registry entry has no explicit name. A URL starting
/// with `-` is never passed to git.
pub fn check(git: &dyn GitOperations, package: &Package) -> SyncResult {
    let url = &package.url;
    let mut messages = Vec::new();

    match registry::validate_url(url) {
        Err(reason) => messages.push(reason.to_string()),
        Ok(()) => {
            if let Err(e) = git.ls_remote(url) {
                messages.push(
                    e.git_output()
                        .map(str::to_string)
                        .unwrap_or_else(|| e.to_string()),
                );
            }
        }
    }

    if let Err(reason) = registry::validate_name(package.display_name()) {
        messages.push(format!("{:?}: {}", package.display_name(), reason));
    }

    if package.explicit_name().is_none() {
        messages.push("No package name specified".to_string());
    }

    if messages.is_empty() {
        SyncResult::Checked { url: url.clone() }
    } else {
        SyncResult::Failed {
            mode: SyncMode::Check,
            url: url.clone(),
            messages,
        }
    }
}

/// Everything a sync run produced, before rendering.
#[derive(Debug)]
pub struct SyncOutcome {
    pub packages: Vec<Package>,
    pub removals: Vec<Removal>,
    pub results: Vec<SyncResult>,
}

/// Run a complete sync: load the registry, remove orphaned checkouts, then
/// clone/pull (or check) every package in parallel.
///
/// In check mode the destination directory is neither created nor cleaned.
pub fn run(config: &SyncConfig, git: &dyn GitOperations) -> Result<SyncOutcome> {
    let packages = registry::load_all(&config.registry_files, config.excluded_url.as_deref())?;
    let fan_out = FanOut::new(config.jobs)?;
    debug!(
        "Syncing {} packages on {} workers",
        packages.len(),
        fan_out.jobs()
    );

    let mut removals = Vec::new();
    let results = if config.check {
        fan_out.run(&packages, |package| check(git, package))
    } else {
        fs::create_dir_all(&config.dest_dir)?;

        let keep: HashSet<&str> = packages.iter().map(Package::display_name).collect();
        removals = checkouts::remove_orphans(&config.dest_dir, &keep)?;

        let dest_dir = config.dest_dir.as_path();
        fan_out.run(&packages, |package| clone_or_pull(git, dest_dir, package))
    };

    Ok(SyncOutcome {
        packages,
        removals,
        results,
    })
}
