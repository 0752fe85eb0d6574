//! Read-only status queries over existing checkouts.
//!
//! Two reports walk every checkout directory under the destination:
//!
//! - **released**: does HEAD sit exactly on a tag? Untagged HEADs are not an
//!   error, they are reported as "release pending".
//! - **last-updated**: author date of the newest commit.
//!
//! Both fan out one git query per checkout. A query that cannot run at all
//! (git missing, directory is not a repository) is recorded as a
//! [`UnitFailure`] and the remaining checkouts are still reported.

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use log::{debug, warn};

use crate::checkouts;
use crate::config::StatusConfig;
use crate::error::{Error, Result};
use crate::executor::FanOut;
use crate::repository::GitOperations;

/// Release state of a checkout's HEAD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Release {
    /// HEAD is exactly on this tag.
    Tagged(String),
    /// HEAD has commits after the last tag.
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseStatus {
    pub name: String,
    pub release: Release,
}

impl ReleaseStatus {
    pub fn tag(&self) -> Option<&str> {
        match &self.release {
            Release::Tagged(tag) => Some(tag),
            Release::Pending => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastUpdated {
    pub name: String,
    pub date: DateTime<FixedOffset>,
}

/// A checkout whose query could not be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure {
    pub name: String,
    pub message: String,
}

impl UnitFailure {
    fn new(name: &str, error: &Error) -> Self {
        warn!("{}: {}", name, error);
        Self {
            name: name.to_string(),
            message: error
                .git_output()
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string()),
        }
    }
}

/// Entries and failures collected from every checkout.
#[derive(Debug)]
pub struct StatusOutcome<T> {
    pub entries: Vec<T>,
    pub failures: Vec<UnitFailure>,
}

pub fn describe_head(
    git: &dyn GitOperations,
    root: &Path,
    name: &str,
) -> std::result::Result<ReleaseStatus, UnitFailure> {
    let release = match git.describe_exact_tag(&root.join(name)) {
        Ok(Some(tag)) => Release::Tagged(tag),
        Ok(None) => Release::Pending,
        Err(e) => return Err(UnitFailure::new(name, &e)),
    };

    Ok(ReleaseStatus {
        name: name.to_string(),
        release,
    })
}

pub fn last_updated(
    git: &dyn GitOperations,
    root: &Path,
    name: &str,
) -> std::result::Result<LastUpdated, UnitFailure> {
    git.last_commit_date(&root.join(name))
        .map(|date| LastUpdated {
            name: name.to_string(),
            date,
        })
        .map_err(|e| UnitFailure::new(name, &e))
}

/// Query the release state of every checkout.
pub fn released(config: &StatusConfig, git: &dyn GitOperations) -> Result<StatusOutcome<ReleaseStatus>> {
    let root = config.dest_dir.as_path();
    collect(config, |name| describe_head(git, root, name))
}

/// Query the last commit date of every checkout.
pub fn last_updated_all(
    config: &StatusConfig,
    git: &dyn GitOperations,
) -> Result<StatusOutcome<LastUpdated>> {
    let root = config.dest_dir.as_path();
    collect(config, |name| last_updated(git, root, name))
}

fn collect<T, F>(config: &StatusConfig, query: F) -> Result<StatusOutcome<T>>
where
    T: Send,
    F: Fn(&str) -> std::result::Result<T, UnitFailure> + Sync + Send,
{
    let names = checkouts::list(&config.dest_dir)?;
    let fan_out = FanOut::new(config.jobs)?;
    debug!(
        "Querying {} checkouts on {} workers",
        names.len(),
        fan_out.jobs()
    );

    let mut outcome = StatusOutcome {
        entries: Vec::with_capacity(names.len()),
        failures: Vec::new(),
    };
    for result in fan_out.run(&names, |name| query(name)) {
        match result {
            Ok(entry) => outcome.entries.push(entry),
            Err(failure) => outcome.failures.push(failure),
        }
    }
    Ok(outcome)
}
