//! # Reports
//!
//! Turns the records collected from the workers into the text printed at the
//! end of each command, and into the process exit code.
//!
//! Workers finish in any order, so every report sorts its records itself.
//! Rendering is separated from printing so the layout can be tested.

use std::fmt::Write;
use std::path::PathBuf;

use crate::exit_codes;
use crate::output::OutputConfig;
use crate::registry::LintIssue;
use crate::status::{LastUpdated, ReleaseStatus, StatusOutcome, UnitFailure};
use crate::sync::{SyncMode, SyncOutcome, SyncResult};

/// Summary of a `sync` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub check: bool,
    pub packages: usize,
    pub cloned: usize,
    pub pulled: usize,
    pub checked: usize,
    pub removed: usize,
    /// Failed results, sorted by URL.
    pub failures: Vec<SyncResult>,
}

impl SyncReport {
    pub fn new(check: bool, packages: usize, results: &[SyncResult]) -> Self {
        let successes = |mode: SyncMode| {
            results
                .iter()
                .filter(|r| r.is_success() && r.mode() == mode)
                .count()
        };

        let mut failures: Vec<SyncResult> =
            results.iter().filter(|r| !r.is_success()).cloned().collect();
        failures.sort_by(|a, b| a.url().cmp(b.url()));

        Self {
            check,
            packages,
            cloned: successes(SyncMode::Clone),
            pulled: successes(SyncMode::Pull),
            checked: successes(SyncMode::Check),
            removed: 0,
            failures,
        }
    }

    pub fn from_outcome(check: bool, outcome: &SyncOutcome) -> Self {
        let mut report = Self::new(check, outcome.packages.len(), &outcome.results);
        report.removed = outcome.removals.iter().filter(|r| r.is_removed()).count();
        report
    }

    pub fn exit_code(&self) -> u8 {
        exit_codes::from_failures(self.failures.len())
    }

    pub fn render(&self, out: &OutputConfig) -> String {
        let mut text = String::new();

        let _ = writeln!(text, "Found {} packages", self.packages);
        if self.check {
            let _ = writeln!(text, "Checked {} repositories", self.checked);
        } else {
            let _ = writeln!(text, "Cloned {} repositories", self.cloned);
            let _ = writeln!(text, "Pulled {} repositories", self.pulled);
            if self.removed > 0 {
                let _ = writeln!(text, "Removed {} orphaned checkouts", self.removed);
            }
        }

        let failed = format!("{} repositories failed", self.failures.len());
        if self.failures.is_empty() {
            let _ = writeln!(text, "{}", out.ok(failed));
        } else {
            let _ = writeln!(text, "{}", out.failure(failed));
        }

        for failure in &self.failures {
            let _ = writeln!(text, "{} ({})", failure.url(), failure.mode());
            for message in failure.messages() {
                for (index, line) in message.lines().enumerate() {
                    let prefix = if index == 0 { "- " } else { "  " };
                    let _ = writeln!(text, "{}{}", prefix, out.dim(line));
                }
            }
            text.push('\n');
        }

        text
    }
}

/// Release state of all checkouts.
#[derive(Debug)]
pub struct ReleaseReport {
    pub tagged: Vec<ReleaseStatus>,
    pub pending: Vec<ReleaseStatus>,
    pub failures: Vec<UnitFailure>,
}

impl ReleaseReport {
    pub fn new(outcome: StatusOutcome<ReleaseStatus>) -> Self {
        let (mut tagged, mut pending): (Vec<_>, Vec<_>) = outcome
            .entries
            .into_iter()
            .partition(|status| status.tag().is_some());
        tagged.sort_by(|a, b| a.name.cmp(&b.name));
        pending.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            tagged,
            pending,
            failures: sorted_failures(outcome.failures),
        }
    }

    pub fn exit_code(&self) -> u8 {
        exit_codes::from_failures(self.failures.len())
    }

    pub fn render(&self, out: &OutputConfig) -> String {
        let mut text = String::new();

        for status in &self.tagged {
            let _ = writeln!(
                text,
                "{}  {}",
                status.name,
                out.ok(status.tag().unwrap_or_default())
            );
        }

        // Three blank lines between tagged and pending checkouts.
        text.push_str("\n\n\n");
        for status in &self.pending {
            let _ = writeln!(text, "{}  {}", status.name, out.pending("release pending"));
        }

        render_failures(&mut text, &self.failures, out);
        text
    }
}

/// Last commit date of all checkouts, oldest first.
#[derive(Debug)]
pub struct UpdatedReport {
    pub entries: Vec<LastUpdated>,
    pub failures: Vec<UnitFailure>,
}

impl UpdatedReport {
    pub fn new(outcome: StatusOutcome<LastUpdated>) -> Self {
        let mut entries = outcome.entries;
        entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));

        Self {
            entries,
            failures: sorted_failures(outcome.failures),
        }
    }

    pub fn exit_code(&self) -> u8 {
        exit_codes::from_failures(self.failures.len())
    }

    pub fn render(&self, out: &OutputConfig) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            let _ = writeln!(
                text,
                "{}  {}",
                out.dim(entry.date.to_rfc3339()),
                entry.name
            );
        }
        render_failures(&mut text, &self.failures, out);
        text
    }
}

/// Lint findings for a set of registry files.
#[derive(Debug, Default)]
pub struct LintReport {
    pub files: Vec<(PathBuf, Vec<LintIssue>)>,
}

impl LintReport {
    pub fn push(&mut self, file: PathBuf, issues: Vec<LintIssue>) {
        self.files.push((file, issues));
    }

    pub fn issue_count(&self) -> usize {
        self.files.iter().map(|(_, issues)| issues.len()).sum()
    }

    pub fn exit_code(&self) -> u8 {
        exit_codes::from_failures(self.issue_count())
    }

    pub fn render(&self, out: &OutputConfig) -> String {
        let mut text = String::new();

        for (file, issues) in &self.files {
            for issue in issues {
                let _ = writeln!(text, "{}: {}", file.display(), issue);
            }
        }

        let count = self.issue_count();
        if count == 0 {
            let summary = format!("{} registry files are sorted", self.files.len());
            let _ = writeln!(text, "{}", out.ok(summary));
        } else {
            let summary = format!(
                "{} issues in {} registry files",
                count,
                self.files.len()
            );
            let _ = writeln!(text, "{}", out.failure(summary));
        }

        text
    }
}

fn sorted_failures(mut failures: Vec<UnitFailure>) -> Vec<UnitFailure> {
    failures.sort_by(|a, b| a.name.cmp(&b.name));
    failures
}

fn render_failures(text: &mut String, failures: &[UnitFailure], out: &OutputConfig) {
    if failures.is_empty() {
        return;
    }

    let _ = writeln!(
        text,
        "\n{}",
        out.failure(format!("{} checkouts failed", failures.len()))
    );
    for failure in failures {
        let _ = writeln!(text, "{}", failure.name);
        for line in failure.message.lines() {
            let _ = writeln!(text, "- {}", out.dim(line));
        }
    }
}
