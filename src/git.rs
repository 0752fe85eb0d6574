//! Thin wrappers around the system `git` program.
//!
//! Every function takes the git program to run so tests and users can point
//! at a different binary. The system git automatically handles:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Any authentication configured in ~/.gitconfig
//!
//! Interactive credential prompts are disabled, so a missing or private
//! repository fails instead of blocking a worker thread.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use chrono::{DateTime, FixedOffset};
use log::debug;

use crate::error::{Error, Result};

fn git_command(program: &Path, cwd: Option<&Path>) -> Command {
    let mut cmd = Command::new(program);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    cmd.stdin(Stdio::null()).env("GIT_TERMINAL_PROMPT", "0");
    cmd
}

/// Spawn git and wait for it, failing only if it could not be started.
fn spawn<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    cwd: Option<&Path>,
    target: &str,
) -> Result<Output> {
    let command = describe(args);
    debug!("git {} ({})", command, target);

    git_command(program, cwd)
        .args(args)
        .output()
        .map_err(|e| Error::GitCommand {
            command,
            target: target.to_string(),
            output: format!("failed to run {}: {}", program.display(), e),
        })
}

/// Run git and return its stdout, failing on a non-zero exit.
fn run<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    cwd: Option<&Path>,
    target: &str,
) -> Result<String> {
    let output = spawn(program, args, cwd, target)?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: describe(args),
            target: target.to_string(),
            output: combined_output(&output),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn describe<S: AsRef<OsStr>>(args: &[S]) -> String {
    args.iter()
        .map(|arg| arg.as_ref().to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stderr followed by stdout, the way a terminal would have shown them.
fn combined_output(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parts: Vec<&str> = [stderr.trim(), stdout.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        parts.join("\n")
    }
}

/// Clone `url` into `dest_dir/name`.
///
/// `url` and `name` follow `--`, so git never reads them as options.
pub fn clone(program: &Path, url: &str, dest_dir: &Path, name: &str) -> Result<()> {
    run(program, &["clone", "--", url, name], Some(dest_dir), url).map(|_| ())
}

/// Pull the current branch of `checkout`, returning git's trimmed output.
pub fn pull(program: &Path, checkout: &Path) -> Result<String> {
    let target = checkout.display().to_string();
    run(program, &["pull"], Some(checkout), &target).map(|out| out.trim_end().to_string())
}

/// Query the refs of a remote repository without a local checkout.
///
/// Succeeds only if the repository exists and is reachable. `url` follows
/// `--`, so a value starting with `-` is taken as a repository, not an option.
pub fn ls_remote(program: &Path, url: &str) -> Result<()> {
    run(program, &["ls-remote", "--", url], None, url).map(|_| ())
}

/// Return the tag HEAD of `checkout` points at exactly, if any.
///
/// A non-zero exit from `git describe` means there is no such tag and is
/// reported as `Ok(None)`; only a failure to run git at all is an error.
pub fn describe_exact_tag(program: &Path, checkout: &Path) -> Result<Option<String>> {
    let target = checkout.display().to_string();
    let output = spawn(
        program,
        &["describe", "--exact-match", "--tags"],
        Some(checkout),
        &target,
    )?;

    if !output.status.success() {
        debug!("no exact tag for {}: {}", target, combined_output(&output));
        return Ok(None);
    }

    let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(Some(tag).filter(|tag| !tag.is_empty()))
}

/// Author date of the most recent commit in `checkout`.
pub fn last_commit_date(program: &Path, checkout: &Path) -> Result<DateTime<FixedOffset>> {
    let target = checkout.display().to_string();
    let stdout = run(
        program,
        &["log", "-n1", "--format=%aI"],
        Some(checkout),
        &target,
    )?;

    parse_commit_date(stdout.trim()).map_err(|message| Error::GitOutput { target, message })
}

/// Parse the strict ISO 8601 date printed by `--format=%aI`.
pub fn parse_commit_date(raw: &str) -> std::result::Result<DateTime<FixedOffset>, String> {
    if raw.is_empty() {
        return Err("no commits".to_string());
    }
    DateTime::parse_from_rfc3339(raw).map_err(|e| format!("invalid date {:?}: {}", raw, e))
}
