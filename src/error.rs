//! # Error Handling
//!
//! Central error type for the `linter-registry` library, built with
//! `thiserror`.
//!
//! Only failures that abort a whole run are represented here: unreadable or
//! malformed registry files, invalid arguments, a thread pool that cannot be
//! built, or I/O on the destination directory. Failures of a single
//! repository (a clone that fails, an unreachable URL) are turned into data
//! by the workers and surface in the final report instead.
//!
//! The `git` module still reports subprocess failures as
//! [`Error::GitCommand`]; the workers catch that variant at the per-item
//! boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for linter-registry operations
#[derive(Error, Debug)]
pub enum Error {
    /// A registry or channel file could not be read from disk.
    #[error("Failed to read registry file {}: {source}", path.display())]
    RegistryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A registry or channel file is not valid JSON or does not have the
    /// expected shape.
    #[error("Failed to parse registry file {}: {message}", path.display())]
    RegistryParse { path: PathBuf, message: String },

    /// Two different URLs resolve to the same checkout directory.
    #[error("Duplicate package name {name:?} for {first} and {second}")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    /// A display name cannot be used as a directory directly under the
    /// destination.
    #[error("Invalid package name {name:?} for {url}: {reason}")]
    InvalidName {
        name: String,
        url: String,
        reason: String,
    },

    /// A git subprocess could not be spawned or exited unsuccessfully.
    ///
    /// `output` holds stderr followed by stdout of the process, or the spawn
    /// error when the program could not be started.
    #[error("Git command failed for {target}: {command} - {output}")]
    GitCommand {
        command: String,
        target: String,
        output: String,
    },

    /// Git produced output that could not be interpreted.
    #[error("Unexpected git output for {target}: {message}")]
    GitOutput { target: String, message: String },

    /// A command-line argument could not be interpreted.
    #[error("Invalid argument {argument:?}: {message}")]
    InvalidArgument { argument: String, message: String },

    /// The worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The human-readable output of a failed git command, if this is one.
    ///
    /// Workers use this to turn an error into report messages.
    pub fn git_output(&self) -> Option<&str> {
        match self {
            Error::GitCommand { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
