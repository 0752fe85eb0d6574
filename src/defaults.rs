//! Default values for linter-registry configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// Destination directory used when none is given on the command line.
pub const DEFAULT_DEST_DIR: &str = "linter_repos";

/// Registry files read when no `.json` argument is given.
pub const DEFAULT_REGISTRY_FILES: [&str; 2] = ["org.json", "contrib.json"];

/// Channel file listing all registry files, used by `lint`.
pub const DEFAULT_CHANNEL_FILE: &str = "packages.json";

/// The framework's own repository. It is listed in the registry but is never
/// mirrored alongside the linters.
pub const SELF_URL: &str = "https://github.com/SublimeLinter/SublimeLinter";

/// Checkout directory of the framework itself, never treated as an orphan.
pub const SELF_DIR_NAME: &str = "SublimeLinter";

/// Number of worker threads for the fan-out executor.
pub const DEFAULT_JOBS: usize = 10;

/// Git program invoked when `--git` is not given.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Metadata directory whose presence marks a checkout as cloned.
pub const GIT_DIR_NAME: &str = ".git";

/// Returns the default registry files as owned strings.
pub fn default_registry_files() -> Vec<String> {
    DEFAULT_REGISTRY_FILES
        .iter()
        .map(|file| file.to_string())
        .collect()
}
