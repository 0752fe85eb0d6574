//! # Run Configuration
//!
//! Explicit configuration objects handed to each entry point. They are built
//! once from the command line (see `cli`) and carry everything a run needs:
//! where checkouts live, which registry files to read, how many workers to
//! use, and whether the run may touch the disk.
//!
//! ## Positional arguments
//!
//! `sync` accepts a free mix of positional paths:
//!
//! - every argument ending in `.json` is a registry file;
//! - a first argument that does not end in `.json` is the destination
//!   directory.
//!
//! With no `.json` argument the default registry files `org.json` and
//! `contrib.json` are used; with no destination, `linter_repos`. All paths are
//! made absolute against the working directory the run started in.

use std::path::{Path, PathBuf};

use crate::defaults::{default_registry_files, DEFAULT_DEST_DIR, DEFAULT_JOBS, SELF_URL};
use crate::error::{Error, Result};

/// Configuration of a `sync` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Directory holding one checkout per package.
    pub dest_dir: PathBuf,
    /// Registry files to read, in order.
    pub registry_files: Vec<PathBuf>,
    /// Only verify that URLs are reachable; never touch `dest_dir`.
    pub check: bool,
    /// Worker pool size.
    pub jobs: usize,
    /// URL listed in the registry but never mirrored.
    pub excluded_url: Option<String>,
}

impl SyncConfig {
    /// Build a configuration from positional arguments.
    pub fn from_positionals(
        paths: &[PathBuf],
        check: bool,
        jobs: Option<usize>,
        cwd: &Path,
    ) -> Result<Self> {
        let mut dest_dir = None;
        let mut registry_files = Vec::new();

        for (index, path) in paths.iter().enumerate() {
            if is_registry_file(path) {
                registry_files.push(cwd.join(path));
            } else if index == 0 {
                dest_dir = Some(cwd.join(path));
            } else {
                return Err(Error::InvalidArgument {
                    argument: path.display().to_string(),
                    message: "expected a .json registry file; the destination directory must come first"
                        .to_string(),
                });
            }
        }

        if registry_files.is_empty() {
            registry_files = default_registry_files()
                .into_iter()
                .map(|file| cwd.join(file))
                .collect();
        }

        Ok(Self {
            dest_dir: dest_dir.unwrap_or_else(|| cwd.join(DEFAULT_DEST_DIR)),
            registry_files,
            check,
            jobs: jobs.unwrap_or(DEFAULT_JOBS),
            excluded_url: Some(SELF_URL.to_string()),
        })
    }
}

/// Configuration of the read-only `released` and `last-updated` reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    /// Directory holding one checkout per package.
    pub dest_dir: PathBuf,
    /// Worker pool size.
    pub jobs: usize,
}

impl StatusConfig {
    pub fn new(dest_dir: Option<&Path>, jobs: Option<usize>, cwd: &Path) -> Self {
        Self {
            dest_dir: cwd.join(dest_dir.unwrap_or_else(|| Path::new(DEFAULT_DEST_DIR))),
            jobs: jobs.unwrap_or(DEFAULT_JOBS),
        }
    }
}

fn is_registry_file(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(args: &[&str]) -> Vec<PathBuf> {
        args.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cwd = Path::new("/work");
        let config = SyncConfig::from_positionals(&[], false, None, cwd).unwrap();

        assert_eq!(config.dest_dir, PathBuf::from("/work/linter_repos"));
        assert_eq!(
            config.registry_files,
            vec![
                PathBuf::from("/work/org.json"),
                PathBuf::from("/work/contrib.json")
            ]
        );
        assert!(!config.check);
        assert_eq!(config.jobs, DEFAULT_JOBS);
        assert_eq!(config.excluded_url.as_deref(), Some(SELF_URL));
    }

    #[test]
    fn test_json_arguments_only() {
        let cwd = Path::new("/work");
        let config =
            SyncConfig::from_positionals(&paths(&["org.json", "contrib.json"]), true, Some(4), cwd)
                .unwrap();

        assert_eq!(config.dest_dir, PathBuf::from("/work/linter_repos"));
        assert_eq!(config.registry_files.len(), 2);
        assert!(config.check);
        assert_eq!(config.jobs, 4);
    }

    #[test]
    fn test_destination_first() {
        let cwd = Path::new("/work");
        let config = SyncConfig::from_positionals(
            &paths(&["other/dest/folder/", "org.json"]),
            false,
            None,
            cwd,
        )
        .unwrap();

        assert_eq!(config.dest_dir, PathBuf::from("/work/other/dest/folder/"));
        assert_eq!(config.registry_files, vec![PathBuf::from("/work/org.json")]);
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let cwd = Path::new("/work");
        let config =
            SyncConfig::from_positionals(&paths(&["/srv/repos", "/etc/org.json"]), false, None, cwd)
                .unwrap();

        assert_eq!(config.dest_dir, PathBuf::from("/srv/repos"));
        assert_eq!(config.registry_files, vec![PathBuf::from("/etc/org.json")]);
    }

    #[test]
    fn test_destination_after_registry_is_rejected() {
        let cwd = Path::new("/work");
        let err = SyncConfig::from_positionals(&paths(&["org.json", "dest"]), false, None, cwd)
            .unwrap_err();

        assert!(matches!(err, Error::InvalidArgument { ref argument, .. } if argument == "dest"));
    }

    #[test]
    fn test_status_config_defaults() {
        let config = StatusConfig::new(None, None, Path::new("/work"));
        assert_eq!(config.dest_dir, PathBuf::from("/work/linter_repos"));
        assert_eq!(config.jobs, DEFAULT_JOBS);
    }

    #[test]
    fn test_status_config_explicit() {
        let config = StatusConfig::new(Some(Path::new("mirror")), Some(2), Path::new("/work"));
        assert_eq!(config.dest_dir, PathBuf::from("/work/mirror"));
        assert_eq!(config.jobs, 2);
    }
}
