//! Checkout directories on disk.
//!
//! The destination directory holds one sub-directory per package, named by the
//! package's display name. This module enumerates them and removes orphans,
//! checkouts whose package is no longer in the registry.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::defaults::{GIT_DIR_NAME, SELF_DIR_NAME};
use crate::error::Result;

/// Names of all checkout directories under `dest_dir`, sorted.
pub fn list(dest_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dest_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Whether `dest_dir/name` already is a git working copy.
pub fn is_cloned(dest_dir: &Path, name: &str) -> bool {
    dest_dir.join(name).join(GIT_DIR_NAME).exists()
}

/// Checkout directories whose name is not in `keep`.
///
/// The framework's own checkout is never an orphan.
pub fn find_orphans(dest_dir: &Path, keep: &HashSet<&str>) -> Result<Vec<PathBuf>> {
    Ok(list(dest_dir)?
        .into_iter()
        .filter(|name| name != SELF_DIR_NAME && !keep.contains(name.as_str()))
        .map(|name| dest_dir.join(name))
        .collect())
}

/// What happened to one orphaned checkout.
#[derive(Debug)]
pub struct Removal {
    pub path: PathBuf,
    pub outcome: io::Result<()>,
}

impl Removal {
    pub fn is_removed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Remove every orphaned checkout under `dest_dir`.
pub fn remove_orphans(dest_dir: &Path, keep: &HashSet<&str>) -> Result<Vec<Removal>> {
    remove_orphans_with(dest_dir, keep, |path| fs::remove_dir_all(path))
}

/// Like [`remove_orphans`], with a custom removal function.
///
/// A failed removal is logged and recorded; it never stops the other
/// removals. Only failing to list `dest_dir` itself is an error.
pub fn remove_orphans_with<F>(
    dest_dir: &Path,
    keep: &HashSet<&str>,
    remove: F,
) -> Result<Vec<Removal>>
where
    F: Fn(&Path) -> io::Result<()>,
{
    let removals = find_orphans(dest_dir, keep)?
        .into_iter()
        .map(|path| {
            info!("Remove orphaned package {}", path.display());
            let outcome = remove(&path);
            if let Err(e) = &outcome {
                error!("Failed to remove {}: {}", path.display(), e);
            }
            Removal { path, outcome }
        })
        .collect();

    Ok(removals)
}
