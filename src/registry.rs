//! # Registry Loading
//!
//! Reads the JSON registry files that list linter packages and turns them into
//! a flat list of [`Package`]s.
//!
//! A registry file looks like:
//!
//! ```json
//! {
//!   "packages": [
//!     { "name": "SublimeLinter-eslint", "details": "https://github.com/SublimeLinter/SublimeLinter-eslint" },
//!     { "details": "https://github.com/someone/SublimeLinter-contrib-foo" }
//!   ]
//! }
//! ```
//!
//! A channel file ties several registry files together:
//!
//! ```json
//! { "includes": ["org.json", "contrib.json"] }
//! ```
//!
//! Registry files are expected to be sorted by lowercased display name and to
//! use every display name once. [`lint`] reports entries violating that.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// A single registered linter repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Explicit package name, if the registry gives one.
    pub name: Option<String>,
    /// Repository URL. This is the identity of the package.
    pub url: String,
}

impl Package {
    pub fn new(name: Option<&str>, url: &str) -> Self {
        Self {
            name: name.map(str::to_string),
            url: url.to_string(),
        }
    }

    /// The explicit name, treating an empty string as absent.
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Name used for the checkout directory and in reports.
    ///
    /// Falls back to the last path segment of the URL when no name is given.
    pub fn display_name(&self) -> &str {
        match self.explicit_name() {
            Some(name) => name,
            None => url_basename(&self.url),
        }
    }

    /// Key the registry files are sorted by.
    pub fn sort_key(&self) -> String {
        self.display_name().to_lowercase()
    }
}

/// Last `/`-separated segment of a URL, ignoring trailing slashes.
pub fn url_basename(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Reject display names that are not a single plain directory name.
///
/// Checkouts live directly under the destination directory, so a name must
/// not be empty, `.` or `..`, contain a path separator, or start with `-`.
pub fn validate_name(name: &str) -> std::result::Result<(), &'static str> {
    if name.is_empty() {
        Err("name is empty")
    } else if name == "." || name == ".." {
        Err("name is a relative path component")
    } else if name.contains(['/', '\\']) {
        Err("name contains a path separator")
    } else if name.starts_with('-') {
        Err("name starts with '-'")
    } else {
        Ok(())
    }
}

/// Reject URLs git could mistake for an option.
pub fn validate_url(url: &str) -> std::result::Result<(), &'static str> {
    if url.starts_with('-') {
        Err("URL starts with '-'")
    } else {
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct RegistryDocument {
    packages: Vec<PackageEntry>,
}

#[derive(Debug, Deserialize)]
struct PackageEntry {
    details: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChannelDocument {
    includes: Vec<PathBuf>,
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| Error::RegistryRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|e| Error::RegistryParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the packages of a single registry file, in file order.
pub fn load_file(path: &Path) -> Result<Vec<Package>> {
    let document: RegistryDocument = read_json(path)?;

    Ok(document
        .packages
        .into_iter()
        .map(|entry| Package {
            name: entry.name,
            url: entry.details,
        })
        .collect())
}

/// Load and flatten several registry files.
///
/// Packages whose URL equals `excluded_url` are dropped and repeated URLs are
/// kept once (first occurrence wins). The result is sorted by lowercased
/// display name. Two different URLs mapping to the same display name would
/// share a checkout directory, so that is rejected, as is a display name that
/// fails [`validate_name`].
pub fn load_all<P: AsRef<Path>>(paths: &[P], excluded_url: Option<&str>) -> Result<Vec<Package>> {
    let mut seen_urls = HashSet::new();
    let mut packages = Vec::new();

    for path in paths {
        for package in load_file(path.as_ref())? {
            if excluded_url == Some(package.url.as_str()) {
                continue;
            }
            if let Err(reason) = validate_name(package.display_name()) {
                return Err(Error::InvalidName {
                    name: package.display_name().to_string(),
                    url: package.url.clone(),
                    reason: reason.to_string(),
                });
            }
            if seen_urls.insert(package.url.clone()) {
                packages.push(package);
            }
        }
    }

    let mut owners: HashMap<&str, &str> = HashMap::new();
    for package in &packages {
        if let Some(first) = owners.insert(package.display_name(), &package.url) {
            return Err(Error::DuplicateName {
                name: package.display_name().to_string(),
                first: first.to_string(),
                second: package.url.clone(),
            });
        }
    }

    packages.sort_by_cached_key(Package::sort_key);
    Ok(packages)
}

/// Read a channel file and return the registry files it includes.
///
/// Relative includes are resolved against the channel file's directory.
pub fn load_channel(path: &Path) -> Result<Vec<PathBuf>> {
    let document: ChannelDocument = read_json(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));

    Ok(document
        .includes
        .into_iter()
        .map(|include| {
            if include.is_absolute() {
                include
            } else {
                base.join(include)
            }
        })
        .collect())
}

/// A violation of the registry file conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
    /// `name` is listed after `previous` but sorts before it.
    OutOfOrder { name: String, previous: String },
    /// `name` is used by more than one entry.
    DuplicateName { name: String },
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintIssue::OutOfOrder { name, previous } => {
                write!(f, "{} should be sorted before {}", name, previous)
            }
            LintIssue::DuplicateName { name } => write!(f, "{} is listed more than once", name),
        }
    }
}

/// Check one registry's packages for ordering and name uniqueness.
pub fn lint(packages: &[Package]) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    for pair in packages.windows(2) {
        if pair[0].sort_key() > pair[1].sort_key() {
            issues.push(LintIssue::OutOfOrder {
                name: pair[1].display_name().to_string(),
                previous: pair[0].display_name().to_string(),
            });
        }
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for package in packages {
        let name = package.display_name();
        if !seen.insert(name) && reported.insert(name) {
            issues.push(LintIssue::DuplicateName {
                name: name.to_string(),
            });
        }
    }

    issues
}
