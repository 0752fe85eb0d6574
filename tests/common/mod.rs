//! Shared test utilities for the CLI end-to-end tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_file("org.json", registries::EMPTY);
//!     fixture.command().arg("lint").arg("org.json").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::registries;
    #[allow(unused_imports)]
    pub use super::{registry_json, GitSource};
    pub use super::TestFixture;
}

/// Registry file contents used across tests.
#[allow(dead_code)]
pub mod registries {
    /// A registry with no packages.
    pub const EMPTY: &str = r#"{"packages": []}"#;

    /// Three packages, sorted by lowercased display name.
    pub const SORTED: &str = r#"{"packages": [
        {"name": "SublimeLinter-annotations", "details": "https://github.com/SublimeLinter/SublimeLinter-annotations"},
        {"details": "https://github.com/SublimeLinter/SublimeLinter-eslint"},
        {"name": "SublimeLinter-flake8", "details": "https://github.com/SublimeLinter/SublimeLinter-flake8"}
    ]}"#;

    /// Two packages in the wrong order.
    pub const UNSORTED: &str = r#"{"packages": [
        {"details": "https://github.com/SublimeLinter/SublimeLinter-pylint"},
        {"details": "https://github.com/SublimeLinter/SublimeLinter-eslint"}
    ]}"#;

    /// Not valid JSON.
    pub const MALFORMED: &str = r#"{"packages": [ {"details": "#;
}

/// Build a registry document from `(url, name)` pairs.
#[allow(dead_code)]
pub fn registry_json(packages: &[(&str, Option<&str>)]) -> String {
    let entries: Vec<serde_json::Value> = packages
        .iter()
        .map(|(url, name)| match name {
            Some(name) => serde_json::json!({"details": url, "name": name}),
            None => serde_json::json!({"details": url}),
        })
        .collect();
    serde_json::json!({ "packages": entries }).to_string()
}

/// A temporary working directory for one CLI invocation.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add an (empty) checkout directory `linter_repos/<name>`.
    pub fn with_checkout(self, name: &str) -> Self {
        self.temp_dir
            .child("linter_repos")
            .child(name)
            .child(".git")
            .create_dir_all()
            .expect("Failed to create checkout");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the default destination directory.
    pub fn dest(&self) -> PathBuf {
        self.temp_dir.path().join("linter_repos")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// The CLI binary with the fixture as working directory and colors off.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("linter-registry");
        cmd.current_dir(self.path())
            .env_remove("LINTER_REGISTRY_GIT")
            .env_remove("LINTER_REGISTRY_JOBS")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A local git repository usable as a clone source.
///
/// Only used by tests behind the `integration-tests` feature, which need a
/// real `git` on the `PATH`.
#[allow(dead_code)]
pub struct GitSource {
    path: PathBuf,
}

#[allow(dead_code)]
impl GitSource {
    /// Initialize a repository at `path` with one commit.
    pub fn init(path: &Path) -> Self {
        std::fs::create_dir_all(path).expect("Failed to create source directory");
        let source = Self {
            path: path.to_path_buf(),
        };
        source.git(&["init", "--quiet"]);
        source.commit("README.md", "initial");
        source
    }

    /// Write a file and commit it.
    pub fn commit(&self, file: &str, content: &str) {
        std::fs::write(self.path.join(file), content).expect("Failed to write file");
        self.git(&["add", file]);
        self.git(&["commit", "--quiet", "-m", content]);
    }

    /// Tag HEAD.
    pub fn tag(&self, tag: &str) {
        self.git(&["tag", tag]);
    }

    /// Register `url` as the remote `name`.
    pub fn add_remote(&self, name: &str, url: &str) {
        self.git(&["remote", "add", name, url]);
    }

    /// URL to clone from.
    pub fn url(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args([
                "-c",
                "user.name=Registry Tests",
                "-c",
                "user.email=tests@example.com",
                "-c",
                "commit.gpgsign=false",
                "-c",
                "tag.gpgsign=false",
            ])
            .args(args)
            .current_dir(&self.path)
            .status()
            .expect("Failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }
}
