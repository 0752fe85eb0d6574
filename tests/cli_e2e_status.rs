//! End-to-end tests for the `released` and `last-updated` commands

mod common;
use common::prelude::*;

const MISSING_GIT: &str = "/nonexistent/bin/git-for-tests";

#[test]
fn test_released_missing_destination() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("released")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read checkouts"));
}

#[test]
fn test_released_git_failures_are_reported() {
    let fixture = TestFixture::new().with_checkout("SublimeLinter-eslint");

    fixture
        .command()
        .arg("released")
        .arg("--git")
        .arg(MISSING_GIT)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 checkouts failed"))
        .stdout(predicate::str::contains("SublimeLinter-eslint"));
}

#[test]
fn test_last_updated_empty_destination() {
    let fixture = TestFixture::new();
    fixture
        .child("linter_repos")
        .create_dir_all()
        .unwrap();

    fixture
        .command()
        .arg("last-updated")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_released_tagged_and_pending() {
    let fixture = TestFixture::new();
    let tagged = GitSource::init(&fixture.path().join("sources/SublimeLinter-tagged"));
    tagged.tag("v1.2.3");
    let pending = GitSource::init(&fixture.path().join("sources/SublimeLinter-pending"));
    pending.tag("v0.1.0");
    pending.commit("fix.txt", "unreleased fix");

    let (tagged_url, pending_url) = (tagged.url(), pending.url());
    let fixture = fixture.with_file(
        "org.json",
        &registry_json(&[(tagged_url.as_str(), None), (pending_url.as_str(), None)]),
    );
    fixture.command().arg("sync").arg("org.json").assert().success();

    fixture
        .command()
        .arg("released")
        .assert()
        .success()
        .stdout(predicate::str::contains("SublimeLinter-tagged  v1.2.3"))
        .stdout(predicate::str::contains(
            "SublimeLinter-pending  release pending",
        ));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_last_updated_lists_every_checkout() {
    let fixture = TestFixture::new();
    let first = GitSource::init(&fixture.path().join("sources/SublimeLinter-first"));
    let second = GitSource::init(&fixture.path().join("sources/SublimeLinter-second"));

    let (first_url, second_url) = (first.url(), second.url());
    let fixture = fixture.with_file(
        "org.json",
        &registry_json(&[(first_url.as_str(), None), (second_url.as_str(), None)]),
    );
    fixture.command().arg("sync").arg("org.json").assert().success();

    fixture
        .command()
        .arg("last-updated")
        .arg("--jobs")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("  SublimeLinter-first"))
        .stdout(predicate::str::contains("  SublimeLinter-second"));
}
