use assert_cmd::Command;
use predicates::prelude::*;

/// The help output names every action.
#[test]
fn cli_help_lists_actions() {
    let mut cmd = Command::cargo_bin("site").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("activate"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("upload-sample"));
}

#[test]
fn cli_version_prints_package_version() {
    let mut cmd = Command::cargo_bin("site").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn deploy_help_shows_domain_and_selectors() {
    let mut cmd = Command::cargo_bin("site").unwrap();
    cmd.arg("deploy")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<DOMAIN>"))
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--region"));
}

#[test]
fn status_help_shows_resume_flags() {
    let mut cmd = Command::cargo_bin("site").unwrap();
    cmd.arg("status")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--certificate-arn"))
        .stdout(predicate::str::contains("--distribution-id"));
}

#[test]
fn activate_requires_certificate_arn() {
    let mut cmd = Command::cargo_bin("site").unwrap();
    cmd.arg("activate")
        .arg("example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--certificate-arn"));
}

#[test]
fn deploy_requires_a_domain() {
    let mut cmd = Command::cargo_bin("site").unwrap();
    cmd.arg("deploy").assert().failure();
}

#[test]
fn unknown_action_is_an_error() {
    let mut cmd = Command::cargo_bin("site").unwrap();
    cmd.arg("destroy").arg("example.com").assert().failure();
}

/// Domain validation happens before any provider call, so junk input
/// fails fast without credentials.
#[test]
fn junk_domain_is_rejected() {
    let mut cmd = Command::cargo_bin("site").unwrap();
    cmd.arg("deploy")
        .arg("https://example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid domain"));
}
