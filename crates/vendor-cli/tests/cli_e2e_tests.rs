//! CLI end-to-end tests that invoke the compiled `vendor-fix` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use vendor_test_utils::{TestVendor, sha256_hex};

/// `vendor-fix` running in `dir` with colors disabled.
fn vendor_fix(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("vendor-fix").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_exits_zero() {
    vendor_fix(std::env::temp_dir().as_path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("package"));
}

#[test]
fn test_no_args_runs_whole_tree() {
    let vendor = TestVendor::new();
    vendor.add_file("p", "a.txt", "new content");
    vendor.write_stale_manifest("p", &["a.txt"]);

    vendor_fix(vendor.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("p/a.txt"))
        .stdout(predicate::str::contains(sha256_hex(b"new content")));

    assert_eq!(vendor.recorded_digest("p", "a.txt"), Some(sha256_hex(b"new content")));
}

#[test]
fn test_all_missing_vendor_dir_succeeds() {
    let vendor = TestVendor::without_vendor_dir();

    vendor_fix(vendor.root())
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("No vendor directory found"));

    assert!(!vendor.vendor_dir().exists());
}

#[test]
fn test_all_reports_no_changes_on_second_run() {
    let vendor = TestVendor::new();
    vendor.add_file("p", "a.txt", "x");
    vendor.write_stale_manifest("p", &["a.txt"]);

    vendor_fix(vendor.root()).arg("all").assert().success();
    let after_first = vendor.manifest_bytes("p");

    vendor_fix(vendor.root())
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes needed"));
    assert_eq!(vendor.manifest_bytes("p"), after_first);
}

#[test]
fn test_all_skips_malformed_manifest_and_exits_zero() {
    let vendor = TestVendor::new();
    vendor.write_manifest("broken", "not json");
    vendor.add_file("good", "a.txt", "x");
    vendor.write_stale_manifest("good", &["a.txt"]);

    vendor_fix(vendor.root())
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("broken: malformed manifest"));

    assert_eq!(vendor.recorded_digest("good", "a.txt"), Some(sha256_hex(b"x")));
}

#[test]
fn test_all_custom_root() {
    let vendor = TestVendor::new();
    vendor.add_file("p", "a.txt", "x");
    vendor.write_stale_manifest("p", &["a.txt"]);
    std::fs::rename(vendor.vendor_dir(), vendor.root().join("third_party")).unwrap();

    vendor_fix(vendor.root())
        .args(["all", "--root", "third_party"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 checksum(s) in 1 package(s)"));
}

#[test]
fn test_package_without_argument_prints_usage() {
    let vendor = TestVendor::new();

    vendor_fix(vendor.root())
        .arg("package")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_package_missing_manifest_fails() {
    let vendor = TestVendor::new();
    vendor.add_file("p", "a.txt", "x");

    vendor_fix(vendor.root())
        .args(["package", "vendor/p"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Checksum manifest not found"));
}

#[test]
fn test_package_malformed_manifest_fails() {
    let vendor = TestVendor::new();
    vendor.write_manifest("p", "{\"files\":");

    vendor_fix(vendor.root())
        .args(["package", "vendor/p"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse checksum manifest"));
}

#[test]
fn test_package_updates_and_warns_on_missing_file() {
    let vendor = TestVendor::new();
    vendor.add_file("p", "a.txt", "x");
    vendor.write_manifest("p", r#"{"files":{"a.txt":"0","gone.rs":"1"},"package":"abc"}"#);

    vendor_fix(vendor.root())
        .args(["package", "vendor/p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("p/gone.rs listed in checksums but not found"))
        .stdout(predicate::str::contains("Updated checksums in"));

    assert_eq!(
        String::from_utf8(vendor.manifest_bytes("p")).unwrap(),
        format!(r#"{{"files":{{"a.txt":"{}","gone.rs":"1"}},"package":"abc"}}"#, sha256_hex(b"x"))
    );
}

#[test]
fn test_package_dry_run_does_not_write() {
    let vendor = TestVendor::new();
    vendor.add_file("p", "a.txt", "x");
    vendor.write_stale_manifest("p", &["a.txt"]);
    let before = vendor.manifest_bytes("p");

    vendor_fix(vendor.root())
        .args(["package", "vendor/p", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("p: 1 checksum(s) would be updated"));

    assert_eq!(vendor.manifest_bytes("p"), before);
}

#[test]
fn test_package_strict_unreadable_file_fails() {
    let vendor = TestVendor::new();
    vendor.add_file("p", "dir/inner", "x");
    vendor.write_manifest("p", r#"{"files":{"dir":"0"}}"#);

    vendor_fix(vendor.root())
        .args(["package", "vendor/p", "--strict"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));

    vendor_fix(vendor.root())
        .args(["package", "vendor/p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be read"));
}

#[test]
fn test_all_skips_non_utf8_manifest() {
    let vendor = TestVendor::new();
    std::fs::create_dir_all(vendor.package_dir("bad")).unwrap();
    std::fs::write(vendor.manifest_path("bad"), b"{\"files\":{\"a\":\"\xff\xfe\"}}").unwrap();
    vendor.add_file("good", "a.txt", "x");
    vendor.write_stale_manifest("good", &["a.txt"]);

    vendor_fix(vendor.root())
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("bad: malformed manifest"))
        .stdout(predicate::str::contains("1 package(s) skipped"))
        .stdout(predicate::str::contains("failed").not());

    assert_eq!(vendor.recorded_digest("good", "a.txt"), Some(sha256_hex(b"x")));
}
