//! Integration test: the `scan` binary keeps stdout machine-readable.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use wcag_lint_core::ScanReport;

fn project() -> TempDir {
    let tmp = TempDir::new().expect("tempdir");
    fs::create_dir_all(tmp.path().join("src")).expect("mkdir");
    fs::write(
        tmp.path().join("src/Logo.tsx"),
        "export const Logo = () => <img src=\"/logo.svg\" />;\n",
    )
    .expect("write fixture");
    tmp
}

fn scan_json(root: &Path, extra: &[&str]) -> Output {
    let user_dir = root.join(".no-user-config");
    Command::new(env!("CARGO_BIN_EXE_wcag-lint"))
        .args(["scan", "--all", "--format", "json", "--root"])
        .arg(root)
        .args(extra)
        .env("WCAG_LINT_CONFIG_DIR", &user_dir)
        .output()
        .expect("binary should run")
}

fn parse_report(output: &Output) -> ScanReport {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not a JSON report ({e}):\n{stdout}"))
}

#[test]
fn json_report_is_the_only_stdout() {
    let tmp = project();
    let output = scan_json(tmp.path(), &[]);

    assert!(output.status.success(), "{output:?}");
    let report = parse_report(&output);
    assert_eq!(report.files_scanned, 1);
    assert!(report.has_violations());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Scanning 1 file(s)").count(), 1);
}

#[test]
fn verbose_logging_stays_off_stdout() {
    let tmp = project();
    let output = scan_json(tmp.path(), &["--verbose"]);

    let report = parse_report(&output);
    assert_eq!(report.files_scanned, 1);
}
