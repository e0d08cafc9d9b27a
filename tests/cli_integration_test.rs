use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_path_exits_nonzero_with_no_report() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("report.json");

    Command::cargo_bin("portmap")
        .unwrap()
        .args(["analyze", "/nonexistent/library"])
        .args(["--output"])
        .arg(&report_path)
        .assert()
        .failure()
        .stderr(predicates::str::contains("does not exist"));

    assert!(!report_path.exists());
}

#[test]
fn json_report_goes_to_stdout_with_summary_banner() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("src/Widget.java"),
        "import android.widget.TextView;\n",
    )
    .unwrap();

    let assert = Command::cargo_bin("portmap")
        .unwrap()
        .arg("analyze")
        .arg(dir.path())
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("\"library_path\""));
    assert!(stdout.contains("\"ui_view\""));
    assert!(stdout.contains("Migration Complexity:"));
}

#[test]
fn report_file_is_written_and_parseable() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("src/Lib.kt"),
        "import kotlinx.coroutines.flow.Flow\n",
    )
    .unwrap();
    let report_path = dir.path().join("report.json");

    Command::cargo_bin("portmap")
        .unwrap()
        .arg("analyze")
        .arg(dir.path())
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicates::str::contains("Report saved to:"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(value["summary"]["kotlin_files"], 1);
    assert_eq!(value["android_apis"]["threading"]["count"], 1);
    assert_eq!(value["summary"]["complexity"]["level"], "LOW");
}
