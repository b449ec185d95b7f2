use std::path::Path;
use std::process::{Command, Output};

fn tidymark(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tidymark"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("HOME", dir)
        .env_remove("TIDYMARK_EVENT_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_strip_all_bold_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.md"), "**a** and **b**\n").unwrap();

    let output = tidymark(dir.path(), &["notes.md", "strip-all-bold"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[info] Removed 2 bold spans"), "{stderr}");

    let content = std::fs::read_to_string(dir.path().join("notes.md")).unwrap();
    assert_eq!(content, "a and b\n");
}

#[test]
fn test_dry_run_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.md"), "a  \nb").unwrap();

    let output = tidymark(dir.path(), &["notes.md", "trim-trailing", "--dry-run"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a\nb");
    let content = std::fs::read_to_string(dir.path().join("notes.md")).unwrap();
    assert_eq!(content, "a  \nb");
}

#[test]
fn test_json_report_includes_selection() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.md"), "x\n**a** **b**").unwrap();

    let output = tidymark(
        dir.path(),
        &["notes.md", "next-bold", "--cursor", "1:1", "--json"],
    );
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["kind"], "applied");
    assert_eq!(report["caret"]["line"], 1);
    assert_eq!(report["caret"]["column"], 6);
    assert_eq!(report["selection"]["anchor"]["column"], 11);
}

#[test]
fn test_precondition_failure_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.md"), "a\nb").unwrap();

    let output = tidymark(dir.path(), &["notes.md", "delete-lines", "--select", "0:0..0:1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[error] Selection must span multiple lines"), "{stderr}");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = tidymark(dir.path(), &["absent.md", "delete-line"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
}

#[test]
fn test_unknown_command_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.md"), "a").unwrap();
    let output = tidymark(dir.path(), &["notes.md", "embolden"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown command `embolden`"));
}

#[test]
fn test_event_log_records_the_command() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.md"), "a\n---\nb").unwrap();

    let output = tidymark(
        dir.path(),
        &["notes.md", "remove-dividers", "--event-log", "events.jsonl"],
    );
    assert!(output.status.success());

    let log = std::fs::read_to_string(dir.path().join("events.jsonl")).unwrap();
    let events: Vec<serde_json::Value> = log
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(events.len(), 1, "{log}");
    assert_eq!(events[0]["command"], "remove-dividers");
    assert_eq!(events[0]["kind"], "applied");
    assert_eq!(events[0]["count"], 1);
}
