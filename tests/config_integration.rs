use std::path::PathBuf;

use tidymark::config::{ConfigFlags, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".tidymarkrc");
    let content = r#"
# comment
--dry-run

--json --quiet

--event-log=events.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.dry_run);
    assert!(flags.json);
    assert!(flags.quiet);
    assert_eq!(flags.event_log, Some(PathBuf::from("events.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".tidymarkrc");
    let content = "--dry-run\n--event-log file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "tidymark".to_string(),
        "notes.md".to_string(),
        "trim-trailing".to_string(),
        "--perf".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.dry_run, "file flags should remain enabled");
    assert!(effective.perf, "cli flags should be applied");
    assert_eq!(
        effective.event_log,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "tidymark".to_string(),
        "--event-log=run.log".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.event_log, Some(PathBuf::from("run.log")));
}

#[test]
fn test_config_union_merges_booleans() {
    let file = ConfigFlags {
        dry_run: true,
        quiet: true,
        ..ConfigFlags::default()
    };
    let cli = ConfigFlags {
        json: true,
        perf: true,
        ..ConfigFlags::default()
    };
    let merged = file.union(&cli);
    assert!(merged.dry_run);
    assert!(merged.quiet);
    assert!(merged.json);
    assert!(merged.perf);
}
