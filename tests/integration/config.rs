use std::fs;

use crate::common::{make_temp_dir, run_with_input, stderr_lines, stdout_lines};

#[test]
fn config_in_working_directory_sets_defaults() {
    let dir = make_temp_dir("config");
    fs::write(
        dir.join("sorting.json"),
        r#"{ "default_data_type": "long", "default_sorting_type": "byCount" }"#,
    )
    .unwrap();
    let output = run_with_input(&dir, &[], "2 1 2");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Total numbers: 3.", "1: 1 time(s) 33%", "2: 2 time(s) 66%"]
    );
}

#[test]
fn explicit_config_path_is_used_and_flags_win() {
    let dir = make_temp_dir("config");
    fs::write(
        dir.join("custom.json"),
        r#"{ "default_data_type": "line", "default_sorting_type": "byCount" }"#,
    )
    .unwrap();
    let output = run_with_input(
        &dir,
        &["-config", "custom.json", "-sortingType", "natural"],
        "b b\na\n",
    );
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Total lines: 2.", "Sorted data:", "a", "b b"]
    );
}

#[test]
fn missing_explicit_config_fails() {
    let dir = make_temp_dir("config");
    let output = run_with_input(&dir, &["-config", "absent.json"], "a");
    assert!(!output.status.success());
    let stderr = stderr_lines(&output).join("\n");
    assert!(stderr.contains("Configuration file"), "stderr was: {stderr}");
}

#[test]
fn file_logging_records_warnings() {
    let dir = make_temp_dir("config");
    fs::write(
        dir.join("sorting.json"),
        r#"{ "default_data_type": "long", "file_logging_enabled": true, "logs_dir": "logs" }"#,
    )
    .unwrap();
    let output = run_with_input(&dir, &[], "1 nope 2");
    assert!(output.status.success());

    let entry = fs::read_dir(dir.join("logs"))
        .unwrap()
        .find_map(|e| e.ok())
        .expect("a log file should exist");
    let contents = fs::read_to_string(entry.path()).unwrap();
    assert!(contents.contains("WARN"));
    assert!(contents.contains("\"nope\" is not a long"));
    assert!(contents.contains("Total numbers: 2."));
    assert!(contents.contains("Skipped 1 malformed token(s)"));
    assert!(contents.contains("Loaded configuration from sorting.json"));
}
