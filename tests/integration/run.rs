use crate::common::{make_temp_dir, run_with_input, stderr_lines, stdout_lines};

#[test]
fn words_default_to_natural_order() {
    let dir = make_temp_dir("run");
    let output = run_with_input(&dir, &[], "b a b\nc a a\n");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Total words: 6.", "Sorted data: a a a b b c"]
    );
    assert!(stderr_lines(&output).is_empty());
}

#[test]
fn by_count_reports_counts_and_percentages() {
    let dir = make_temp_dir("run");
    let output = run_with_input(&dir, &["-sortingType", "byCount"], "b a b c a a");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Total words: 6.",
            "c: 1 time(s) 16%",
            "b: 2 time(s) 33%",
            "a: 3 time(s) 50%",
        ]
    );
}

#[test]
fn malformed_numbers_are_warned_and_skipped() {
    let dir = make_temp_dir("run");
    let output = run_with_input(&dir, &["-dataType", "long"], "5 x 3");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Total numbers: 2.", "Sorted data: 3 5"]
    );
    assert_eq!(
        stderr_lines(&output),
        vec!["\"x\" is not a long. It will be skipped."]
    );
}

#[test]
fn lines_print_under_a_header() {
    let dir = make_temp_dir("run");
    let output = run_with_input(&dir, &["-dataType", "line"], "zeta one\nalpha two\n\n");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Total lines: 2.", "Sorted data:", "alpha two", "zeta one"]
    );
}

#[test]
fn empty_input_prints_only_the_total() {
    let dir = make_temp_dir("run");
    let output = run_with_input(&dir, &["-dataType", "long"], "");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["Total numbers: 0."]);
}

#[test]
fn unknown_arguments_are_warned_and_ignored() {
    let dir = make_temp_dir("run");
    let output = run_with_input(&dir, &["-verbose", "-dataType", "word"], "b a");
    assert!(output.status.success());
    assert_eq!(
        stderr_lines(&output),
        vec!["\"-verbose\" is not a valid parameter. It will be skipped."]
    );
    assert_eq!(
        stdout_lines(&output),
        vec!["Total words: 2.", "Sorted data: a b"]
    );
}

#[test]
fn bad_data_type_stops_before_reading() {
    let dir = make_temp_dir("run");
    let output = run_with_input(&dir, &["-dataType", "float"], "1 2 3");
    assert!(!output.status.success());
    assert!(stdout_lines(&output).is_empty());
    assert_eq!(stderr_lines(&output), vec!["No data type defined!"]);
}

#[test]
fn missing_sorting_type_value_stops_before_reading() {
    let dir = make_temp_dir("run");
    let output = run_with_input(&dir, &["-sortingType"], "1 2 3");
    assert!(!output.status.success());
    assert_eq!(stderr_lines(&output), vec!["No sorting type defined!"]);
}

#[test]
fn input_file_replaces_stdin() {
    let dir = make_temp_dir("run");
    std::fs::write(dir.join("numbers.txt"), "10 9\n-1\n").unwrap();
    let output = run_with_input(
        &dir,
        &["-dataType", "long", "-inputFile", "numbers.txt"],
        "ignored 99",
    );
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Total numbers: 3.", "Sorted data: -1 9 10"]
    );
}

#[test]
fn missing_input_file_fails() {
    let dir = make_temp_dir("run");
    let output = run_with_input(&dir, &["-inputFile", "absent.txt"], "");
    assert!(!output.status.success());
    let stderr = stderr_lines(&output).join("\n");
    assert!(stderr.contains("I/O error"), "stderr was: {stderr}");
}
