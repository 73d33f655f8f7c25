// End-to-end conversion tests against real files on disk

use jacoco_report::{ConvertConfig, ConvertError, Converter, MalformedRowPolicy, Percentage};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = "GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED,\
BRANCH_MISSED,BRANCH_COVERED,LINE_MISSED,LINE_COVERED,COMPLEXITY_MISSED,\
COMPLEXITY_COVERED,METHOD_MISSED,METHOD_COVERED";

fn write_report(dir: &TempDir, lines: &[&str]) -> PathBuf {
    let path = dir.path().join("jacocoTestReport.csv");
    let mut content = String::from(HEADER);
    content.push('\n');
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

fn convert_default(dir: &TempDir, lines: &[&str]) -> String {
    let input = write_report(dir, lines);
    let output = dir.path().join("output_table.html");
    Converter::new().convert(&input, &output).unwrap();
    fs::read_to_string(&output).unwrap()
}

#[test]
fn test_one_table_row_per_input_row() {
    let dir = TempDir::new().unwrap();
    let html = convert_default(
        &dir,
        &[
            "demo,com.example,Foo,10,90,5,15,0,0,0,0,0,0",
            "demo,com.example,Bar,1,1,1,1,0,0,0,0,0,0",
            "demo,com.example.util,Baz,0,4,0,2,0,0,0,0,0,0",
        ],
    );

    // 3 data rows + 1 header row, and exactly one summary line
    assert_eq!(html.matches("<tr").count(), 4);
    assert_eq!(html.matches("<h1").count(), 1);
}

#[test]
fn test_rendered_percentages_match_counters() {
    let dir = TempDir::new().unwrap();
    let html = convert_default(
        &dir,
        &[
            "g,p,Thirds,2,1,1,2,0,0,0,0,0,0",
            "g,p,Tenths,1,999,0,0,0,0,0,0,0,0",
        ],
    );

    // 1/(1+2) and 2/(2+1), rendered to two decimals
    assert!(html.contains("33.33%"));
    assert!(html.contains("66.67%"));
    // 999/(999+1)
    assert!(html.contains("99.90%"));
}

#[test]
fn test_conversion_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let input = write_report(
        &dir,
        &[
            "demo,com.example,Foo,10,90,5,15,0,0,0,0,0,0",
            "demo,com.example,Bar,0,0,0,0,0,0,0,0,0,0",
        ],
    );
    let first = dir.path().join("first.html");
    let second = dir.path().join("second.html");

    let converter = Converter::new();
    converter.convert(&input, &first).unwrap();
    converter.convert(&input, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_rerun_overwrites_same_output() {
    let dir = TempDir::new().unwrap();
    let input = write_report(&dir, &["demo,com.example,Foo,10,90,5,15,0,0,0,0,0,0"]);
    let output = dir.path().join("output_table.html");

    let converter = Converter::new();
    converter.convert(&input, &output).unwrap();
    let before = fs::read(&output).unwrap();
    converter.convert(&input, &output).unwrap();
    let after = fs::read(&output).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_zero_counters_use_sentinel() {
    let dir = TempDir::new().unwrap();
    let html = convert_default(&dir, &["G,com.example,Bar,0,0,0,0,0,0,0,0,0,0"]);

    // Both per-row percentages and the aggregate are n/a, all styled red
    assert_eq!(html.matches("n/a").count(), 3);
    assert_eq!(html.matches("color: red").count(), 3);
    assert!(!html.contains("darkgreen"));
    assert!(html.contains("Total Branch Coverage: n/a"));
}

#[test]
fn test_header_only_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_report(&dir, &[]);
    let output = dir.path().join("output_table.html");

    let err = Converter::new().convert(&input, &output).unwrap_err();

    assert!(matches!(err, ConvertError::EmptyInput(_)));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("does_not_exist.csv");
    let output = dir.path().join("output_table.html");

    let err = Converter::new().convert(&input, &output).unwrap_err();

    assert!(matches!(err, ConvertError::NotFound(_)));
    assert!(err.to_string().contains("does_not_exist.csv"));
    assert!(!output.exists());
}

#[test]
fn test_covered_class_renders_green() {
    let dir = TempDir::new().unwrap();
    let html = convert_default(&dir, &["G,com.example,Foo,10,90,5,15,0,0,0,0,0,0"]);

    assert!(html.contains("90.00%"));
    assert!(html.contains("75.00%"));
    // Two row percentages plus the total, all at or above the threshold
    assert_eq!(html.matches("darkgreen").count(), 3);
    assert!(!html.contains("color: red"));
}

#[test]
fn test_totals_accumulate_across_rows() {
    let dir = TempDir::new().unwrap();
    let html = convert_default(
        &dir,
        &[
            "G,com.example,AllTaken,0,0,0,10,0,0,0,0,0,0",
            "G,com.example,NoneTaken,0,0,10,0,0,0,0,0,0,0",
        ],
    );

    assert!(html.contains("100.00%"));
    assert!(html.contains("0.00%"));
    assert!(html.contains("Total Branch Coverage: 50.00%"));
    // The 0.00% branch cell is below the default threshold
    assert!(html.contains("color: red"));
    // The total itself is green
    let summary_start = html.find("<h1").unwrap();
    assert!(html[summary_start..].contains("darkgreen"));
}

#[test]
fn test_malformed_counter_fails_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_report(
        &dir,
        &[
            "demo,com.example,Good,10,90,5,15,0,0,0,0,0,0",
            "demo,com.example,Bad,10,ninety,5,15,0,0,0,0,0,0",
        ],
    );
    let output = dir.path().join("output_table.html");

    let err = Converter::new().convert(&input, &output).unwrap_err();

    assert!(matches!(err, ConvertError::Read(_)));
    assert!(err.to_string().contains("row 2"));
    assert!(!output.exists());
}

#[test]
fn test_malformed_counter_skipped_on_request() {
    let dir = TempDir::new().unwrap();
    let input = write_report(
        &dir,
        &[
            "demo,com.example,Good,10,90,5,15,0,0,0,0,0,0",
            "demo,com.example,Bad,10,ninety,5,15,0,0,0,0,0,0",
        ],
    );
    let output = dir.path().join("output_table.html");

    let config = ConvertConfig::new().with_malformed_rows(MalformedRowPolicy::Skip);
    let summary = Converter::with_config(config).convert(&input, &output).unwrap();

    assert_eq!(summary.rows_converted, 1);
    assert_eq!(summary.rows_skipped, 1);
    assert_eq!(summary.total_branch_coverage, Percentage::Covered(75.0));

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("<tr").count(), 2);
    assert!(html.contains("Good"));
    assert!(!html.contains("Bad"));
}

#[test]
fn test_identifiers_are_escaped() {
    let dir = TempDir::new().unwrap();
    let html = convert_default(
        &dir,
        &["demo,com.example,\"Outer<T> & Friends\",10,90,5,15,0,0,0,0,0,0"],
    );

    assert!(html.contains("Outer&lt;T&gt; &amp; Friends"));
    assert!(!html.contains("Outer<T>"));
}

#[test]
fn test_output_is_compacted() {
    let dir = TempDir::new().unwrap();
    let html = convert_default(&dir, &["demo,com.example,Foo,10,90,5,15,0,0,0,0,0,0"]);

    assert!(!html.contains('\n'));
    assert!(!html.contains("> <"));
    // Text spacing inside cells survives compaction
    assert!(html.contains("90 : 10"));
    assert!(html.contains("15 : 5"));
}

#[test]
fn test_configured_title_and_threshold() {
    let dir = TempDir::new().unwrap();
    let input = write_report(&dir, &["demo,com.example,Foo,10,90,5,15,0,0,0,0,0,0"]);
    let output = dir.path().join("output_table.html");

    let config = ConvertConfig::new()
        .with_title("Payments Coverage")
        .with_red_threshold(80.0);
    Converter::with_config(config).convert(&input, &output).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>Payments Coverage</title>"));
    // 90.00% stays green, 75.00% drops below the raised threshold
    assert!(html.contains("color: darkgreen"));
    assert!(html.contains("color: red"));
}

#[test]
fn test_summary_reports_row_count() {
    let dir = TempDir::new().unwrap();
    let input = write_report(
        &dir,
        &[
            "g,p,A,1,1,1,1,0,0,0,0,0,0",
            "g,p,B,1,1,1,1,0,0,0,0,0,0",
            "g,p,C,1,1,1,1,0,0,0,0,0,0",
        ],
    );
    let output = dir.path().join("output_table.html");

    let summary = Converter::new().convert(&input, &output).unwrap();

    assert_eq!(summary.rows_converted, 3);
    assert_eq!(summary.rows_skipped, 0);
    assert_eq!(summary.total_branch_coverage, Percentage::Covered(50.0));
}
