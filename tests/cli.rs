use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SCENARIO_A: &str = "\
EST,alpha,beta,extra
TIME,100
EST,gamma,delta
";

const REALISTIC_REPORT: &str = "\
Reading: contests.json
TIME,2.113,Nodes Expanded,41,MAX ASN(%),4.7, with 0.002 error,5.1
TIME,0.871,Nodes Expanded,12,MAX ASN(%),2.2, with 0.002 error,2.6
============================================
SUMMARY
Audit found for contests: 1 2
EST,129,311
============================================
";

fn report_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn print_res() -> Command {
    Command::cargo_bin("print-res").unwrap()
}

fn print_time() -> Command {
    Command::cargo_bin("print-time").unwrap()
}

#[test]
fn print_res_extracts_estimate_fields() {
    let file = report_file(SCENARIO_A);
    print_res()
        .arg(file.path())
        .assert()
        .success()
        .stdout("alpha,beta\ngamma,delta\n");
}

#[test]
fn print_time_extracts_time_field() {
    let file = report_file(SCENARIO_A);
    print_time()
        .arg(file.path())
        .assert()
        .success()
        .stdout("100\n");
}

#[test]
fn realistic_report_round() {
    let file = report_file(REALISTIC_REPORT);
    print_time()
        .arg(file.path())
        .assert()
        .success()
        .stdout("2.113\n0.871\n");
    print_res()
        .arg(file.path())
        .assert()
        .success()
        .stdout("129,311\n");
}

#[test]
fn output_preserves_file_order() {
    let file = report_file("TIME,3\nTIME,1\nnoise\nTIME,2\n");
    print_time()
        .arg(file.path())
        .assert()
        .success()
        .stdout("3\n1\n2\n");
}

#[test]
fn non_matching_lines_are_ignored() {
    // The markers appear mid-line and in other words; none of these match.
    let file = report_file("found EST,1,2\nthe TIME,5 was\nRUNTIME,9\n");
    print_res().arg(file.path()).assert().success().stdout("");
    print_time().arg(file.path()).assert().success().stdout("");
}

#[test]
fn est_marker_is_a_bare_prefix() {
    let file = report_file("ESTIMATE,10,20\n");
    print_res()
        .arg(file.path())
        .assert()
        .success()
        .stdout("10,20\n");
}

#[test]
fn time_marker_includes_the_comma() {
    let file = report_file("TIMEOUT,30\nTIME,30\n");
    print_time()
        .arg(file.path())
        .assert()
        .success()
        .stdout("30\n");
}

#[test]
fn runs_are_idempotent() {
    let file = report_file(SCENARIO_A);
    let first = print_res().arg(file.path()).assert().success();
    let first_out = first.get_output().stdout.clone();

    print_res()
        .arg(file.path())
        .assert()
        .success()
        .stdout(first_out);
}

#[test]
fn short_est_record_is_fatal_with_partial_output() {
    let file = report_file("EST,ok,fine\nEST,onlyone\nEST,never,seen\n");
    print_res()
        .arg(file.path())
        .assert()
        .code(2)
        .stdout("ok,fine\n")
        .stderr(predicate::str::contains("Line 2"));
}

#[test]
fn bare_est_marker_line_is_fatal() {
    // "EST" alone matches the marker but splits into a single field.
    let file = report_file("EST\n");
    print_res()
        .arg(file.path())
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("fields"));
}

#[test]
fn missing_file_exits_with_open_error() {
    print_res()
        .arg("/nonexistent/report.txt")
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("Cannot open report file"));
}

#[test]
fn missing_argument_shows_usage() {
    print_time()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn quiet_suppresses_suggestions() {
    print_res()
        .arg("--quiet")
        .arg("/nonexistent/report.txt")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Suggestion").not());
}

#[test]
fn verbose_prints_scan_summary_to_stderr() {
    let file = report_file(SCENARIO_A);
    print_time()
        .arg("-v")
        .arg(file.path())
        .assert()
        .success()
        .stdout("100\n")
        .stderr(predicate::str::contains("Scanned 3 lines, matched 1 records"));
}
