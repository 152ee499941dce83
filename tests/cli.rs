use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn log_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp log");
    file.write_all(content.as_bytes()).expect("write temp log");
    file.flush().expect("flush temp log");
    file
}

fn sample_log() -> NamedTempFile {
    log_file(
        "2025-02-15T10:00:00Z INFO  Server started\n\
         2025-02-15T10:00:10Z ERROR Failed to connect to cache\n\
         2025-02-15T10:00:11Z INFO  Retrying cache connection\n\
         2025-02-15T10:00:15Z ERROR Timeout waiting for auth service\n\
         2025-02-15T10:00:20Z DEBUG Request completed in 2ms\n",
    )
}

fn expected_line(status: &str, count: usize, needle: &str, lines: usize, file: &NamedTempFile) -> String {
    format!(
        "{}: Found {} \"{}\" in the last {} lines of {}\n",
        status,
        count,
        needle,
        lines,
        file.path().display()
    )
}

#[test]
fn warning_when_count_reaches_warning_threshold() {
    let log = sample_log();
    cargo_bin_cmd!("check_string")
        .args(["-w", "1", "-c", "3", "-s", "ERROR", "-l", "30", "-f"])
        .arg(log.path())
        .assert()
        .code(1)
        .stdout(expected_line("WARNING", 2, "ERROR", 30, &log));
}

#[test]
fn ok_when_below_warning_threshold() {
    let log = sample_log();
    cargo_bin_cmd!("check_string")
        .args(["-w", "5", "-c", "10", "-s", "ERROR", "-f"])
        .arg(log.path())
        .assert()
        .code(0)
        .stdout(expected_line("OK", 2, "ERROR", 30, &log));
}

#[test]
fn critical_when_count_reaches_critical_threshold() {
    let log = sample_log();
    cargo_bin_cmd!("check_string")
        .args(["--warning", "1", "--critical", "2", "--string", "ERROR", "--file"])
        .arg(log.path())
        .assert()
        .code(2)
        .stdout(expected_line("CRITICAL", 2, "ERROR", 30, &log));
}

#[test]
fn only_the_requested_tail_is_scanned() {
    let log = sample_log();
    cargo_bin_cmd!("check_string")
        .args(["-w", "1", "-c", "2", "-s", "ERROR", "-l", "2", "-f"])
        .arg(log.path())
        .assert()
        .code(1)
        .stdout(expected_line("WARNING", 1, "ERROR", 2, &log));
}

#[test]
fn unknown_when_file_cannot_be_opened() {
    cargo_bin_cmd!("check_string")
        .args(["-w", "1", "-c", "1", "-f", "/nonexistent"])
        .assert()
        .code(3)
        .stdout("UNKNOWN: Unable to open log file: /nonexistent\n");
}

#[test]
fn unknown_when_critical_is_missing() {
    let log = sample_log();
    cargo_bin_cmd!("check_string")
        .args(["-w", "1", "-s", "ERROR", "-f"])
        .arg(log.path())
        .assert()
        .code(3)
        .stdout("UNKNOWN: --warning --critical and --file options must be specified.\n")
        .stderr(predicate::str::contains("Use --help option"));
}

#[test]
fn unknown_when_any_mandatory_option_is_missing() {
    let log = sample_log();
    let path = log.path().to_str().expect("utf-8 temp path").to_string();
    let cases: [Vec<&str>; 3] = [
        vec!["-c", "2", "-f", &path],
        vec!["-w", "1", "-f", &path],
        vec!["-w", "1", "-c", "2"],
    ];
    for case in cases {
        cargo_bin_cmd!("check_string")
            .args(&case)
            .assert()
            .code(3)
            .stdout(predicate::str::starts_with("UNKNOWN: --warning --critical"));
    }
}

#[test]
fn unknown_when_critical_below_warning() {
    let log = sample_log();
    cargo_bin_cmd!("check_string")
        .args(["-w", "3", "-c", "1", "-s", "ERROR", "-f"])
        .arg(log.path())
        .assert()
        .code(3)
        .stdout(
            "UNKNOWN: CRITICAL threshold must be greater than or equal to WARNING threshold.\n",
        );
}

#[test]
fn unknown_on_malformed_number() {
    cargo_bin_cmd!("check_string")
        .args(["-w", "many", "-c", "1", "-f", "/tmp/x"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN: "))
        .stdout(predicate::str::contains("many"));
}

#[test]
fn needle_starting_with_hyphen_is_counted() {
    let log = log_file("x --> y\nplain\n");
    cargo_bin_cmd!("check_string")
        .args(["-w", "1", "-c", "2", "-s", "-->", "-f"])
        .arg(log.path())
        .assert()
        .code(1)
        .stdout(expected_line("WARNING", 1, "-->", 30, &log));

    let log = log_file("a -- b\na --b\n");
    cargo_bin_cmd!("check_string")
        .args(["-w", "1", "-c", "2", "--string", "-- b", "-f"])
        .arg(log.path())
        .assert()
        .code(1)
        .stdout(expected_line("WARNING", 1, "-- b", 30, &log));
}

#[test]
fn empty_file_has_no_matches() {
    let log = log_file("");
    cargo_bin_cmd!("check_string")
        .args(["-w", "1", "-c", "2", "-s", "ERROR", "-f"])
        .arg(log.path())
        .assert()
        .code(0)
        .stdout(expected_line("OK", 0, "ERROR", 30, &log));
}

#[test]
fn empty_needle_matches_every_present_line() {
    let log = log_file("a\nb\nc");
    cargo_bin_cmd!("check_string")
        .args(["-w", "4", "-c", "10", "-f"])
        .arg(log.path())
        .assert()
        .code(0)
        .stdout(expected_line("OK", 3, "", 30, &log));
}

#[test]
fn zero_thresholds_are_supplied_values() {
    let log = log_file("nothing here\n");
    cargo_bin_cmd!("check_string")
        .args(["-w", "0", "-c", "0", "-s", "ERROR", "-f"])
        .arg(log.path())
        .assert()
        .code(2)
        .stdout(expected_line("CRITICAL", 0, "ERROR", 30, &log));
}

#[test]
fn repeated_runs_are_identical() {
    let log = sample_log();
    let run = || {
        cargo_bin_cmd!("check_string")
            .args(["-w", "1", "-c", "3", "-s", "ERROR", "-f"])
            .arg(log.path())
            .output()
            .expect("run check_string")
    };
    let first = run();
    let second = run();
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let log = sample_log();
    cargo_bin_cmd!("check_string")
        .args(["-vv", "-w", "1", "-c", "3", "-s", "ERROR", "-f"])
        .arg(log.path())
        .assert()
        .code(1)
        .stdout(expected_line("WARNING", 2, "ERROR", 30, &log))
        .stderr(predicate::str::contains("tail loaded"));
}

#[test]
fn help_exits_zero() {
    cargo_bin_cmd!("check_string")
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--critical"));
}
