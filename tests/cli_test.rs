use assert_cmd::Command;
use predicates::prelude::*;

fn outlay() -> Command {
    let mut cmd = Command::cargo_bin("outlay").unwrap();
    cmd.env_remove("OUTLAY_LOG");
    cmd.env_remove("OUTLAY_CURRENCY");
    cmd
}

#[test]
fn test_summarize_table() {
    outlay()
        .args(["summarize", "-e", "rent=900", "-e", "food=300", "-e", "fun=50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,250.00"))
        .stdout(predicate::str::contains("$41.67"))
        .stdout(predicate::str::contains("1. rent"));
}

#[test]
fn test_summarize_reports_skipped_pairs_on_stderr() {
    outlay()
        .args(["summarize", "-e", "food=abc", "-e", "rent=900", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total,,900"))
        .stderr(predicate::str::contains("Skipping 'food=abc'"));
}

#[test]
fn test_currency_from_env() {
    outlay()
        .env("OUTLAY_CURRENCY", "€")
        .args(["summarize", "-e", "rent=900"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€900.00"));
}

#[test]
fn test_session_reads_stdin() {
    outlay()
        .write_stdin("add rent 900\nadd food 300\ncalculate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added #1: rent $900.00"))
        .stdout(predicate::str::contains("$1,200.00"))
        .stdout(predicate::str::contains("$40.00"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    outlay()
        .args(["--verbose", "session"])
        .write_stdin("add rent 900\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("expense added").not())
        .stderr(predicate::str::contains("expense added"));
}

#[test]
fn test_log_filter_from_environment() {
    outlay()
        .env("OUTLAY_LOG", "outlay=debug")
        .arg("session")
        .write_stdin("add rent 900\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("expense added"));
}

#[test]
fn test_log_level_flag_takes_bare_level() {
    outlay()
        .args(["--log-level", "debug", "session"])
        .write_stdin("add rent 900\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("expense added"));
}
