//! End-to-end tests for the modpulse binary

use assert_cmd::Command;
use predicates::prelude::*;

fn modpulse() -> Command {
    Command::cargo_bin("modpulse").unwrap()
}

#[test]
fn rejects_missing_arguments() {
    modpulse()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn rejects_extra_arguments() {
    modpulse()
        .args(["100", "2", "-1", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn rejects_invalid_array_size() {
    modpulse()
        .args(["0", "2", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("array size"));

    modpulse()
        .args(["100M+1", "2", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("array size"));
}

#[test]
fn rejects_invalid_thread_count() {
    modpulse()
        .args(["100", "0", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("thread count"));

    modpulse()
        .args(["100", "17", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("thread count"));
}

#[test]
fn rejects_out_of_range_zero_index() {
    modpulse()
        .args(["100", "2", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zero index"));

    modpulse()
        .args(["100", "2", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zero index"));
}

#[test]
fn rejects_malformed_numeric_text() {
    modpulse()
        .args(["12X", "2", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid"));

    modpulse()
        .args(["100", "2", "1+x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid"));
}

#[test]
fn reports_all_four_strategies_in_order() {
    let assert = modpulse().args(["10000", "4", "-1"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "unexpected report:\n{}", stdout);
    assert!(lines[0].starts_with("Sequential multiplication completed in"));
    assert!(lines[1].starts_with("Threaded multiplication with parent waiting for all children"));
    assert!(lines[2]
        .starts_with("Threaded multiplication with parent continually checking on children"));
    assert!(lines[3].starts_with("Threaded multiplication with parent waiting on a semaphore"));
}

#[test]
fn all_strategies_report_the_same_product() {
    let assert = modpulse().args(["5000", "8", "-1"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let products: Vec<&str> = stdout
        .lines()
        .map(|line| line.rsplit("Product = ").next().unwrap())
        .collect();

    assert_eq!(products.len(), 4);
    assert!(products.iter().all(|p| *p == products[0]), "{}", stdout);
}

#[test]
fn forced_zero_collapses_every_product() {
    modpulse()
        .args(["5000", "3", "4999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product = 0").count(4));
}

#[test]
fn accepts_scaled_arguments() {
    modpulse()
        .args(["1M+10", "16", "1M+9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product = 0").count(4));
}
