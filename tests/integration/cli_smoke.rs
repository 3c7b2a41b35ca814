// tests/integration/cli_smoke.rs
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::string_calc;

#[test]
fn shows_help() {
    string_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("string_calc"));
}

#[test]
fn sums_inline_expression() {
    string_calc().arg("5,10,25").assert().success().stdout("40\n");
}

#[test]
fn empty_expression_is_zero() {
    string_calc().arg("").assert().success().stdout("0\n");
}

#[test]
fn escapes_enable_custom_header() {
    string_calc()
        .args(["-e", r"//[d][plus]\n1plus2plus5d10d12"])
        .assert()
        .success()
        .stdout("30\n");
}

#[test]
fn negatives_fail_with_message() {
    string_calc()
        .args(["--", "-1,-2,-23"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error: Negatives not allowed: [-1, -2, -23]"));
}

#[test]
fn malformed_number_fails() {
    string_calc()
        .arg("1,,2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number ''"));
}

#[test]
fn unterminated_header_fails() {
    string_calc()
        .arg("//;1;2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed delimiter header"));
}

#[test]
fn threshold_flag_changes_filter() {
    string_calc().args(["--threshold", "10", "5,11,3"]).assert().success().stdout("8\n");
}

#[test]
fn conflicting_sources_are_usage_errors() {
    string_calc().args(["1,2", "--file", "x.txt"]).assert().failure().code(2);
}
