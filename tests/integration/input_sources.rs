// tests/integration/input_sources.rs
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{TempDir, string_calc};

#[test]
fn reads_stdin_and_drops_final_newline() {
    string_calc().write_stdin("//;\n1;2;5\n").assert().success().stdout("8\n");
}

#[test]
fn reads_stdin_with_crlf_terminator() {
    string_calc().write_stdin("1\n2\r\n").assert().success().stdout("3\n");
}

#[test]
fn keeps_inner_blank_line_from_stdin() {
    string_calc()
        .write_stdin("1\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number ''"));
}

#[test]
fn reads_file() {
    let dir = TempDir::new("string_calc_file");
    let path = dir.write_file("input.txt", "//[plus]\n1plus2plus5\n");

    string_calc().arg("--file").arg(&path).assert().success().stdout("8\n");
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new("string_calc_missing");
    let path = dir.path().join("nope.txt");

    string_calc()
        .arg("--file")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn invalid_utf8_is_reported() {
    let dir = TempDir::new("string_calc_utf8");
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, [0x31, 0xff, 0x32]).unwrap();

    string_calc()
        .arg("--file")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}
