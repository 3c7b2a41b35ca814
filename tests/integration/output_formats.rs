// tests/integration/output_formats.rs
use serde_json::{Value, json};

#[path = "../common/mod.rs"]
mod common;
use common::string_calc;

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn json_sum() {
    let output = string_calc().args(["--format", "json", "20,27"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({ "sum": 47 }));
}

#[test]
fn json_explain() {
    let output = string_calc()
        .args(["--format", "json", "--explain", "5,10\n25,1001"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["sum"], 40);
    assert_eq!(value["delimiters"], json!([",", "\n"]));
    assert_eq!(value["tokens"], json!(["5", "10", "25", "1001"]));
    assert_eq!(value["ignored"], json!([1001]));
}

#[test]
fn json_error_goes_to_stdout() {
    let output = string_calc()
        .args(["--format", "json", "--", "-1,2,-3"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value = stdout_json(&output);
    assert_eq!(value["error"]["kind"], "negative_numbers");
    assert_eq!(value["error"]["tokens"], json!(["-1", "-3"]));
    assert_eq!(value["error"]["message"], "Negatives not allowed: [-1, -3]");
}

#[test]
fn plain_explain() {
    let output = string_calc().args(["--explain", "1,2"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("sum:        3\n"));
    assert!(stdout.contains("tokens:     2"));
}
