use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fourfn")).args(args)
                                              .env_remove("RUST_LOG")
                                              .output()
                                              .unwrap_or_else(|e| panic!("Failed to run fourfn {args:?}: {e}"))
}

fn assert_prints(args: &[&str], expected: &str) {
    let output = run(args);
    assert!(output.status.success(),
            "fourfn {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{expected}\n"));
    assert!(output.stderr.is_empty(),
            "fourfn {args:?} wrote to stderr: {}",
            String::from_utf8_lossy(&output.stderr));
}

fn assert_fails_with(args: &[&str], expected_stderr: &str) {
    let output = run(args);
    assert_eq!(output.status.code(), Some(1), "fourfn {args:?} should exit with 1");
    assert!(output.stdout.is_empty());
    assert_eq!(String::from_utf8_lossy(&output.stderr), format!("{expected_stderr}\n"));
}

#[test]
fn prints_result_on_stdout() {
    assert_prints(&["6", "/", "3"], "2");
    assert_prints(&["2", "multiply", "3"], "6");
    assert_prints(&["0.5", "add", "0.25"], "0.75");
}

#[test]
fn accepts_negative_operands() {
    assert_prints(&["-5", "+", "3"], "-2");
    assert_prints(&["1", "-", "-2"], "3");
    assert_prints(&["-1.5", "*", "-2"], "3");
}

#[test]
fn accepts_flag_like_operands_after_double_dash() {
    assert_prints(&["--", "-inf", "+", "1"], "-inf");
    assert_prints(&["--", "1", "-", "-inf"], "inf");
}

#[test]
fn division_by_zero_prints_only_the_error() {
    assert_fails_with(&["5", "divide", "0"], "Cannot divide by zero.");
    assert_fails_with(&["5", "/", "-0"], "Cannot divide by zero.");
}

#[test]
fn unknown_operator_is_error() {
    assert_fails_with(&["1", "%", "2"],
                      "Unknown operator '%'. Expected one of + - * / or add, subtract, multiply, divide.");
}

#[test]
fn verbose_flag_raises_log_level() {
    let output = run(&["-v", "5", "/", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Division by zero requested: 5 / 0"), "stderr was: {stderr}");
    assert!(!stderr.contains("Evaluating"), "stderr was: {stderr}");

    let output = run(&["-vv", "6", "/", "3"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2\n");
    assert!(stderr.contains("Evaluating 6 / 3 (divide)"), "stderr was: {stderr}");
}
