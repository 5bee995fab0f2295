mod common;

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn predict_command(model: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_predict"));
    cmd.arg("--model")
        .arg(model)
        .env_remove("MODEL_PATH")
        .env_remove("FORM_DEFAULTS_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(mut cmd: Command, body: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("predict binary should start");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(body.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn sample_body() -> String {
    serde_json::to_string(&common::sample_form()).unwrap()
}

fn parse_stdout(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {:?}", e, stdout))
}

#[test]
fn test_json_output_from_stdin_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let model = common::write_forest_artifact(dir.path());

    let mut cmd = predict_command(&model);
    cmd.arg("--json");
    let output = run_with_stdin(cmd, &sample_body());

    assert!(output.status.success());
    let value = parse_stdout(&output);
    assert_eq!(value["status"], "success");
    assert!(value["prediction"].as_f64().is_some_and(f64::is_finite));
    assert_eq!(value["features"].as_array().map(Vec::len), Some(24));

    // Logs still happen, just not on stdout
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INFO"));
}

#[test]
fn test_json_output_from_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let model = common::write_forest_artifact(dir.path());
    let input = dir.path().join("order.json");
    std::fs::write(&input, sample_body()).unwrap();

    let output = predict_command(&model)
        .arg("--json")
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(parse_stdout(&output)["status"], "success");
}

#[test]
fn test_text_output_leads_with_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let model = common::write_forest_artifact(dir.path());

    let output = run_with_stdin(predict_command(&model), &sample_body());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Predicted Sales: $"), "{:?}", stdout);
    assert!(stdout.contains("Timing Details:"));
}

#[test]
fn test_out_of_range_quantity_exits_with_failure_report() {
    let dir = tempfile::tempdir().unwrap();
    let model = common::write_forest_artifact(dir.path());
    let mut form = common::sample_form();
    form.quantity = 0;

    let mut cmd = predict_command(&model);
    cmd.arg("--json");
    let output = run_with_stdin(cmd, &serde_json::to_string(&form).unwrap());

    assert!(!output.status.success());
    let value = parse_stdout(&output);
    assert_eq!(value["status"], "failure");
    assert!(value["message"].as_str().unwrap().contains("Quantity"));
}

#[test]
fn test_unparseable_body_gets_same_failure_shape() {
    let dir = tempfile::tempdir().unwrap();
    let model = common::write_forest_artifact(dir.path());
    let body = sample_body().replace(r#""quantity":6"#, r#""quantity":-1"#);
    assert!(body.contains(r#""quantity":-1"#));

    let mut cmd = predict_command(&model);
    cmd.arg("--json");
    let output = run_with_stdin(cmd, &body);

    assert!(!output.status.success());
    let value = parse_stdout(&output);
    assert_eq!(value["status"], "failure");
    assert_eq!(value["columns"].as_array().map(Vec::len), Some(0));
    assert_eq!(
        value["hint"],
        "Please check if all input values are within expected ranges."
    );
}

#[test]
fn test_missing_model_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let model = dir.path().join("final_sales_forecasting_model.json");

    let mut cmd = predict_command(&model);
    cmd.arg("--json");
    let output = run_with_stdin(cmd, &sample_body());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_rust_log_error_silences_info_lines() {
    let dir = tempfile::tempdir().unwrap();
    let model = common::write_forest_artifact(dir.path());

    let mut cmd = predict_command(&model);
    cmd.arg("--json").env("RUST_LOG", "error");
    let output = run_with_stdin(cmd, &sample_body());

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("INFO"), "{:?}", stderr);
    assert_eq!(parse_stdout(&output)["status"], "success");
}
