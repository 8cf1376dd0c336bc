use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lwfa-estimate"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("lwfa-estimate should run")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("file should be written");
}

#[test]
fn laser_command_reports_focal_quantities() {
    let output = run_cli(&[
        "laser", "--waist", "18 um", "--energy", "7.7 J", "--duration", "40 fs", "--json",
    ]);
    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let summary = stdout_json(&output);
    let a0 = summary["laser"]["a0"].as_f64().expect("a0 present");
    assert!((a0 - 4.077).abs() / 4.077 < 5.0e-3, "a0 = {a0}");
    assert!(summary["laser"]["wavenumber_per_um"].is_f64());
    assert!(summary["laser"]["angular_frequency_per_fs"].is_f64());
    assert!(summary.get("plasma").is_none());
}

#[test]
fn beam_command_prints_text_summary() {
    let output = run_cli(&["beam", "--f-number", "10"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("GaussianBeam: lambda = 0.8000 um, w0 = 7.2025 um"),
        "unexpected stdout: {stdout}"
    );
}

#[test]
fn simulation_command_reports_state_point() {
    let output = run_cli(&[
        "simulation",
        "--waist",
        "18 um",
        "--energy",
        "7.7 J",
        "--duration",
        "40 fs",
        "--density",
        "1.5e18 cm^-3",
        "--json",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let summary = stdout_json(&output);
    let simulation = &summary["simulation"];
    assert_eq!(simulation["cell_counts"], serde_json::json!([251, 251, 2726]));
    assert_eq!(simulation["particles_per_cell"], 8);
    assert_eq!(simulation["step_count"], 341_865);
}

#[test]
fn matched_command_reports_validity_bound() {
    let output = run_cli(&["matched", "--a0", "4.1", "--json"]);
    assert!(output.status.success());

    let summary = stdout_json(&output);
    let critical_a0 = summary["matched"]["critical_a0"].as_f64().expect("a0c");
    assert!((critical_a0 - 68.075_311_530_686_35).abs() < 1.0e-6);
    assert_eq!(summary["matched"]["within_validity"], true);
    assert!(summary.get("simulation").is_none());
}

#[test]
fn scenario_file_is_evaluated() {
    let temp = TempDir::new().expect("tempdir should be created");
    let path = temp.path().join("cetal.json");
    write_file(
        &path,
        r#"
        {
          "name": "CETAL",
          "beam": { "waist": "18 um" },
          "laser": { "energy": "7.7 J", "duration": "40 fs" },
          "plasma": { "density": "1.5e18 cm^-3", "estimate_bubble_radius": true }
        }
        "#,
    );

    let output = run_cli(&["scenario", path.to_str().expect("utf-8 path"), "--json"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let summary = stdout_json(&output);
    assert_eq!(summary["name"], "CETAL");
    let efficiency = summary["plasma"]["drive"]["bunch"]["efficiency"]
        .as_f64()
        .expect("efficiency");
    assert!(efficiency > 0.0 && efficiency < 1.0);
}

#[test]
fn ambiguous_laser_exits_with_configuration_code() {
    let output = run_cli(&["laser", "--waist", "18 um", "--a0", "4", "--energy", "7.7 J", "--duration", "40 fs"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [CONFIG.AMBIGUOUS_PARAMETERIZATION]"), "stderr: {stderr}");
    assert!(stderr.contains("FATAL EXIT CODE: 3"));
}

#[test]
fn malformed_quantity_exits_with_input_code() {
    let output = run_cli(&["plasma", "--density", "lots"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [INPUT.INVALID_QUANTITY]"), "stderr: {stderr}");
}

#[test]
fn missing_scenario_file_exits_with_io_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let path = temp.path().join("absent.json");
    let output = run_cli(&["scenario", path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [IO.CLI] failed to read scenario file"), "stderr: {stderr}");
    assert!(stderr.contains("FATAL EXIT CODE: 4"));
}

#[test]
fn conflicting_drivers_are_rejected_by_the_parser() {
    let output = run_cli(&["laser", "--a0", "4", "--power", "100 TW"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [INPUT.CLI_USAGE]"), "stderr: {stderr}");
}
