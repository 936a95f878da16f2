use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value};

fn dispatch(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_vrp-dispatch"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn vrp-dispatch");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for vrp-dispatch")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is a JSON document")
}

#[test]
fn empty_matrix() {
    let output = dispatch(&[], r#"{"num_vehicles": 3, "distance_matrix": []}"#);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({"optimized_routes": []}));
}

#[test]
fn single_client_round_trip() {
    let input = json!({
        "clients": [{"id": "c1"}],
        "num_vehicles": 1,
        "distance_matrix": [[0, 1200.5], [1300, 0]],
        "duration_matrix": [[0, 300], [320, 0]]
    });
    let output = dispatch(&[], &input.to_string());
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"optimized_routes": [
            {"vehicle_id": "v1", "stops_indices": [0, 1, 0], "distance": 2500.5, "duration": 620.0}
        ]})
    );
}

#[test]
fn depot_only_emits_no_routes() {
    let input = json!({"num_vehicles": 2, "distance_matrix": [[0]], "duration_matrix": [[0]]});
    let output = dispatch(&[], &input.to_string());
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({"optimized_routes": []}));
}

#[test]
fn more_vehicles_than_clients_leaves_later_slots_empty() {
    let input = json!({
        "num_vehicles": 4,
        "distance_matrix": [[0, 2, 1], [2, 0, 1], [1, 1, 0]],
        "duration_matrix": [[0, 2, 1], [2, 0, 1], [1, 1, 0]]
    });
    let output = dispatch(&["--with-unassigned"], &input.to_string());
    let doc = stdout_json(&output);
    assert_eq!(
        doc,
        json!({
            "optimized_routes": [
                {"vehicle_id": "v1", "stops_indices": [0, 2, 0], "distance": 2.0, "duration": 2.0},
                {"vehicle_id": "v2", "stops_indices": [0, 1, 0], "distance": 4.0, "duration": 4.0}
            ],
            "unassigned": []
        })
    );
}

#[test]
fn undersized_matrix_logs_and_answers() {
    let input = json!({
        "num_vehicles": 1,
        "distance_matrix": [[0, 3, 4], [3, 0, 1], []],
        "duration_matrix": [[0, 3, 4], [3, 0, 1], []]
    });
    // Location 2 has an empty row, so the trip home cannot be priced.
    let output = dispatch(&["--with-unassigned"], &input.to_string());
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({
            "optimized_routes": [
                {"vehicle_id": "v1", "stops_indices": [0, 1, 2, 0], "distance": 4.0, "duration": 4.0}
            ],
            "unassigned": []
        })
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("matrix entry missing for 2 -> 0"));
}

#[test]
fn negative_vehicle_count_uses_one_vehicle() {
    let input = json!({
        "num_vehicles": -1,
        "distance_matrix": [[0, 1, 2], [1, 0, 1], [2, 1, 0]],
        "duration_matrix": [[0, 1, 2], [1, 0, 1], [2, 1, 0]]
    });
    let doc = stdout_json(&dispatch(&[], &input.to_string()));
    assert_eq!(doc["optimized_routes"].as_array().map(Vec::len), Some(1));
    assert_eq!(doc["optimized_routes"][0]["stops_indices"], json!([0, 1, 2, 0]));
}

#[test]
fn clients_served_flag() {
    let input = json!({
        "clients": [{"id": 7}, {"id": 8}],
        "num_vehicles": 2,
        "distance_matrix": [[0, 1, 2], [1, 0, 1], [2, 1, 0]],
        "duration_matrix": [[0, 1, 2], [1, 0, 1], [2, 1, 0]]
    });
    let doc = stdout_json(&dispatch(&["--with-clients"], &input.to_string()));
    assert_eq!(doc["optimized_routes"][0]["clients_served"], json!([7]));
    assert_eq!(doc["optimized_routes"][1]["clients_served"], json!([8]));
}

#[test]
fn unparsable_input_fails_without_output() {
    let output = dispatch(&[], "this is not json");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not parse input document"));
    assert!(stderr.contains("this is not json"));
}

#[test]
fn missing_input_file_fails() {
    let output = dispatch(&["--input", "/nonexistent/request.json"], "");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn output_file() {
    let path = std::env::temp_dir().join(format!("vrp-dispatch-{}.json", std::process::id()));
    let path_arg = path.to_string_lossy().into_owned();
    let output = dispatch(&["--output", &path_arg, "--pretty"], "{}");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(&path).expect("output file written");
    std::fs::remove_file(&path).ok();
    assert_eq!(written, "{\n  \"optimized_routes\": []\n}");
}

#[test]
fn non_array_clients_still_route() {
    let input = json!({
        "clients": null,
        "num_vehicles": 1,
        "distance_matrix": [[0, 2], [3, 0]],
        "duration_matrix": [[0, 20], [30, 0]]
    });
    let output = dispatch(&[], &input.to_string());
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"optimized_routes": [
            {"vehicle_id": "v1", "stops_indices": [0, 1, 0], "distance": 5.0, "duration": 50.0}
        ]})
    );
}
