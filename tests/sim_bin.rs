use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "3"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 3);
    assert_eq!(v["shots"].as_array().map(|a| a.len()), Some(3));
    let min = v["min_shots"].as_u64().unwrap();
    let max = v["max_shots"].as_u64().unwrap();
    assert!(17 <= min && min <= max && max <= 100);
}

#[test]
fn sim_binary_usage_on_missing_args() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("Usage:"));
    assert!(stderr.contains("<seed> <games>"));
}
