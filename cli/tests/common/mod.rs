#![allow(dead_code)]
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Command for the freshly built `mira` binary, run from the package root.
pub fn mira_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mira"));
    cmd.current_dir(manifest_dir());
    cmd
}

pub fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => {
            for (k, v) in exp_map {
                if let Some(act_v) = act_map.get(k) {
                    if !json_subset(v, act_v) {
                        return false;
                    }
                } else {
                    return false; // Key missing in actual
                }
            }
            true
        }
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            if exp_arr.len() != act_arr.len() {
                return false;
            }
            for (e, a) in exp_arr.iter().zip(act_arr.iter()) {
                if !json_subset(e, a) {
                    return false;
                }
            }
            true
        }
        (Value::String(s), _) if s == "{{*}}" => true,
        (Value::String(s), Value::String(a)) if s.starts_with("{{regex:") && s.ends_with("}}") => {
            let pattern = &s[8..s.len() - 2];
            if let Ok(re) = regex::Regex::new(pattern) {
                re.is_match(a)
            } else {
                false
            }
        }
        _ => expected == actual,
    }
}

pub fn validate_pure_json_response(stdout: &str, expected_path: &Path) -> Result<(), String> {
    let expected_content = fs::read_to_string(expected_path)
        .map_err(|e| format!("Failed to read expected file: {e}"))?;
    let expected_json: Value = serde_json::from_str(&expected_content)
        .map_err(|e| format!("Failed to parse expected JSON: {e}"))?;
    let actual_json: Value = serde_json::from_str(stdout)
        .map_err(|e| format!("Failed to parse actual JSON output: {e}"))?;

    if !json_subset(&expected_json, &actual_json) {
        return Err(format!(
            "JSON mismatch!\nExpected subset:\n{}\nActual:\n{}",
            serde_json::to_string_pretty(&expected_json).unwrap(),
            serde_json::to_string_pretty(&actual_json).unwrap()
        ));
    }

    Ok(())
}

/// Creates an empty scratch directory unique to this process and `name`.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mira_cli_{name}_{}", std::process::id()));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();
    dir
}
