//! Configuration file upkeep: detect and fill keys added by newer releases.

use super::{default_log_level, default_role, default_separator_char, default_shift_minutes};
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Keys every config file is expected to carry, with their default value.
fn expected_keys() -> Vec<(&'static str, Value)> {
    vec![
        ("database", Value::Null),
        (
            "default_shift_minutes",
            Value::Number(default_shift_minutes().into()),
        ),
        ("role", Value::String(default_role())),
        ("log_level", Value::String(default_log_level())),
        ("separator_char", Value::String(default_separator_char())),
    ]
}

/// List the expected keys missing from a YAML document.
pub fn missing_keys(content: &str) -> io::Result<Vec<String>> {
    let yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| io::Error::other(format!("invalid YAML: {e}")))?;

    let Some(map) = yaml.as_mapping() else {
        return Ok(expected_keys().into_iter().map(|(k, _)| k.to_string()).collect());
    };

    Ok(expected_keys()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(Value::String(k.to_string())))
        .map(|(k, _)| k.to_string())
        .collect())
}

/// Insert defaults for missing keys (never `database`) and rewrite the file.
/// Returns the keys that were added.
pub fn add_missing_keys(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let mut yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("invalid YAML in {}: {e}", path.display())))?;

    let mut added = Vec::new();

    if let Some(map) = yaml.as_mapping_mut() {
        for (key, default) in expected_keys() {
            let k = Value::String(key.to_string());
            if !map.contains_key(&k) && !default.is_null() {
                map.insert(k, default);
                added.push(key.to_string());
            }
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&yaml)
            .map_err(|e| io::Error::other(format!("serialize error: {e}")))?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}
