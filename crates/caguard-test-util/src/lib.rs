//! Shared test utilities for the caguard workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `caguard-types` would not suffice.

#![forbid(unsafe_code)]

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Two concerns are handled separately:
///
/// 1. **Root-only** — `tool.version` is replaced with `"__VERSION__"` only
///    when the *root* object looks like a report envelope (has all of:
///    `schema`, `tool`, `data`, `policies`). This prevents false
///    normalization of nested objects that happen to share the same shape
///    (e.g. a finding `data` payload containing envelope-like keys).
///
/// 2. **Recursive** — timestamp keys (`started_at`, `finished_at`) are
///    normalized at any depth because their placeholder values are fixed
///    and cannot collide with real data.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("data")
            && obj.contains_key("policies");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_only_touches_envelope_tool_version() {
        let input = json!({
            "schema": "caguard.report.v1",
            "tool": { "name": "caguard", "version": "0.1.0" },
            "started_at": "2025-06-01T12:00:00Z",
            "finished_at": "2025-06-01T12:00:01Z",
            "data": { "profile": "standard" },
            "policies": [
                {
                    "findings": [{
                        "data": { "tool": { "name": "other", "version": "9.9.9" } }
                    }]
                }
            ]
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(result["tool"]["name"], "caguard");
        assert_eq!(result["started_at"], "__TIMESTAMP__");
        assert_eq!(result["finished_at"], "__TIMESTAMP__");

        // Nested tool objects stay untouched (not at the root).
        assert_eq!(
            result["policies"][0]["findings"][0]["data"]["tool"]["version"],
            "9.9.9"
        );
    }

    #[test]
    fn root_without_envelope_keys_not_normalized() {
        let input = json!({
            "tool": { "name": "other", "version": "2.0.0" },
            "started_at": "2025-01-01T00:00:00Z"
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "2.0.0");
        // Timestamps are still normalized (recursive).
        assert_eq!(result["started_at"], "__TIMESTAMP__");
    }

    #[test]
    fn nested_timestamps_are_normalized() {
        let input = json!({
            "policies": [{ "created_at": "x", "findings": [{ "started_at": "2025-01-01T00:00:00Z" }] }]
        });
        let result = normalize_nondeterministic(input);
        assert_eq!(result["policies"][0]["findings"][0]["started_at"], "__TIMESTAMP__");
    }
}
