//! Stable JSON output
//!
//! Output files must be byte-identical across reruns on the same input, so
//! every value is converted to a `serde_json::Value`, has its object keys
//! sorted, and is then pretty-printed.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Render `value` as pretty JSON with keys sorted at every level
pub fn render_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let sorted = sort_keys(serde_json::to_value(value)?);
    serde_json::to_string_pretty(&sorted)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Write `contents` to `path`, creating parent directories as needed
pub fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}
