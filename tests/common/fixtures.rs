//! Test fixtures and constants.

use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// Named colors in load order
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("#FF0000", "Red"),
    ("#00FF00", "Green"),
    ("#0000FF", "Blue"),
    ("#FFFFFF", "White"),
    ("#000000", "Black"),
];

/// Segments running from dark to light
pub const GRAY_SEGMENTS: &[&str] = &["#000000", "#808080", "#FFFFFF"];

/// Colors document in the mapping form
pub fn colors_json() -> Value {
    let mut map = serde_json::Map::new();
    for (hex, name) in NAMED_COLORS {
        map.insert(hex.to_string(), json!(name));
    }
    Value::Object(map)
}

/// Colors document wrapped in a `colors` envelope, with a few bad entries
pub fn enveloped_colors_json() -> Value {
    json!({
        "colors": {
            "#FF0000": "Red",
            "#12": "Too short",
            "#0000FF": "Blue",
            "#00FF00": 42
        }
    })
}

/// Segments document
pub fn segments_json() -> Value {
    json!(GRAY_SEGMENTS)
}

/// Write a JSON document to a temporary file
pub fn json_file(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "{value}").expect("Failed to write temp file");
    file
}

/// Path of a temporary file as a location string
pub fn location(file: &NamedTempFile) -> String {
    file.path().to_str().unwrap().to_string()
}
