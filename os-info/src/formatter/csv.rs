//! `Key,Value` rendering with dotted/indexed flattening

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::types::InfoRecord;

/// Header row of the CSV output
pub const CSV_HEADER: &str = "Key,Value";

pub(super) fn render(record: &InfoRecord) -> String {
    let mut output = String::new();
    output.push_str(CSV_HEADER);
    output.push('\n');

    for (key, value) in flatten(record) {
        output.push_str(&escape(&key));
        output.push(',');
        output.push_str(&escape(&value));
        output.push('\n');
    }

    output
}

/// Flatten the record into `(path, value)` pairs
///
/// Mapping fields extend the path with `.field`, sequence elements with
/// `[i]`. Empty mappings and sequences produce no pairs.
pub fn flatten(record: &InfoRecord) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    flatten_map("", record.as_map(), &mut rows);
    rows
}

fn flatten_map(prefix: &str, map: &Map<String, Value>, rows: &mut Vec<(String, String)>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        flatten_value(path, value, rows);
    }
}

fn flatten_value(path: String, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => flatten_map(&path, map, rows),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_value(format!("{path}[{i}]"), item, rows);
            }
        }
        Value::String(s) => rows.push((path, s.clone())),
        other => rows.push((path, other.to_string())),
    }
}

fn escape(cell: &str) -> Cow<'_, str> {
    if cell.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}
