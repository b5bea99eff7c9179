//! Compact JSON text encoder.
//!
//! Walks a [`Value`] depth-first and writes it without whitespace:
//!
//! - **Empty containers**: an array with no elements is always `[]` and an
//!   empty object `{}`; neither ever renders as `null`
//! - **Number normalization**: integral values print without a fraction
//!   (`1.0` -> `1`), `-0` -> `0`, non-finite values -> `null`
//! - **Strings**: written between double quotes *as-is*. Quotes, backslashes
//!   and control characters inside the string are not escaped unless
//!   [`EncodeOptions::escape_strings`] is set, so the default output is only
//!   valid JSON for strings that need no escaping
//!
//! # Example
//! ```
//! use easy_json::{array, encoder::to_json_string, types::Value};
//!
//! assert_eq!(to_json_string(&Value::Array(vec![])), "[]");
//! assert_eq!(array![1, 2.5, "x"].to_string(), r#"[1,2.5,"x"]"#);
//! ```

use crate::types::{integral, Map, Value};

/// Encoder settings. The defaults reproduce the plain, non-escaping output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Escape `"`, `\` and control characters inside strings and keys.
    pub escape_strings: bool,
    /// Emit object keys in lexicographic order instead of map order.
    pub sort_keys: bool,
}

/// Encode a value into compact JSON text with default options.
pub fn to_json_string(value: &Value) -> String {
    to_json_string_with(value, &EncodeOptions::default())
}

/// Encode a value into compact JSON text.
pub fn to_json_string_with(value: &Value, options: &EncodeOptions) -> String {
    let mut out = String::new();
    encode_value(value, options, &mut out);
    out
}

fn encode_value(value: &Value, options: &EncodeOptions, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::String(s) => encode_string(s, options, out),
        Value::Array(items) => encode_array(items, options, out),
        Value::Object(map) => encode_object(map, options, out),
    }
}

fn encode_array(items: &[Value], options: &EncodeOptions, out: &mut String) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        encode_value(item, options, out);
    }
    out.push(']');
}

fn encode_object(map: &Map, options: &EncodeOptions, out: &mut String) {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    if options.sort_keys {
        entries.sort_by(|a, b| a.0.cmp(b.0));
    }
    out.push('{');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        encode_string(key, options, out);
        out.push(':');
        encode_value(value, options, out);
    }
    out.push('}');
}

/// Format a number:
/// - Whole numbers within `i64` range print as integers
/// - Negative zero prints as 0
/// - Everything else uses the shortest text that reads back to the same `f64`
fn format_number(n: f64) -> String {
    if n.is_nan() || n.is_infinite() {
        return "null".to_string();
    }
    match integral(n) {
        Some(i) => i.to_string(),
        None => format!("{}", n),
    }
}

fn encode_string(s: &str, options: &EncodeOptions, out: &mut String) {
    out.push('"');
    if options.escape_strings {
        for ch in s.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\u{08}' => out.push_str("\\b"),
                '\u{0c}' => out.push_str("\\f"),
                c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
                c => out.push(c),
            }
        }
    } else {
        out.push_str(s);
    }
    out.push('"');
}
