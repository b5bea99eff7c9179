//! JSON text -> [`Document`].
//!
//! The first `{` or `[` anywhere in the text decides whether the document is
//! object- or array-rooted; text containing neither is rejected before the
//! decoder runs. Decoding itself is delegated to `serde_json`, and the
//! decoded tree is converted into the crate's [`Value`] model (all numbers
//! become `f64`).

use crate::document::Document;
use crate::error::{JsonError, Result};
use crate::types::{Kind, Value};
use tracing::debug;

/// Parse JSON text whose root is an object or an array.
///
/// # Example
/// ```
/// use easy_json::parse;
///
/// let doc = parse(r#"{"a":{"b":[{"c":1},{"c":2}]}}"#).unwrap();
/// assert_eq!(doc.get_i64("a.b[1].c").unwrap(), 2);
/// ```
pub fn parse(text: &str) -> Result<Document> {
    let expected = detect_root(text).ok_or(JsonError::InvalidJsonText)?;
    let decoded: serde_json::Value = serde_json::from_str(text)?;
    let root = Value::from(decoded);
    // A scalar root can still get here, e.g. the string literal "[x]".
    if root.kind() != expected {
        return Err(JsonError::InvalidJsonText);
    }
    debug!(kind = %expected, bytes = text.len(), "parsed document");
    Document::try_from(root)
}

/// Scan for the first container opener.
fn detect_root(text: &str) -> Option<Kind> {
    text.bytes().find_map(|b| match b {
        b'{' => Some(Kind::Object),
        b'[' => Some(Kind::Array),
        _ => None,
    })
}
