//! Tree traversal and in-place mutation over a token sequence.
//!
//! Every operation walks the tree with the same single-step functions
//! ([`step`] / [`step_mut`]), so get, set, append and remove report the
//! same errors for the same path:
//!
//! - `Index(i)` needs an array (`TypeMismatch` otherwise) with `i < len`
//!   (`IndexOutOfBounds` otherwise)
//! - `Field(name)` needs an object (`TypeMismatch` otherwise) holding
//!   `name` (`FieldNotExists` otherwise)
//!
//! Mutations resolve the parent of the terminal token first and only then
//! write, so a failing call leaves the tree untouched.

use crate::error::{JsonError, Result};
use crate::path::Token;
use crate::types::{Kind, Value};

fn mismatch(token: &Token, found: &Value) -> JsonError {
    let expected = match token {
        Token::Index(_) => Kind::Array,
        Token::Field(_) => Kind::Object,
    };
    JsonError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

/// Follow one token down from `node`.
pub fn step<'a>(node: &'a Value, token: &Token) -> Result<&'a Value> {
    match (node, token) {
        (Value::Array(items), Token::Index(i)) => {
            items.get(*i).ok_or(JsonError::IndexOutOfBounds {
                index: *i,
                len: items.len(),
            })
        }
        (Value::Object(map), Token::Field(name)) => map
            .get(name)
            .ok_or_else(|| JsonError::FieldNotExists(name.clone())),
        (node, token) => Err(mismatch(token, node)),
    }
}

/// Mutable counterpart of [`step`].
pub fn step_mut<'a>(node: &'a mut Value, token: &Token) -> Result<&'a mut Value> {
    match (node, token) {
        (Value::Array(items), Token::Index(i)) => {
            let len = items.len();
            items
                .get_mut(*i)
                .ok_or(JsonError::IndexOutOfBounds { index: *i, len })
        }
        (Value::Object(map), Token::Field(name)) => map
            .get_mut(name)
            .ok_or_else(|| JsonError::FieldNotExists(name.clone())),
        (node, token) => Err(mismatch(token, node)),
    }
}

/// Read the node addressed by `tokens`. No tokens addresses the root.
pub fn get<'a>(root: &'a Value, tokens: &[Token]) -> Result<&'a Value> {
    let mut node = root;
    for token in tokens {
        node = step(node, token)?;
    }
    Ok(node)
}

/// Mutable counterpart of [`get`].
pub fn get_mut<'a>(root: &'a mut Value, tokens: &[Token]) -> Result<&'a mut Value> {
    let mut node = root;
    for token in tokens {
        node = step_mut(node, token)?;
    }
    Ok(node)
}

/// Walk every token but the last and hand back the container the last one
/// applies to. The terminal token itself is not checked here.
fn resolve_parent<'a, 't>(
    root: &'a mut Value,
    tokens: &'t [Token],
) -> Result<(&'a mut Value, &'t Token)> {
    let (last, init) = tokens
        .split_last()
        .ok_or_else(|| JsonError::InvalidPath("path addresses the root".to_string()))?;
    Ok((get_mut(root, init)?, last))
}

/// Replace the node at `tokens` with `value`.
///
/// A terminal field is inserted if absent; a terminal index must already
/// exist. Intermediate nodes must exist.
pub fn set(root: &mut Value, tokens: &[Token], value: Value) -> Result<()> {
    match resolve_parent(root, tokens)? {
        (Value::Array(items), Token::Index(i)) => {
            let len = items.len();
            let slot = items
                .get_mut(*i)
                .ok_or(JsonError::IndexOutOfBounds { index: *i, len })?;
            *slot = value;
            Ok(())
        }
        (Value::Object(map), Token::Field(name)) => {
            map.insert(name.clone(), value);
            Ok(())
        }
        (node, token) => Err(mismatch(token, node)),
    }
}

/// Push `value` onto the array at `tokens`. No tokens appends to the root.
pub fn append(root: &mut Value, tokens: &[Token], value: Value) -> Result<()> {
    match get_mut(root, tokens)? {
        Value::Array(items) => {
            items.push(value);
            Ok(())
        }
        other => Err(JsonError::NotAnArray(other.kind())),
    }
}

/// Detach and return the node at `tokens`. Later array elements shift left.
pub fn remove(root: &mut Value, tokens: &[Token]) -> Result<Value> {
    match resolve_parent(root, tokens)? {
        (Value::Array(items), Token::Index(i)) => {
            if *i >= items.len() {
                return Err(JsonError::IndexOutOfBounds {
                    index: *i,
                    len: items.len(),
                });
            }
            Ok(items.remove(*i))
        }
        (Value::Object(map), Token::Field(name)) => map
            .shift_remove(name)
            .ok_or_else(|| JsonError::FieldNotExists(name.clone())),
        (node, token) => Err(mismatch(token, node)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::parse_path;

    fn sample() -> Value {
        Value::from(serde_json::json!({"a": {"b": [{"c": 1}, {"c": 2}]}}))
    }

    #[test]
    fn failed_set_leaves_tree_untouched() {
        let mut root = sample();
        let before = root.clone();
        assert!(set(&mut root, &parse_path("a.b[9].c"), Value::Null).is_err());
        assert!(set(&mut root, &parse_path("a.x.c"), Value::Null).is_err());
        assert_eq!(root, before);
    }

    #[test]
    fn set_terminal_index_on_object_is_type_mismatch() {
        let mut root = sample();
        let err = set(&mut root, &parse_path("a[0]"), Value::Null).unwrap_err();
        assert!(matches!(
            err,
            JsonError::TypeMismatch {
                expected: Kind::Array,
                found: Kind::Object
            }
        ));
    }

    #[test]
    fn remove_shifts_array() {
        let mut root = sample();
        let removed = remove(&mut root, &parse_path("a.b[0]")).unwrap();
        assert_eq!(removed.to_string(), r#"{"c":1}"#);
        assert_eq!(root.to_string(), r#"{"a":{"b":[{"c":2}]}}"#);
    }
}
