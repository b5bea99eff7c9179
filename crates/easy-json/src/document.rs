//! [`Document`] -- an object- or array-rooted value with path-based access.
//!
//! All reads and writes take a path string (see [`crate::path`]). Writes run
//! the incoming value through [`normalize`], so anything implementing
//! `Serialize` can be stored: primitives, structs, vectors, other values or
//! documents.
//!
//! The `opt*` family returns a caller-supplied default on *any* failure
//! (missing field, index out of bounds, wrong kind); the `get*` family
//! reports the failure.
//!
//! A `Document` is plain owned data. Mutation takes `&mut self`, so sharing
//! one across threads needs the caller's own synchronization.

use crate::access;
use crate::decoder;
use crate::encoder::{to_json_string_with, EncodeOptions};
use crate::error::{JsonError, Result};
use crate::normalize::normalize;
use crate::path::parse_path;
use crate::types::{Kind, Map, Value};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A JSON document whose root is always an object or an array.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// An empty object document, `{}`.
    pub fn new_object() -> Self {
        Document {
            root: Value::Object(Map::new()),
        }
    }

    /// An empty array document, `[]`.
    pub fn new_array() -> Self {
        Document {
            root: Value::Array(Vec::new()),
        }
    }

    /// Parse JSON text. See [`decoder::parse`].
    pub fn parse(text: &str) -> Result<Self> {
        decoder::parse(text)
    }

    /// Build an object from alternating names and values.
    ///
    /// Every name must be a string and the argument count must be even.
    /// The [`object!`](crate::object) macro normalizes its arguments and
    /// calls this.
    pub fn object(args: Vec<Value>) -> Result<Self> {
        if args.len() % 2 != 0 {
            return Err(JsonError::InvalidArguments(format!(
                "expected name/value pairs, got {} arguments",
                args.len()
            )));
        }
        let mut map = Map::with_capacity(args.len() / 2);
        let mut args = args.into_iter();
        while let (Some(name), Some(value)) = (args.next(), args.next()) {
            match name {
                Value::String(name) => {
                    map.insert(name, value);
                }
                other => {
                    return Err(JsonError::InvalidArguments(format!(
                        "field name must be a string, found {}",
                        other.kind()
                    )))
                }
            }
        }
        Ok(Document {
            root: Value::Object(map),
        })
    }

    /// Build an array from already-normalized values.
    pub fn array(args: Vec<Value>) -> Self {
        Document {
            root: Value::Array(args),
        }
    }

    /// Normalize any serializable value into a document. Fails with
    /// `InvalidRoot` when the result is not an object or array.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Document::try_from(normalize(value))
    }

    /// Whether the root is an object or an array.
    pub fn kind(&self) -> Kind {
        self.root.kind()
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// The value at `path`. The empty path returns the root.
    pub fn get(&self, path: &str) -> Result<&Value> {
        access::get(&self.root, &parse_path(path))
    }

    /// Mutable access to the value at `path`. The root itself is not
    /// reachable this way, so the root invariant cannot be broken.
    pub fn get_mut(&mut self, path: &str) -> Result<&mut Value> {
        let tokens = parse_path(path);
        if tokens.is_empty() {
            return Err(JsonError::InvalidPath(
                "the document root cannot be borrowed mutably".to_string(),
            ));
        }
        access::get_mut(&mut self.root, &tokens)
    }

    pub fn opt<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.get(path).unwrap_or(default)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }

    fn narrow<'a, T>(
        &'a self,
        path: &str,
        expected: Kind,
        f: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T> {
        let value = self.get(path)?;
        f(value).ok_or(JsonError::TypeMismatch {
            expected,
            found: value.kind(),
        })
    }

    /// Any number, truncated toward zero.
    pub fn get_i64(&self, path: &str) -> Result<i64> {
        self.narrow(path, Kind::Number, Value::as_i64)
    }

    pub fn opt_i64(&self, path: &str, default: i64) -> i64 {
        self.get_i64(path).unwrap_or(default)
    }

    pub fn get_f64(&self, path: &str) -> Result<f64> {
        self.narrow(path, Kind::Number, Value::as_f64)
    }

    pub fn opt_f64(&self, path: &str, default: f64) -> f64 {
        self.get_f64(path).unwrap_or(default)
    }

    pub fn get_bool(&self, path: &str) -> Result<bool> {
        self.narrow(path, Kind::Bool, Value::as_bool)
    }

    pub fn opt_bool(&self, path: &str, default: bool) -> bool {
        self.get_bool(path).unwrap_or(default)
    }

    pub fn get_str(&self, path: &str) -> Result<&str> {
        self.narrow(path, Kind::String, Value::as_str)
    }

    pub fn opt_str<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        self.get_str(path).unwrap_or(default)
    }

    /// A copy of the object at `path` as its own document.
    pub fn get_object(&self, path: &str) -> Result<Document> {
        self.narrow(path, Kind::Object, |value| match value {
            Value::Object(_) => Some(Document {
                root: value.clone(),
            }),
            _ => None,
        })
    }

    pub fn opt_object(&self, path: &str, default: Document) -> Document {
        self.get_object(path).unwrap_or(default)
    }

    /// A copy of the array at `path` as its own document.
    pub fn get_array(&self, path: &str) -> Result<Document> {
        self.narrow(path, Kind::Array, |value| match value {
            Value::Array(_) => Some(Document {
                root: value.clone(),
            }),
            _ => None,
        })
    }

    pub fn opt_array(&self, path: &str, default: Document) -> Document {
        self.get_array(path).unwrap_or(default)
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Store `value` at `path`, replacing what was there.
    ///
    /// The last field of the path is created if missing; everything before
    /// it, and a trailing index, must already exist.
    pub fn set<T: Serialize>(&mut self, path: &str, value: T) -> Result<()> {
        let value = normalize(&value);
        debug!(path, kind = %value.kind(), "set");
        access::set(&mut self.root, &parse_path(path), value)
    }

    /// Push `value` onto the array at `path`; the empty path means the root
    /// array.
    pub fn append<T: Serialize>(&mut self, path: &str, value: T) -> Result<()> {
        let value = normalize(&value);
        debug!(path, kind = %value.kind(), "append");
        if path.is_empty() {
            return match &mut self.root {
                Value::Array(items) => {
                    items.push(value);
                    Ok(())
                }
                other => Err(JsonError::NotAnArray(other.kind())),
            };
        }
        access::append(&mut self.root, &parse_path(path), value)
    }

    /// Detach and return the value at `path`.
    pub fn remove(&mut self, path: &str) -> Result<Value> {
        debug!(path, "remove");
        access::remove(&mut self.root, &parse_path(path))
    }

    // ========================================================================
    // Output
    // ========================================================================

    pub fn to_json_string_with(&self, options: &EncodeOptions) -> String {
        to_json_string_with(&self.root, options)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

/// Serializes as the root value, so normalizing a document does not wrap it.
impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl TryFrom<Value> for Document {
    type Error = JsonError;

    fn try_from(root: Value) -> Result<Self> {
        if root.is_container() {
            Ok(Document { root })
        } else {
            Err(JsonError::InvalidRoot(root.kind()))
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.root
    }
}

impl FromStr for Document {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        decoder::parse(s)
    }
}
