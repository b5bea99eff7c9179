//! Error types for parsing, building, reading and patching documents.

use crate::types::Kind;
use thiserror::Error;

/// Errors that can occur while parsing, building, reading or mutating a document.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The text has no `{` or `[` opener, or its decoded root is a scalar.
    #[error("invalid JSON string")]
    InvalidJsonText,

    /// The underlying decoder rejected the text.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The `object` builder was called with an odd argument count or a non-string name.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// A document root must be an object or an array.
    #[error("document root must be an object or an array, found {0}")]
    InvalidRoot(Kind),

    /// The path cannot address a node for this operation (e.g. `set` on the empty path).
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// An array index at or past the end of the array.
    #[error("index out of bounds: index {index}, length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// An object key that is not present.
    #[error("field not exists: {0}")]
    FieldNotExists(String),

    /// The target of an append is not an array.
    #[error("not an array: found {0}")]
    NotAnArray(Kind),

    /// A path token or a typed accessor expected a different kind of value.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },
}

/// Convenience alias used throughout easy-json.
pub type Result<T> = std::result::Result<T, JsonError>;
