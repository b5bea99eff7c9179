//! # easy-json
//!
//! Schema-less JSON documents with path-string addressing.
//!
//! A [`Document`] holds an object or array root. Nested values are read and
//! patched with paths such as `"a.b[0].c"`, without declaring a Rust type for
//! every shape. Anything implementing `serde::Serialize` can be written into a
//! document; structs become objects keyed by their serde field names.
//!
//! ## Quick start
//!
//! ```rust
//! use easy_json::{array, object, parse};
//!
//! let mut doc = parse(r#"{"name":"Alice","scores":[95,87]}"#).unwrap();
//! doc.append("scores", 92).unwrap();
//! doc.set("name", "Bob").unwrap();
//! assert_eq!(doc.get_i64("scores[2]").unwrap(), 92);
//! assert_eq!(doc.opt_str("nickname", "none"), "none");
//! assert_eq!(doc.to_string(), r#"{"name":"Bob","scores":[95,87,92]}"#);
//!
//! // Builders take variadic arguments, normalizing each one.
//! let built = object!("tags", array!["a", "b"], "empty", array![]).unwrap();
//! assert_eq!(built.to_string(), r#"{"tags":["a","b"],"empty":[]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `Value` model and `Kind`
//! - [`path`] — path string → tokens
//! - [`normalize`](mod@normalize) — any `Serialize` value → `Value`
//! - [`access`] — get / set / append / remove over a token sequence
//! - [`encoder`] — `Value` → compact JSON text
//! - [`decoder`] — JSON text → `Document`
//! - [`document`] — the caller-facing `Document` API
//! - [`error`] — Error types

pub mod access;
pub mod decoder;
pub mod document;
pub mod encoder;
pub mod error;
pub mod normalize;
pub mod path;
pub mod types;

pub use decoder::parse;
pub use document::Document;
pub use encoder::{to_json_string, to_json_string_with, EncodeOptions};
pub use error::JsonError;
pub use normalize::normalize;
pub use path::{parse_path, Path, Token};
pub use types::{Kind, Map, Value};

/// Build an object [`Document`] from alternating names and values.
///
/// Every argument is normalized first. Returns
/// `Err(JsonError::InvalidArguments)` for an odd argument count or a name
/// that is not a string.
///
/// ```
/// use easy_json::object;
///
/// let doc = object!("id", 7, "tags", vec!["x", "y"]).unwrap();
/// assert_eq!(doc.to_string(), r#"{"id":7,"tags":["x","y"]}"#);
/// assert!(object!("dangling").is_err());
/// ```
#[macro_export]
macro_rules! object {
    ($($arg:expr),* $(,)?) => {
        $crate::Document::object(::std::vec![$($crate::normalize(&$arg)),*])
    };
}

/// Build an array [`Document`], normalizing each argument.
///
/// ```
/// use easy_json::array;
///
/// assert_eq!(array![].to_string(), "[]");
/// assert_eq!(array![1, "two", None::<i32>].to_string(), r#"[1,"two",null]"#);
/// ```
#[macro_export]
macro_rules! array {
    ($($arg:expr),* $(,)?) => {
        $crate::Document::array(::std::vec![$($crate::normalize(&$arg)),*])
    };
}
