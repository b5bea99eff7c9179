//! Path expressions -- `a.b[0][1].c` style addressing into a document.
//!
//! A path is a dot-separated list of segments. Each segment is an optional
//! field name followed by any number of `[N]` index suffixes:
//!
//! - `"name"` -- the field `name` of the root object
//! - `"items[2]"` -- element 2 of the array under `items`
//! - `"matrix[1][0]"` -- nested array indexing
//! - `"[0].id"` -- field `id` of the first element of a root array
//!
//! Parsing is lenient and never fails: index text that is not a
//! non-negative integer reads as `0`, and an empty segment (as in `a..b`)
//! becomes an empty field name.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One addressing step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// An object key.
    Field(String),
    /// An array position.
    Index(usize),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Field(name) => f.write_str(name),
            Token::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Split a path string into its tokens.
///
/// The empty path yields no tokens, i.e. it addresses the root.
///
/// ```
/// use easy_json::path::{parse_path, Token};
///
/// let tokens = parse_path("a.b[0].c");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Field("a".into()),
///         Token::Field("b".into()),
///         Token::Index(0),
///         Token::Field("c".into()),
///     ]
/// );
/// ```
pub fn parse_path(path: &str) -> Vec<Token> {
    let path = path.trim();
    if path.is_empty() {
        return Vec::new();
    }
    let mut tokens = Vec::new();
    for segment in path.split('.') {
        parse_segment(segment, &mut tokens);
    }
    tokens
}

/// Scan one dot-free segment left to right, alternating between field
/// names (up to the next `[`) and bracketed indices.
fn parse_segment(segment: &str, tokens: &mut Vec<Token>) {
    if segment.is_empty() {
        tokens.push(Token::Field(String::new()));
        return;
    }
    let mut rest = segment;
    while !rest.is_empty() {
        if let Some(inner) = rest.strip_prefix('[') {
            // An unterminated bracket swallows the remainder of the segment.
            let (digits, after) = match inner.find(']') {
                Some(end) => (&inner[..end], &inner[end + 1..]),
                None => (inner, ""),
            };
            tokens.push(Token::Index(parse_index(digits)));
            rest = after;
        } else {
            let end = rest.find('[').unwrap_or(rest.len());
            tokens.push(Token::Field(rest[..end].to_string()));
            rest = &rest[end..];
        }
    }
}

/// Malformed index text reads as 0.
fn parse_index(digits: &str) -> usize {
    digits.trim().parse().unwrap_or(0)
}

/// A parsed path, reusable across several operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(Vec<Token>);

impl Path {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path(parse_path(s)))
    }
}

impl From<Vec<Token>> for Path {
    fn from(tokens: Vec<Token>) -> Self {
        Path(tokens)
    }
}

/// Canonical form: fields joined by `.`, indices attached as `[N]`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 && matches!(token, Token::Field(_)) {
                f.write_str(".")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
