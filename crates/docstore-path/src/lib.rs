//! Dot-notation path utilities for docstore documents.
//!
//! A path is a `.`-separated list of segments. A segment that is a
//! non-negative base-10 integer addresses a sequence slot; any other segment
//! addresses an object key.
//!
//! # Example
//!
//! ```
//! use docstore_path::{get_nested_value, parse_path, set_nested_value};
//! use docstore_util::Value;
//! use serde_json::json;
//!
//! assert_eq!(parse_path("foo.0.bar"), vec!["foo", "0", "bar"]);
//!
//! let mut doc = Value::from(json!({}));
//! set_nested_value("foo.0.bar", Value::from(42), &mut doc);
//! assert_eq!(doc, Value::from(json!({"foo": [{"bar": 42}]})));
//! assert_eq!(get_nested_value("foo.0.bar", &doc), &Value::from(42));
//! ```

use thiserror::Error;

pub mod get;
pub use get::{get_nested_value, get_nested_value_mut};

pub mod set;
pub use set::set_nested_value;

pub mod validate;
pub use validate::{validate_path, MAX_PATH_DEPTH};

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Largest segment value treated as a sequence index.
///
/// Larger digit strings address object keys, so a write can never grow an
/// array past `MAX_ARRAY_INDEX + 1` slots.
pub const MAX_ARRAY_INDEX: usize = 1 << 20;

/// Split a path string into its segments.
///
/// Splitting is plain: the empty path is a single empty segment and
/// consecutive separators produce empty segments.
///
/// # Example
///
/// ```
/// use docstore_path::parse_path;
///
/// assert_eq!(parse_path(""), vec![""]);
/// assert_eq!(parse_path("a.b"), vec!["a", "b"]);
/// assert_eq!(parse_path("a..b"), vec!["a", "", "b"]);
/// ```
pub fn parse_path(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATOR).collect()
}

/// Join segments into a path string.
///
/// # Example
///
/// ```
/// use docstore_path::format_path;
///
/// assert_eq!(format_path(&["a", "0", "b"]), "a.0.b");
/// ```
pub fn format_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(PATH_SEPARATOR);
        }
        out.push_str(segment.as_ref());
    }
    out
}

/// Check if a segment addresses a sequence slot.
///
/// # Example
///
/// ```
/// use docstore_path::is_index_segment;
///
/// assert!(is_index_segment("0"));
/// assert!(is_index_segment("123"));
/// assert!(!is_index_segment("-1"));
/// assert!(!is_index_segment("1.5"));
/// assert!(!is_index_segment("abc"));
/// assert!(!is_index_segment(""));
/// ```
pub fn is_index_segment(segment: &str) -> bool {
    parse_index(segment).is_some()
}

/// Parse a segment as a sequence index.
///
/// Only ASCII digits are accepted (no sign, no whitespace). Values above
/// [`MAX_ARRAY_INDEX`] are treated as object keys.
pub fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment
        .parse()
        .ok()
        .filter(|&idx: &usize| idx <= MAX_ARRAY_INDEX)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("EMPTY_PATH")]
    Empty,
    #[error("PATH_TOO_LONG: {0} segments")]
    PathTooLong(usize),
    #[error("EMPTY_SEGMENT at position {0}")]
    EmptySegment(usize),
}
