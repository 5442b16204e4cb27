use docstore_util::Value;

use crate::{parse_index, PATH_SEPARATOR};

static UNDEFINED: Value = Value::Undefined;

/// Get the value at a dot-separated path.
///
/// Returns [`Value::Undefined`] when an intermediate node is missing or not a
/// container, when a sequence index is out of bounds, or when a non-index
/// segment is applied to a sequence. Sequence holes read as undefined.
///
/// # Example
///
/// ```
/// use docstore_path::get_nested_value;
/// use docstore_util::Value;
/// use serde_json::json;
///
/// let doc = Value::from(json!({"g": [1, true, [1, 2, 3]]}));
/// assert_eq!(get_nested_value("g.2.2", &doc), &Value::from(3));
/// assert!(get_nested_value("g.2.99", &doc).is_undefined());
/// ```
pub fn get_nested_value<'a>(path: &str, doc: &'a Value) -> &'a Value {
    let mut current = doc;
    for segment in path.split(PATH_SEPARATOR) {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(arr) => parse_index(segment).and_then(|idx| arr.get(idx)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return &UNDEFINED,
        }
    }
    match current {
        Value::Hole => &UNDEFINED,
        _ => current,
    }
}

/// Get a mutable reference to the value at a dot-separated path.
///
/// Returns `None` if the path doesn't exist. Nothing is created.
pub fn get_nested_value_mut<'a>(path: &str, doc: &'a mut Value) -> Option<&'a mut Value> {
    let mut current = doc;
    for segment in path.split(PATH_SEPARATOR) {
        current = match current {
            Value::Object(map) => map.get_mut(segment)?,
            Value::Array(arr) => arr.get_mut(parse_index(segment)?)?,
            _ => return None,
        };
    }
    Some(current)
}
