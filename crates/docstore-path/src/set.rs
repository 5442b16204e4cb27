use docstore_util::{Object, Value};

use crate::{parse_index, PATH_SEPARATOR};

/// Set the value at a dot-separated path, creating containers on the way.
///
/// Each missing container is created as an array when the segment used to
/// index into it is a sequence index, and as an object otherwise. Any
/// non-container value found along the path is replaced. Writing past the end
/// of an array pads it with [`Value::Hole`].
///
/// Existing containers keep their kind: a non-index segment applied to an
/// existing array cannot be stored, and the write is skipped. Reading the
/// same path back afterwards yields [`Value::Undefined`], so write-then-read
/// does not round-trip for such paths. Digit segments above
/// [`MAX_ARRAY_INDEX`](crate::MAX_ARRAY_INDEX) count as non-index segments.
///
/// # Example
///
/// ```
/// use docstore_path::set_nested_value;
/// use docstore_util::Value;
/// use serde_json::json;
///
/// let mut doc = Value::from(json!({"d": 300}));
/// set_nested_value("d.test.0", Value::from(0), &mut doc);
/// set_nested_value("x.y.0", Value::from(json!([1, 2, 3])), &mut doc);
/// assert_eq!(doc, Value::from(json!({"d": {"test": [0]}, "x": {"y": [[1, 2, 3]]}})));
/// ```
pub fn set_nested_value(path: &str, value: Value, doc: &mut Value) {
    let mut current = doc;
    for segment in path.split(PATH_SEPARATOR) {
        current = match slot(current, segment) {
            Some(next) => next,
            None => {
                tracing::debug!(
                    path,
                    segment,
                    "skipping write: non-index segment on an existing array"
                );
                return;
            }
        };
    }
    *current = value;
}

/// Returns the slot `segment` addresses inside `container`.
///
/// A non-container is first replaced by an empty container of the kind
/// `segment` calls for.
fn slot<'a>(container: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    let index = parse_index(segment);
    if !container.is_container() {
        *container = match index {
            Some(_) => Value::Array(Vec::new()),
            None => Value::Object(Object::new()),
        };
    }
    match container {
        Value::Object(map) => Some(map.entry(segment.to_string()).or_insert(Value::Undefined)),
        Value::Array(arr) => {
            let idx = index?;
            if idx >= arr.len() {
                arr.resize(idx.checked_add(1)?, Value::Hole);
            }
            Some(&mut arr[idx])
        }
        _ => None,
    }
}
