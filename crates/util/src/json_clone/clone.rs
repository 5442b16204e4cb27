use crate::value::{Object, Value};

/// Creates a deep clone of any document value.
///
/// This is a recursive clone that creates new instances of all
/// nested objects and arrays; mutating the clone never affects the source.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use docstore_util::{deep_clone, Value};
///
/// let original = Value::from(json!({"foo": [1, 2, 3]}));
/// let cloned = deep_clone(&original);
///
/// assert_eq!(original, cloned);
/// ```
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Undefined => Value::Undefined,
        Value::Hole => Value::Hole,
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(*n),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(arr) => Value::Array(arr.iter().map(clone).collect()),
        Value::Object(obj) => {
            let mut new_obj = Object::with_capacity(obj.len());
            for (key, val) in obj {
                new_obj.insert(key.clone(), clone(val));
            }
            Value::Object(new_obj)
        }
        Value::Date(ms) => Value::Date(*ms),
        Value::Bytes(bytes) => Value::Bytes(bytes.clone()),
        Value::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(k, v)| (clone(k), clone(v)))
                .collect(),
        ),
        Value::Set(items) => Value::Set(items.iter().map(clone).collect()),
    }
}

/// Alias of [`clone`] under the name document stores call it by.
pub fn deep_clone(value: &Value) -> Value {
    clone(value)
}
