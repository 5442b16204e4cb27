use crate::value::Object;

/// Check if an object has no own keys.
///
/// A key whose value is the absent marker still counts as present.
///
/// # Examples
///
/// ```
/// use docstore_util::{is_object_empty, Object, Value};
///
/// let empty = Object::new();
///
/// let mut not_empty = Object::new();
/// not_empty.insert("key".to_string(), Value::Undefined);
///
/// assert!(is_object_empty(&empty));
/// assert!(!is_object_empty(&not_empty));
/// ```
pub fn is_object_empty(obj: &Object) -> bool {
    obj.is_empty()
}

/// Number of own keys of an object, absent-valued keys included.
pub fn get_object_length(obj: &Object) -> usize {
    obj.len()
}
