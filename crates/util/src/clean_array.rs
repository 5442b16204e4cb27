use crate::value::Value;

/// Returns a copy of `seq` with its holes removed.
///
/// Only never-assigned slots ([`Value::Hole`]) are dropped; explicit
/// `Undefined` and `Null` elements are kept in place.
///
/// # Examples
///
/// ```
/// use docstore_util::{clean_array, Value};
///
/// let seq = vec![Value::from(1), Value::Hole, Value::Undefined, Value::Null];
/// let cleaned = clean_array(&seq);
/// assert_eq!(cleaned.len(), 3);
/// assert!(matches!(cleaned[1], Value::Undefined));
/// ```
pub fn clean_array(seq: &[Value]) -> Vec<Value> {
    seq.iter()
        .filter(|item| !matches!(item, Value::Hole))
        .cloned()
        .collect()
}
