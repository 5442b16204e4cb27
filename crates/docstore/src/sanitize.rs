//! Validation and normalization of documents before they are stored.
//!
//! Sanitizing walks a document depth-first and in place. Undefined object
//! entries are deleted, undefined array slots become `null`, and keys holding
//! the path separator or values of a foreign kind abort the walk. Work done
//! before a failure stays visible; use [`sanitized`] to get all-or-nothing
//! behavior.

use docstore_path::PATH_SEPARATOR;
use docstore_util::{deep_clone, Object, Value};

use crate::error::SanitizeError;

/// Sanitize an object in place.
///
/// # Errors
///
/// - [`SanitizeError::InvalidKey`] if any key, at any depth, contains `.`
/// - [`SanitizeError::UnsupportedType`] if any value is not storable
///
/// # Example
///
/// ```
/// use docstore::{prepare_object, Value};
///
/// let mut doc = Value::object([("a", Value::from(1)), ("b", Value::Undefined)]);
/// prepare_object(doc.as_object_mut().unwrap()).unwrap();
/// assert_eq!(doc, Value::object([("a", 1)]));
/// ```
pub fn prepare_object(doc: &mut Object) -> Result<(), SanitizeError> {
    let mut index = 0;
    while let Some((key, value)) = doc.get_index_mut(index) {
        if key.contains(PATH_SEPARATOR) {
            tracing::debug!(key = key.as_str(), "document key contains the path separator");
            return Err(SanitizeError::InvalidKey(key.clone()));
        }
        match value {
            Value::Undefined | Value::Hole => {
                doc.shift_remove_index(index);
                continue;
            }
            Value::Object(child) => prepare_object(child)?,
            Value::Array(child) => prepare_array(child)?,
            other => check_scalar(other)?,
        }
        index += 1;
    }
    Ok(())
}

/// Sanitize an array in place.
///
/// Undefined elements and holes are rewritten to `null`.
///
/// # Errors
///
/// Same as [`prepare_object`], for the objects and arrays nested inside.
pub fn prepare_array(seq: &mut [Value]) -> Result<(), SanitizeError> {
    for element in seq.iter_mut() {
        match element {
            Value::Undefined | Value::Hole => *element = Value::Null,
            Value::Object(child) => prepare_object(child)?,
            Value::Array(child) => prepare_array(child)?,
            other => check_scalar(other)?,
        }
    }
    Ok(())
}

/// Sanitize any document value in place.
///
/// Objects and arrays are handled by [`prepare_object`] and
/// [`prepare_array`]; a scalar root passes unchanged. An undefined root is
/// rejected since there is nothing to store.
pub fn prepare_value(value: &mut Value) -> Result<(), SanitizeError> {
    match value {
        Value::Object(obj) => prepare_object(obj),
        Value::Array(arr) => prepare_array(arr),
        other => check_scalar(other),
    }
}

/// Sanitize a deep clone of `value` and return it.
///
/// The input is left untouched whether or not sanitization succeeds.
pub fn sanitized(value: &Value) -> Result<Value, SanitizeError> {
    let mut copy = deep_clone(value);
    prepare_value(&mut copy)?;
    Ok(copy)
}

fn check_scalar(value: &Value) -> Result<(), SanitizeError> {
    let kind = value.kind();
    if kind.is_scalar() {
        return Ok(());
    }
    tracing::debug!(kind = kind.as_str(), "unsupported value in document");
    Err(SanitizeError::UnsupportedType(kind))
}
