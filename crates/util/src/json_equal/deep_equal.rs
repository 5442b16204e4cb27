use crate::value::Value;

/// Performs a deep structural equality check between two document values.
///
/// This function compares values recursively:
/// - Scalars by value and type, with no coercion (`1` never equals `"1"`)
/// - Arrays element-by-element, in order
/// - Objects key-by-key, regardless of key order
/// - The absent marker only equals itself (a sequence hole counts as absent)
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use docstore_util::{deep_equal, Value};
///
/// let a = Value::from(json!({"foo": [1, 2, 3]}));
/// let b = Value::from(json!({"foo": [1, 2, 3]}));
/// let c = Value::from(json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Hole, Value::Undefined | Value::Hole) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        // Arrays
        (Value::Array(arr_a), Value::Array(arr_b)) => sequence_equal(arr_a, arr_b),

        // Objects
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Foreign kinds compare structurally within their own kind.
        (Value::Date(a), Value::Date(b)) => a == b,
        (Value::Bytes(a), Value::Bytes(b)) => a == b,
        (Value::Set(a), Value::Set(b)) => sequence_equal(a, b),
        (Value::Map(a), Value::Map(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|((ka, va), (kb, vb))| deep_equal(ka, kb) && deep_equal(va, vb))
        }

        // Different types are never equal
        _ => false,
    }
}

/// Alias of [`deep_equal`] under the name document stores call it by.
pub fn deep_compare(a: &Value, b: &Value) -> bool {
    deep_equal(a, b)
}

fn sequence_equal(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for i in 0..a.len() {
        if !deep_equal(&a[i], &b[i]) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    // Scalar tests
    #[test]
    fn test_equal_numbers() {
        assert!(deep_equal(&v(json!(1)), &v(json!(1))));
        assert!(deep_equal(&v(json!(1)), &v(json!(1.0))));
    }

    #[test]
    fn test_not_equal_numbers() {
        assert!(!deep_equal(&v(json!(1)), &v(json!(0))));
    }

    #[test]
    fn test_number_and_string_not_equal() {
        assert!(!deep_equal(&v(json!(1)), &v(json!("1"))));
    }

    #[test]
    fn test_zero_and_null_not_equal() {
        assert!(!deep_equal(&v(json!(0)), &v(json!(null))));
    }

    #[test]
    fn test_null_and_undefined_not_equal() {
        assert!(!deep_equal(&Value::Null, &Value::Undefined));
        assert!(!deep_equal(&Value::Undefined, &Value::Null));
    }

    #[test]
    fn test_undefined_equal_undefined() {
        assert!(deep_equal(&Value::Undefined, &Value::Undefined));
        assert!(deep_equal(&Value::Hole, &Value::Undefined));
    }

    #[test]
    fn test_one_and_true_not_equal() {
        assert!(!deep_equal(&v(json!(1)), &v(json!(true))));
    }

    #[test]
    fn test_nan_not_equal_to_itself() {
        assert!(!deep_equal(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
    }

    // Object tests
    #[test]
    fn test_equal_objects_different_order() {
        assert!(deep_equal(
            &v(json!({"a": 1, "b": "2"})),
            &v(json!({"b": "2", "a": 1}))
        ));
    }

    #[test]
    fn test_undefined_entry_counts_as_key() {
        let with = Value::object([("a", Value::from(1)), ("e", Value::Undefined)]);
        let without = Value::object([("a", Value::from(1))]);
        assert!(!deep_equal(&with, &without));
        assert!(deep_equal(&with, &with.clone()));
    }

    #[test]
    fn test_not_equal_objects_different_properties() {
        assert!(!deep_equal(
            &v(json!({"a": 1, "b": "2", "c": 3})),
            &v(json!({"a": 1, "b": "2", "d": 3}))
        ));
    }

    #[test]
    fn test_empty_object_and_array_not_equal() {
        assert!(!deep_equal(&v(json!({})), &v(json!([]))));
    }

    // Array tests
    #[test]
    fn test_not_equal_arrays_different_length() {
        let a = Value::array([Value::from(1), Value::from("test"), Value::Null, Value::Undefined]);
        let b = Value::array([Value::from(1), Value::from("test"), Value::Null]);
        assert!(!deep_equal(&a, &b));
    }

    #[test]
    fn test_not_equal_arrays_of_objects() {
        assert!(!deep_equal(
            &v(json!([{"a": "a"}, {"b": "b"}])),
            &v(json!([{"a": "a"}, {"b": "c"}]))
        ));
    }

    // Foreign kinds
    #[test]
    fn test_map_and_array_not_equal() {
        assert!(!deep_equal(&Value::Map(vec![]), &Value::Array(vec![])));
        assert!(deep_equal(&Value::Map(vec![]), &Value::Map(vec![])));
    }

    #[test]
    fn test_dates_compare_by_timestamp() {
        assert!(deep_equal(&Value::Date(5.0), &Value::Date(5.0)));
        assert!(!deep_equal(&Value::Date(5.0), &Value::Number(5.0)));
    }

    #[test]
    fn test_big_object() {
        let a = v(json!({
            "prop1": "value1",
            "prop4": {
                "subProp1": "sub value1",
                "subProp2": {
                    "subSubProp1": "sub sub value1",
                    "subSubProp2": [1, 2, {"prop2": 1, "prop": 2}, 4, 5]
                }
            },
            "prop5": 1000
        }));
        let b = v(json!({
            "prop5": 1000,
            "prop1": "value1",
            "prop4": {
                "subProp2": {
                    "subSubProp1": "sub sub value1",
                    "subSubProp2": [1, 2, {"prop2": 1, "prop": 2}, 4, 5]
                },
                "subProp1": "sub value1"
            }
        }));
        assert!(deep_equal(&a, &b));
    }
}
