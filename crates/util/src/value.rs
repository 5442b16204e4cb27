//! [`Value`] — the document type every docstore primitive operates on.
//!
//! A document is built from scalars, `null`, the absent marker, sequences and
//! insertion-ordered mappings. A handful of foreign kinds (`Date`, `Bytes`,
//! `Map`, `Set`) exist so that hosts can hand them in; they are never
//! storable and sanitization rejects them.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

/// Insertion-ordered mapping from keys to document values.
pub type Object = IndexMap<String, Value>;

/// A document value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absent marker: "no value here", distinct from `Null`.
    #[default]
    Undefined,
    /// A never-assigned sequence slot left behind by a sparse write.
    ///
    /// Reads report it as [`Value::Undefined`].
    Hole,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
    /// Date/time as milliseconds since the Unix epoch.
    Date(f64),
    /// Raw binary data.
    Bytes(Vec<u8>),
    /// Keyed collection with arbitrary keys.
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
}

/// The kind of a [`Value`], used for dispatch and in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Date,
    Bytes,
    Map,
    Set,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Date => "date",
            ValueKind::Bytes => "bytes",
            ValueKind::Map => "map",
            ValueKind::Set => "set",
        }
    }

    /// Returns true for `null`, booleans, numbers and strings.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            ValueKind::Null | ValueKind::Boolean | ValueKind::Number | ValueKind::String
        )
    }

    /// Returns true for kinds that may appear in a stored document.
    pub fn is_storable(&self) -> bool {
        self.is_scalar() || matches!(self, ValueKind::Array | ValueKind::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Builds an object from key/value pairs, keeping their order.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds an array from values.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined | Value::Hole => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Date(_) => ValueKind::Date,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Map(_) => ValueKind::Map,
            Value::Set(_) => ValueKind::Set,
        }
    }

    /// True for the absent marker and for sequence holes.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined | Value::Hole)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for arrays and objects, the only kinds a path can descend into.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up an own key of an object. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Converts a storable value to JSON.
    ///
    /// `Undefined` object entries are omitted and `Undefined` sequence slots
    /// become `null`. Returns `None` when the value (or anything nested in
    /// it) is a foreign kind, or when the root itself is undefined.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Value::Undefined | Value::Hole => None,
            Value::Null => Some(serde_json::Value::Null),
            Value::Bool(b) => Some(serde_json::Value::Bool(*b)),
            Value::Number(n) => Some(number_to_json(*n)),
            Value::String(s) => Some(serde_json::Value::String(s.clone())),
            Value::Array(arr) => {
                let mut out = Vec::with_capacity(arr.len());
                for item in arr {
                    if item.is_undefined() {
                        out.push(serde_json::Value::Null);
                    } else {
                        out.push(item.to_json()?);
                    }
                }
                Some(serde_json::Value::Array(out))
            }
            Value::Object(obj) => {
                let mut out = serde_json::Map::new();
                for (key, val) in obj {
                    if val.is_undefined() {
                        continue;
                    }
                    out.insert(key.clone(), val.to_json()?);
                }
                Some(serde_json::Value::Object(out))
            }
            Value::Date(_) | Value::Bytes(_) | Value::Map(_) | Value::Set(_) => None,
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    // Integral values within the safe range are written without a fraction.
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::Number(serde_json::Number::from(n as i64));
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::json_equal::deep_equal(self, other)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Undefined)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Hole | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => number_to_json(*n).serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let len = obj.values().filter(|v| !v.is_undefined()).count();
                let mut map = serializer.serialize_map(Some(len))?;
                for (key, val) in obj {
                    if !val.is_undefined() {
                        map.serialize_entry(key, val)?;
                    }
                }
                map.end()
            }
            other => Err(S::Error::custom(format_args!(
                "cannot serialize a {} value",
                other.kind()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_preserves_key_order() {
        let value = Value::from(json!({"b": 1, "a": [true, null, "x"]}));
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(value.get("b"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Hole.kind(), ValueKind::Undefined);
        assert_eq!(Value::from(1).kind(), ValueKind::Number);
        assert_eq!(Value::Date(0.0).kind(), ValueKind::Date);
        assert!(!ValueKind::Set.is_storable());
        assert!(ValueKind::Object.is_storable());
        assert_eq!(ValueKind::Map.to_string(), "map");
    }

    #[test]
    fn test_to_json_drops_undefined_entries() {
        let value = Value::object([
            ("a", Value::from(1)),
            ("b", Value::Undefined),
            ("c", Value::array([Value::Undefined, Value::Hole, Value::from(2.5)])),
        ]);
        assert_eq!(value.to_json(), Some(json!({"a": 1, "c": [null, null, 2.5]})));
    }

    #[test]
    fn test_to_json_rejects_foreign_kinds() {
        let value = Value::object([("when", Value::Date(1.0))]);
        assert_eq!(value.to_json(), None);
        assert_eq!(Value::Undefined.to_json(), None);
    }

    #[test]
    fn test_serialize_roundtrip_through_serde_json() {
        let value = Value::object([
            ("name", Value::from("doc")),
            ("skip", Value::Undefined),
            ("tags", Value::array(["a", "b"])),
        ]);
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text, r#"{"name":"doc","tags":["a","b"]}"#);
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back.get("tags"), value.get("tags"));
    }

    #[test]
    fn test_serialize_foreign_kind_fails() {
        let value = Value::array([Value::Set(vec![])]);
        assert!(serde_json::to_string(&value).is_err());
    }

    #[test]
    fn test_option_conversion() {
        assert!(Value::from(None::<i32>).is_undefined());
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
