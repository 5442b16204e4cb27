//! Applying update documents.

use std::fmt;

use docstore_path::set_nested_value;
use docstore_util::{Object, Value};

/// Mutation callback used by [`UpdateSpec::Mutate`].
pub type MutateFn<'a> = dyn FnOnce(&mut Value) + 'a;

/// What an update does to a document.
pub enum UpdateSpec<'a> {
    /// Run a callback on the document; it mutates the document directly.
    Mutate(Box<MutateFn<'a>>),
    /// Write each value at its dot-path key, in insertion order.
    Assign(Object),
}

impl<'a> UpdateSpec<'a> {
    pub fn mutate<F>(f: F) -> Self
    where
        F: FnOnce(&mut Value) + 'a,
    {
        UpdateSpec::Mutate(Box::new(f))
    }
}

impl From<Object> for UpdateSpec<'_> {
    fn from(fields: Object) -> Self {
        UpdateSpec::Assign(fields)
    }
}

impl fmt::Debug for UpdateSpec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateSpec::Mutate(_) => f.write_str("Mutate(..)"),
            UpdateSpec::Assign(fields) => f.debug_tuple("Assign").field(fields).finish(),
        }
    }
}

/// Apply `spec` to `doc` in place.
///
/// Assignment keys are dot-paths handed to [`set_nested_value`]; later keys
/// see the state earlier keys produced. Never fails.
///
/// # Example
///
/// ```
/// use docstore::{update_document, UpdateSpec, Value};
/// use serde_json::json;
///
/// let mut doc = Value::from(json!({"test": "123"}));
/// let spec = Value::from(json!({"value.test.0": true}));
/// update_document(UpdateSpec::Assign(spec.as_object().unwrap().clone()), &mut doc);
/// assert_eq!(doc, Value::from(json!({"test": "123", "value": {"test": [true]}})));
/// ```
pub fn update_document(spec: UpdateSpec<'_>, doc: &mut Value) {
    match spec {
        UpdateSpec::Mutate(f) => f(doc),
        UpdateSpec::Assign(fields) => {
            for (path, value) in fields {
                tracing::trace!(path = path.as_str(), "assigning update field");
                set_nested_value(&path, value, doc);
            }
        }
    }
}
