//! docstore — a small document data engine.
//!
//! # Overview
//!
//! This crate lets a storage layer treat arbitrary JSON-like values as
//! addressable, queryable and mutable documents:
//!
//! - dot-path reads and writes ([`get_nested_value`], [`set_nested_value`])
//! - deep cloning and structural comparison ([`deep_clone`], [`deep_compare`])
//! - sanitization before storage ([`prepare_object`], [`prepare_array`])
//! - value matching for queries ([`match_values`], [`MatchSpec`])
//! - update documents ([`update_document`], [`UpdateSpec`])
//!
//! Every function is synchronous and works only on the values it is given.
//! Callers sharing a document between tasks must serialize access themselves,
//! or hand out a [`deep_clone`].
//!
//! # Example
//!
//! ```
//! use docstore::{prepare_value, update_document, MatchSpec, UpdateSpec, Value};
//! use serde_json::json;
//!
//! let mut doc = Value::from(json!({"name": "alpha"}));
//! let mut fields = docstore::Object::new();
//! fields.insert("meta.tags.0".to_string(), Value::from("new"));
//! update_document(UpdateSpec::from(fields), &mut doc);
//! prepare_value(&mut doc).unwrap();
//!
//! let query = vec![("meta.tags".to_string(), MatchSpec::from(Value::from(json!(["new"]))))];
//! assert!(docstore::match_document(&query, &doc));
//! ```

pub mod error;
pub mod matcher;
pub mod sanitize;
pub mod update;

// Re-export the core public API
pub use docstore_path::{
    format_path, get_nested_value, get_nested_value_mut, is_index_segment, parse_path,
    set_nested_value, validate_path, PathError, MAX_ARRAY_INDEX, MAX_PATH_DEPTH, PATH_SEPARATOR,
};
pub use docstore_util::{
    clean_array, deep_clone, deep_compare, get_object_length, is_object_empty, Object, Value,
    ValueKind,
};
pub use error::SanitizeError;
pub use matcher::{match_document, match_values, MatchSpec, PredicateFn};
pub use sanitize::{prepare_array, prepare_object, prepare_value, sanitized};
pub use update::{update_document, MutateFn, UpdateSpec};
