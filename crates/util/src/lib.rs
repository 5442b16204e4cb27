//! docstore-util - Document value model and structural utilities
//!
//! This crate provides the [`Value`] type documents are built from, together
//! with the generic helpers the rest of docstore relies on: compaction of
//! sparse arrays, key counting, deep cloning and deep structural comparison.

pub mod clean_array;
pub mod is_empty;
pub mod json_clone;
pub mod json_equal;
pub mod value;

// Re-exports for convenience
pub use clean_array::clean_array;
pub use is_empty::{get_object_length, is_object_empty};
pub use json_clone::{clone, deep_clone};
pub use json_equal::{deep_compare, deep_equal};
pub use value::{Object, Value, ValueKind};
