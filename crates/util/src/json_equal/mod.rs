//! Document equality utilities.
//!
//! Provides deep structural comparison for document values.

mod deep_equal;

pub use deep_equal::{deep_compare, deep_equal};
