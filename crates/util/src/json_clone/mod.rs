//! Document cloning utilities.

mod clone;

pub use clone::{clone, deep_clone};
