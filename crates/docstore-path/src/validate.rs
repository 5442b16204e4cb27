//! Validation of caller-supplied paths.

use crate::{PathError, PATH_SEPARATOR};

/// Maximum allowed number of segments in a path.
pub const MAX_PATH_DEPTH: usize = 256;

/// Validate a path built by a caller for a query or update spec.
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty
/// - The path has more than [`MAX_PATH_DEPTH`] segments
/// - Any segment is empty (leading, trailing or doubled separators)
///
/// # Example
///
/// ```
/// use docstore_path::validate_path;
///
/// validate_path("foo.bar.0").unwrap();
/// validate_path("").unwrap_err();
/// validate_path("foo..bar").unwrap_err();
/// ```
pub fn validate_path(path: &str) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    let mut depth = 0;
    for (i, segment) in path.split(PATH_SEPARATOR).enumerate() {
        if segment.is_empty() {
            return Err(PathError::EmptySegment(i));
        }
        depth += 1;
    }
    if depth > MAX_PATH_DEPTH {
        return Err(PathError::PathTooLong(depth));
    }
    Ok(())
}
