use docstore_util::ValueKind;
use thiserror::Error;

/// Reasons a document cannot be stored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SanitizeError {
    /// An object key contains the path separator.
    #[error("INVALID_KEY: {0:?}")]
    InvalidKey(String),

    /// A value outside the storable set (scalars, null, arrays, objects).
    #[error("UNSUPPORTED_TYPE: {0}")]
    UnsupportedType(ValueKind),
}
