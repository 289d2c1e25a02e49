//! Error types for store access and (de)serialization.

use thiserror::Error;

/// Result type for backing store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a backing store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Keys must contain at least one non-whitespace character.
    #[error("backing store key cannot be empty")]
    EmptyKey,

    /// The stored value does not have the requested type.
    #[error("type mismatch for key '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type for parse and write operations.
pub type SerializationResult<T> = Result<T, SerializationError>;

/// Errors raised while parsing or writing models.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("backing store error: {0}")]
    Store(#[from] StoreError),

    /// A node held a value that could not be converted (bad date, uuid, range).
    #[error("invalid {expected} value: {value}")]
    InvalidValue {
        expected: &'static str,
        value: String,
    },

    /// An enum declared strict received a string outside its table.
    #[error("unknown {enum_name} value: {value}")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("expected {expected} node, found {found}")]
    UnexpectedNodeKind {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// A factory produced a model other than the one the caller asked for.
    #[error("expected model {expected}, factory produced {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("writer error: {0}")]
    Writer(String),
}
