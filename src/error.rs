//! Error types for path string operations

use thiserror::Error;

/// The error type for path string operations
///
/// Every variant is a usage error: the inputs were wrong, nothing transient
/// happened, and retrying with the same arguments fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path is not valid Unicode and cannot be treated as a string
    #[error("Path must be a string. Received non-Unicode path: {path}")]
    NotUnicode { path: String },

    /// Operation requires an absolute path
    #[error("'from' and 'to' both must be absolute paths, got relative path: {path}")]
    NotAbsolute { path: String },

    /// A non-first `join` argument begins with a separator under the strict policy
    #[error(
        "Only the first path fragment can be absolute, argument {index} begins with a separator: {path}"
    )]
    UnexpectedAbsolute { index: usize, path: String },

    /// Separator is neither `/` nor `\`
    #[error("Unsupported path separator: {separator:?}")]
    InvalidSeparator { separator: char },

    /// Platform name could not be recognised
    #[error("Unknown platform: {name}")]
    UnknownPlatform { name: String },
}

/// Broad classes of [`PathError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument had the wrong type or an unusable value
    InvalidArgumentType,
    /// The arguments were well formed but the operation's precondition failed
    InvalidOperationPrecondition,
    /// The arguments violate the engine's configured join policy
    PolicyViolation,
}

impl PathError {
    /// Classify this error.
    ///
    /// ```
    /// use pathfx::{ErrorKind, PathFx};
    ///
    /// let err = PathFx::UNIX.relative("a", "/b").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidOperationPrecondition);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::NotUnicode { .. }
            | PathError::InvalidSeparator { .. }
            | PathError::UnknownPlatform { .. } => ErrorKind::InvalidArgumentType,
            PathError::NotAbsolute { .. } => ErrorKind::InvalidOperationPrecondition,
            PathError::UnexpectedAbsolute { .. } => ErrorKind::PolicyViolation,
        }
    }
}

/// Result type for path string operations
pub type Result<T> = std::result::Result<T, PathError>;
