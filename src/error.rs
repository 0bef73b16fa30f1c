//! Error types for argreflect.

use thiserror::Error;

/// Main error type for all reflect operations.
#[derive(Debug, Error)]
pub enum ReflectError {
    /// A required argument was missing (a `null` target).
    ///
    /// Carries the name of the offending parameter.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A typed handler could not accept the value of the property it matched.
    #[error("Property '{property}' cannot be converted to {expected}: {source}")]
    TypeMismatch {
        /// Name of the property being dispatched.
        property: String,
        /// Type name the handler declared.
        expected: &'static str,
        /// Underlying conversion error.
        #[source]
        source: serde_json::Error,
    },

    /// The target could not be turned into a set of properties.
    #[error("Inspect error: {0}")]
    Inspect(#[from] serde_json::Error),
}

/// Result type alias using ReflectError.
pub type Result<T> = std::result::Result<T, ReflectError>;
