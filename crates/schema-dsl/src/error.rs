//! Error types for schema construction
//!
//! Every failed factory call reports a [`BuildError`] carrying a
//! [`BuildErrorCode`], the name of the factory and a message.
//!
//! # Error Codes
//!
//! `MissingArgument` is a construction error: a required argument category
//! could not be identified, so no document is produced. The remaining codes
//! are diagnostics; whether they fail the call depends on the
//! [`DslConfig`](crate::DslConfig) policy.
//!
//! # Example
//! ```rust
//! use schema_dsl::{arr, meta, Attributes, BuildErrorCode};
//!
//! let err = arr!(meta(Attributes::new().title("Empty"))).unwrap_err();
//! assert_eq!(err.code, BuildErrorCode::MissingArgument);
//! assert_eq!(err.to_string(), "[MISSING_ARGUMENT] arr: requires an item schema");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::arg::ArgKind;

/// Type-safe error codes for schema construction.
///
/// When serialized to JSON, codes are converted to SCREAMING_SNAKE_CASE
/// (e.g., `MissingArgument` becomes `"MISSING_ARGUMENT"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildErrorCode {
    /// A required argument (item schema, element, prefix, value schema or
    /// literal) is missing after disambiguation
    MissingArgument,
    /// An argument matches no recognised shape at its position
    UnexpectedArgument,
    /// A metadata key collides with a structural key of the factory
    ReservedKey,
    /// A required property name is not a declared property
    UndeclaredRequired,
    /// A required property name is listed more than once
    DuplicateRequired,
}

impl BuildErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingArgument => "MISSING_ARGUMENT",
            Self::UnexpectedArgument => "UNEXPECTED_ARGUMENT",
            Self::ReservedKey => "RESERVED_KEY",
            Self::UndeclaredRequired => "UNDECLARED_REQUIRED",
            Self::DuplicateRequired => "DUPLICATE_REQUIRED",
        }
    }

    /// Returns true if this code is always fatal, regardless of policy.
    pub fn is_construction_error(&self) -> bool {
        matches!(self, Self::MissingArgument)
    }
}

impl fmt::Display for BuildErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Schema construction error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("[{code}] {factory}: {message}")]
pub struct BuildError {
    /// Type-safe error code
    pub code: BuildErrorCode,
    /// The factory that rejected the call (e.g. `"arr"`)
    pub factory: String,
    /// Human-readable error message
    pub message: String,
    /// Zero-based position of the offending argument, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// The offending key, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl BuildError {
    /// Create a new error with code, factory and message.
    pub fn new(code: BuildErrorCode, factory: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            factory: factory.into(),
            message: message.into(),
            position: None,
            key: None,
        }
    }

    /// Attach the argument position.
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach the offending key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    // Convenience constructors

    /// Create a MISSING_ARGUMENT error; `what` completes "requires ...".
    pub fn missing_argument(factory: &str, what: &str) -> Self {
        Self::new(
            BuildErrorCode::MissingArgument,
            factory,
            format!("requires {}", what),
        )
    }

    /// Create an UNEXPECTED_ARGUMENT error.
    pub fn unexpected_argument(factory: &str, position: usize, found: ArgKind) -> Self {
        Self::new(
            BuildErrorCode::UnexpectedArgument,
            factory,
            format!("unexpected {} argument at position {}", found, position),
        )
        .with_position(position)
    }

    /// Create a RESERVED_KEY error.
    pub fn reserved_key(factory: &str, key: &str) -> Self {
        Self::new(
            BuildErrorCode::ReservedKey,
            factory,
            format!("metadata key '{}' is reserved for structure", key),
        )
        .with_key(key)
    }

    /// Create an UNDECLARED_REQUIRED error.
    pub fn undeclared_required(factory: &str, key: &str) -> Self {
        Self::new(
            BuildErrorCode::UndeclaredRequired,
            factory,
            format!("required property '{}' is not declared", key),
        )
        .with_key(key)
    }

    /// Create a DUPLICATE_REQUIRED error.
    pub fn duplicate_required(factory: &str, key: &str) -> Self {
        Self::new(
            BuildErrorCode::DuplicateRequired,
            factory,
            format!("required property '{}' is listed more than once", key),
        )
        .with_key(key)
    }
}

/// Result type alias for schema construction.
pub type BuildResult<T> = Result<T, BuildError>;
