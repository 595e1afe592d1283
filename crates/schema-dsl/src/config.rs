//! Configuration for the [`Dsl`](crate::Dsl) front-end.
//!
//! The free factory functions always behave like [`DslConfig::default()`]:
//! every diagnostic is tolerated and logged. A [`Dsl`](crate::Dsl) built with
//! a stricter configuration turns diagnostics into errors.
//!
//! # Example
//! ```rust
//! use schema_dsl::{DslConfig, Policy};
//!
//! let config = DslConfig::new().with_reserved_keys(Policy::Strict);
//! assert_eq!(config.unexpected_arguments, Policy::Permissive);
//!
//! let loaded: DslConfig = serde_json::from_str(r#"{"undeclared_required":"strict"}"#).unwrap();
//! assert_eq!(loaded.undeclared_required, Policy::Strict);
//! assert_eq!(loaded.reserved_keys, Policy::Permissive);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::BuildErrorCode;

/// How a diagnostic is handled.
///
/// # Variants
///
/// * `Permissive` - Log the diagnostic with `tracing::warn!` and continue.
///   Unexpected arguments are ignored, reserved metadata keys are dropped so
///   the structural value stays, undeclared required names are kept and
///   repeated required names are listed once.
///
/// * `Strict` - Fail the factory call with the diagnostic as its error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    #[default]
    Permissive,
    Strict,
}

impl Policy {
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Diagnostic policies.
///
/// # Fields
///
/// * `unexpected_arguments` - Arguments that match no recognised shape at
///   their position. Default: `Permissive`.
///
/// * `reserved_keys` - Metadata keys that collide with a factory's
///   structural keys (`type`, `properties`, `items`, ...). Default:
///   `Permissive`.
///
/// * `undeclared_required` - Required names passed to
///   [`props`](crate::props()) that are not keys of the property map.
///   Default: `Permissive`.
///
/// * `duplicate_required` - Required names listed more than once. Default:
///   `Permissive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DslConfig {
    /// Policy for unrecognised arguments (default: Permissive)
    pub unexpected_arguments: Policy,
    /// Policy for metadata keys shadowing structure (default: Permissive)
    pub reserved_keys: Policy,
    /// Policy for required names missing from `properties` (default: Permissive)
    pub undeclared_required: Policy,
    /// Policy for repeated required names (default: Permissive)
    pub duplicate_required: Policy,
}

impl DslConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        trace!("Creating new DslConfig with defaults");
        Self::default()
    }

    /// Every diagnostic is an error.
    pub fn strict() -> Self {
        Self {
            unexpected_arguments: Policy::Strict,
            reserved_keys: Policy::Strict,
            undeclared_required: Policy::Strict,
            duplicate_required: Policy::Strict,
        }
    }

    #[must_use = "This method returns a new DslConfig and does not modify self"]
    pub fn with_unexpected_arguments(mut self, policy: Policy) -> Self {
        trace!(?policy, "Setting unexpected argument policy");
        self.unexpected_arguments = policy;
        self
    }

    #[must_use = "This method returns a new DslConfig and does not modify self"]
    pub fn with_reserved_keys(mut self, policy: Policy) -> Self {
        trace!(?policy, "Setting reserved key policy");
        self.reserved_keys = policy;
        self
    }

    #[must_use = "This method returns a new DslConfig and does not modify self"]
    pub fn with_undeclared_required(mut self, policy: Policy) -> Self {
        trace!(?policy, "Setting undeclared required policy");
        self.undeclared_required = policy;
        self
    }

    #[must_use = "This method returns a new DslConfig and does not modify self"]
    pub fn with_duplicate_required(mut self, policy: Policy) -> Self {
        trace!(?policy, "Setting duplicate required policy");
        self.duplicate_required = policy;
        self
    }

    /// The policy that applies to errors with `code`.
    ///
    /// Construction errors are always strict.
    pub fn policy_for(&self, code: BuildErrorCode) -> Policy {
        match code {
            BuildErrorCode::MissingArgument => Policy::Strict,
            BuildErrorCode::UnexpectedArgument => self.unexpected_arguments,
            BuildErrorCode::ReservedKey => self.reserved_keys,
            BuildErrorCode::UndeclaredRequired => self.undeclared_required,
            BuildErrorCode::DuplicateRequired => self.duplicate_required,
        }
    }
}
