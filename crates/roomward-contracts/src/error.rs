//! Error types for the roomward authorization core.
//!
//! All fallible operations in the workspace return `RoomwardResult<T>`.
//! A validator fault is deliberately NOT mapped to a deny: converting
//! "unknown" into "denied" is a policy choice the caller must make
//! explicitly, never one this layer makes by accident.

use thiserror::Error;

/// The unified error type for the roomward crates.
#[derive(Debug, Error)]
pub enum RoomwardError {
    /// A registered validator failed internally while evaluating a check.
    ///
    /// Fatal to the whole access check — the registry propagates this
    /// unchanged instead of substituting a default decision.
    #[error("validator '{validator}' faulted: {reason}")]
    ValidatorFault { validator: String, reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A registry configuration referenced a validator that does not exist.
    #[error("unknown validator '{name}' in registry configuration")]
    UnknownValidator { name: String },
}

/// Convenience alias used throughout the roomward crates.
pub type RoomwardResult<T> = Result<T, RoomwardError>;
