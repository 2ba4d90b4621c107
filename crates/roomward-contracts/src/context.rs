//! Per-check auxiliary context.
//!
//! `AccessContext` is the open, validator-defined bag of extra facts a
//! check may carry. The registry never interprets it; each validator
//! reads only the fields it understands.

use serde::{Deserialize, Serialize};

/// Unique identifier for a single access check.
///
/// Appears in log output so one check's validator activity can be
/// correlated; it never participates in the decision itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckId(pub uuid::Uuid);

impl CheckId {
    /// Create a new, unique check ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CheckId {
    fn default() -> Self {
        Self::new()
    }
}

/// Auxiliary facts accompanying one access check.
///
/// Optional on every check; absence means "no additional evidence".
/// Known facts get typed fields; anything validator-specific beyond them
/// rides in `extra`, which this core never inspects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessContext {
    /// Visitor session token presented by the caller, if any.
    pub visitor_token: Option<String>,
    /// Arbitrary validator-defined facts. Opaque to the registry.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub extra: serde_json::Value,
}

impl AccessContext {
    /// Build a context carrying only a visitor session token.
    pub fn with_visitor_token(token: impl Into<String>) -> Self {
        Self {
            visitor_token: Some(token.into()),
            extra: serde_json::Value::Null,
        }
    }
}
