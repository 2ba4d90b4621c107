//! Room and visitor types.
//!
//! A `Room` is an immutable snapshot of a livechat conversation for the
//! duration of one access check. The registry treats it as opaque; only
//! individual validators inspect its fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::principal::UserId;

/// Stable, opaque identifier for a room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub String);

impl RoomId {
    /// Construct a room id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Stable, opaque identifier for a department.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentId(pub String);

impl DepartmentId {
    /// Construct a department id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// The livechat guest a room belongs to.
///
/// The `token` is the visitor's session token, compared by the visitor
/// token validator against the token presented in the access context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    /// Visitor session token issued when the conversation was opened.
    pub token: String,
}

impl Visitor {
    /// Construct a visitor from its session token.
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

/// A snapshot of one livechat room, immutable for the duration of a check.
///
/// Validators only read from this; nothing in the authorization core ever
/// writes a room back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Which room this snapshot describes.
    pub id: RoomId,
    /// Whether the conversation is still open.
    pub open: bool,
    /// The guest the conversation belongs to.
    pub visitor: Visitor,
    /// The agent currently serving the room, if one has been assigned.
    pub served_by: Option<UserId>,
    /// The department the room was routed to, if any.
    pub department_id: Option<DepartmentId>,
    /// When the conversation was opened.
    pub opened_at: DateTime<Utc>,
}

impl Room {
    /// Build an open, unassigned room for the given visitor.
    ///
    /// Convenience constructor used by composition code and tests; fields
    /// beyond id and visitor start empty and are set directly.
    pub fn open_for_visitor(id: RoomId, visitor: Visitor) -> Self {
        Self {
            id,
            open: true,
            visitor,
            served_by: None,
            department_id: None,
            opened_at: Utc::now(),
        }
    }
}
