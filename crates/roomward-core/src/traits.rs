//! Core trait definitions for the roomward authorization core.
//!
//! Two seams:
//!
//! - `RoomAccessValidator` — one unit of access policy (a pure predicate)
//! - `RoomAuthorization`   — the inbound contract callers depend on
//!
//! The registry wires an ordered list of validators behind the
//! `RoomAuthorization` surface so callers never know which validators
//! exist or in what order they run.

use roomward_contracts::{
    context::AccessContext,
    error::RoomwardResult,
    principal::Principal,
    room::Room,
};

/// One unit of access policy: a pure predicate over the check triple.
///
/// Implementations MUST be pure from the registry's perspective: they read
/// the triple, produce a boolean, and do nothing else. No shared mutable
/// state, no ordering dependency other than registration order.
///
/// An absent `principal` or `context` means "no additional evidence" —
/// a validator must return `Ok(false)` in that case, never treat absence
/// as an implicit grant, and never treat it as an error.
///
/// Returning `Err` marks the validator itself as faulty; the registry
/// propagates the fault to the caller rather than converting it into a
/// deny.
pub trait RoomAccessValidator: Send + Sync {
    /// Stable name used in configuration and log output.
    fn name(&self) -> &str;

    /// Decide whether this validator grants access for the given triple.
    fn validate(
        &self,
        room: &Room,
        principal: Option<&Principal>,
        context: Option<&AccessContext>,
    ) -> RoomwardResult<bool>;
}

/// The inbound authorization contract.
///
/// A single operation, exposed under a stable service name so in-process
/// callers can request an access decision without depending on the
/// validator composition behind it.
pub trait RoomAuthorization: Send + Sync {
    /// Stable service name, e.g. "room-authorization".
    fn service_name(&self) -> &str;

    /// Return whether access to `room` should be granted.
    ///
    /// `Ok(true)` / `Ok(false)` is the decision; `Err` means a validator
    /// faulted and no decision was reached.
    fn can_access_room(
        &self,
        room: &Room,
        principal: Option<&Principal>,
        context: Option<&AccessContext>,
    ) -> RoomwardResult<bool>;
}
