//! The access validator registry: the first-match-wins decision core.
//!
//! The registry holds an ordered, immutable-after-construction list of
//! validators and evaluates them strictly in registration order:
//!
//!   - the first validator returning `Ok(true)` grants access and
//!     short-circuits the rest;
//!   - if none grant, the check is denied (deny-by-default);
//!   - a validator returning `Err` aborts the check and the fault
//!     propagates unchanged.
//!
//! Registration order IS the priority: there is no priority field and no
//! deny-override — a broad allow validator registered early shadows every
//! validator after it.

use tracing::{debug, trace, warn};

use roomward_contracts::{
    context::{AccessContext, CheckId},
    error::RoomwardResult,
    principal::Principal,
    room::Room,
};

use crate::traits::{RoomAccessValidator, RoomAuthorization};

/// An ordered collection of validators evaluated first-true-wins.
///
/// The list is moved in at construction and there is no mutation API —
/// composition happens once, during service construction, which keeps the
/// decision a total deterministic function of the triple and the list.
pub struct AccessValidatorRegistry {
    validators: Vec<Box<dyn RoomAccessValidator>>,
}

impl AccessValidatorRegistry {
    /// Build a registry from an already-ordered validator list.
    ///
    /// The caller's order is the evaluation order on every subsequent
    /// check; the registry never reorders or filters it.
    pub fn new(validators: Vec<Box<dyn RoomAccessValidator>>) -> Self {
        Self { validators }
    }

    /// Number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// True if no validators are registered (every check denies).
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Registered validator names, in evaluation order.
    pub fn validator_names(&self) -> impl Iterator<Item = &str> {
        self.validators.iter().map(|v| v.name())
    }

    /// Evaluate the registered validators against the check triple.
    ///
    /// Each validator receives the identical `(room, principal, context)`
    /// references. Returns `Ok(true)` on the first affirmative validator
    /// (later validators are never invoked), `Ok(false)` if none grant,
    /// and `Err` unchanged if a validator faults.
    pub fn can_access_room(
        &self,
        room: &Room,
        principal: Option<&Principal>,
        context: Option<&AccessContext>,
    ) -> RoomwardResult<bool> {
        let check_id = CheckId::new();

        debug!(
            check_id = %check_id.0,
            room_id = %room.id.0,
            principal = principal.map(|p| p.id.0.as_str()).unwrap_or("<anonymous>"),
            validators = self.validators.len(),
            "evaluating room access"
        );

        for validator in &self.validators {
            if validator.validate(room, principal, context)? {
                debug!(
                    check_id = %check_id.0,
                    room_id = %room.id.0,
                    validator = validator.name(),
                    "access granted"
                );
                return Ok(true);
            }

            trace!(
                check_id = %check_id.0,
                validator = validator.name(),
                "validator did not grant"
            );
        }

        warn!(
            check_id = %check_id.0,
            room_id = %room.id.0,
            "no validator granted access; denying by default"
        );

        Ok(false)
    }
}

impl std::fmt::Debug for AccessValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessValidatorRegistry")
            .field("validators", &self.validator_names().collect::<Vec<_>>())
            .finish()
    }
}

impl RoomAuthorization for AccessValidatorRegistry {
    fn service_name(&self) -> &str {
        "room-authorization"
    }

    fn can_access_room(
        &self,
        room: &Room,
        principal: Option<&Principal>,
        context: Option<&AccessContext>,
    ) -> RoomwardResult<bool> {
        AccessValidatorRegistry::can_access_room(self, room, principal, context)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
