//! Built-in livechat room access validators.
//!
//! Each validator grants on exactly one kind of evidence and refuses
//! otherwise. Absent principal/context is always "no evidence": the
//! validator returns `Ok(false)` and leaves the decision to whatever is
//! registered after it.

use tracing::trace;

use roomward_contracts::{
    context::AccessContext,
    error::RoomwardResult,
    principal::{Permission, Principal},
    room::Room,
};
use roomward_core::traits::RoomAccessValidator;

/// Permission that grants visibility into every livechat room.
pub const VIEW_ROOMS: &str = "view-livechat-rooms";

/// Permission that grants visibility into rooms of the holder's departments.
pub const VIEW_DEPARTMENT_ROOMS: &str = "view-livechat-department-rooms";

/// Grants access to principals holding the global room-view permission.
///
/// This is the manager path: anyone with `view-livechat-rooms` may open
/// any room, regardless of assignment or department.
#[derive(Debug, Default)]
pub struct ManagerPermissionValidator;

impl RoomAccessValidator for ManagerPermissionValidator {
    fn name(&self) -> &str {
        "manager-permission"
    }

    fn validate(
        &self,
        _room: &Room,
        principal: Option<&Principal>,
        _context: Option<&AccessContext>,
    ) -> RoomwardResult<bool> {
        let Some(principal) = principal else {
            return Ok(false);
        };
        Ok(principal.permissions.has(&Permission::new(VIEW_ROOMS)))
    }
}

/// Grants access to the agent currently serving the room.
#[derive(Debug, Default)]
pub struct ServingAgentValidator;

impl RoomAccessValidator for ServingAgentValidator {
    fn name(&self) -> &str {
        "serving-agent"
    }

    fn validate(
        &self,
        room: &Room,
        principal: Option<&Principal>,
        _context: Option<&AccessContext>,
    ) -> RoomwardResult<bool> {
        let (Some(principal), Some(served_by)) = (principal, room.served_by.as_ref()) else {
            return Ok(false);
        };
        Ok(principal.id == *served_by)
    }
}

/// Grants access to department members holding the department-view
/// permission, when the room was routed to one of their departments.
#[derive(Debug, Default)]
pub struct DepartmentAgentValidator;

impl RoomAccessValidator for DepartmentAgentValidator {
    fn name(&self) -> &str {
        "department-agent"
    }

    fn validate(
        &self,
        room: &Room,
        principal: Option<&Principal>,
        _context: Option<&AccessContext>,
    ) -> RoomwardResult<bool> {
        let (Some(principal), Some(department_id)) = (principal, room.department_id.as_ref())
        else {
            return Ok(false);
        };

        if !principal
            .permissions
            .has(&Permission::new(VIEW_DEPARTMENT_ROOMS))
        {
            return Ok(false);
        }

        let member = principal.departments.contains(department_id);
        if !member {
            trace!(
                room_id = %room.id.0,
                department_id = %department_id.0,
                "principal holds department permission but is not a member"
            );
        }
        Ok(member)
    }
}

/// Grants access to the visitor the room belongs to.
///
/// The caller presents the visitor's session token in the access context;
/// access is granted when it equals the token on the room's visitor
/// record. Principals play no part here — this is the anonymous guest
/// path.
#[derive(Debug, Default)]
pub struct VisitorTokenValidator;

impl RoomAccessValidator for VisitorTokenValidator {
    fn name(&self) -> &str {
        "visitor-token"
    }

    fn validate(
        &self,
        room: &Room,
        _principal: Option<&Principal>,
        context: Option<&AccessContext>,
    ) -> RoomwardResult<bool> {
        let Some(token) = context.and_then(|c| c.visitor_token.as_deref()) else {
            return Ok(false);
        };
        Ok(room.visitor.token == token)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use roomward_contracts::{
        context::AccessContext,
        principal::{Permission, Principal, UserId},
        room::{DepartmentId, Room, RoomId, Visitor},
    };
    use roomward_core::traits::RoomAccessValidator;

    use super::{
        DepartmentAgentValidator, ManagerPermissionValidator, ServingAgentValidator,
        VisitorTokenValidator, VIEW_DEPARTMENT_ROOMS, VIEW_ROOMS,
    };

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn make_room() -> Room {
        Room::open_for_visitor(RoomId::new("room-1"), Visitor::new("tok-visitor"))
    }

    // ── ManagerPermissionValidator ───────────────────────────────────────────

    #[test]
    fn manager_permission_grants_with_view_rooms() {
        let validator = ManagerPermissionValidator;
        let principal =
            Principal::with_permissions(UserId::new("mgr-1"), [Permission::new(VIEW_ROOMS)]);

        assert!(validator
            .validate(&make_room(), Some(&principal), None)
            .unwrap());
    }

    #[test]
    fn manager_permission_refuses_without_permission() {
        let validator = ManagerPermissionValidator;
        let principal = Principal::new(UserId::new("agent-1"));

        assert!(!validator
            .validate(&make_room(), Some(&principal), None)
            .unwrap());
    }

    #[test]
    fn manager_permission_treats_missing_principal_as_no_evidence() {
        let validator = ManagerPermissionValidator;
        assert!(!validator.validate(&make_room(), None, None).unwrap());
    }

    // ── ServingAgentValidator ────────────────────────────────────────────────

    #[test]
    fn serving_agent_grants_for_assigned_agent() {
        let validator = ServingAgentValidator;
        let mut room = make_room();
        room.served_by = Some(UserId::new("agent-5"));
        let principal = Principal::new(UserId::new("agent-5"));

        assert!(validator.validate(&room, Some(&principal), None).unwrap());
    }

    #[test]
    fn serving_agent_refuses_other_agents() {
        let validator = ServingAgentValidator;
        let mut room = make_room();
        room.served_by = Some(UserId::new("agent-5"));
        let principal = Principal::new(UserId::new("agent-6"));

        assert!(!validator.validate(&room, Some(&principal), None).unwrap());
    }

    #[test]
    fn serving_agent_refuses_unassigned_room() {
        let validator = ServingAgentValidator;
        let principal = Principal::new(UserId::new("agent-5"));

        // Room has no served_by — no evidence either way.
        assert!(!validator
            .validate(&make_room(), Some(&principal), None)
            .unwrap());
        assert!(!validator.validate(&make_room(), None, None).unwrap());
    }

    // ── DepartmentAgentValidator ─────────────────────────────────────────────

    #[test]
    fn department_agent_grants_member_with_permission() {
        let validator = DepartmentAgentValidator;
        let mut room = make_room();
        room.department_id = Some(DepartmentId::new("support"));

        let mut principal = Principal::with_permissions(
            UserId::new("agent-2"),
            [Permission::new(VIEW_DEPARTMENT_ROOMS)],
        );
        principal.departments.push(DepartmentId::new("support"));

        assert!(validator.validate(&room, Some(&principal), None).unwrap());
    }

    #[test]
    fn department_agent_refuses_non_member() {
        let validator = DepartmentAgentValidator;
        let mut room = make_room();
        room.department_id = Some(DepartmentId::new("support"));

        let mut principal = Principal::with_permissions(
            UserId::new("agent-2"),
            [Permission::new(VIEW_DEPARTMENT_ROOMS)],
        );
        principal.departments.push(DepartmentId::new("sales"));

        assert!(!validator.validate(&room, Some(&principal), None).unwrap());
    }

    #[test]
    fn department_agent_requires_permission_even_for_members() {
        let validator = DepartmentAgentValidator;
        let mut room = make_room();
        room.department_id = Some(DepartmentId::new("support"));

        let mut principal = Principal::new(UserId::new("agent-2"));
        principal.departments.push(DepartmentId::new("support"));

        assert!(!validator.validate(&room, Some(&principal), None).unwrap());
    }

    #[test]
    fn department_agent_refuses_room_without_department() {
        let validator = DepartmentAgentValidator;
        let mut principal = Principal::with_permissions(
            UserId::new("agent-2"),
            [Permission::new(VIEW_DEPARTMENT_ROOMS)],
        );
        principal.departments.push(DepartmentId::new("support"));

        assert!(!validator
            .validate(&make_room(), Some(&principal), None)
            .unwrap());
    }

    // ── VisitorTokenValidator ────────────────────────────────────────────────

    #[test]
    fn visitor_token_grants_on_matching_token() {
        let validator = VisitorTokenValidator;
        let context = AccessContext::with_visitor_token("tok-visitor");

        assert!(validator
            .validate(&make_room(), None, Some(&context))
            .unwrap());
    }

    #[test]
    fn visitor_token_refuses_mismatched_token() {
        let validator = VisitorTokenValidator;
        let context = AccessContext::with_visitor_token("tok-someone-else");

        assert!(!validator
            .validate(&make_room(), None, Some(&context))
            .unwrap());
    }

    #[test]
    fn visitor_token_treats_missing_context_as_no_evidence() {
        let validator = VisitorTokenValidator;

        assert!(!validator.validate(&make_room(), None, None).unwrap());

        // Context present but without a token is still no evidence.
        let context = AccessContext::default();
        assert!(!validator
            .validate(&make_room(), None, Some(&context))
            .unwrap());
    }

    #[test]
    fn visitor_token_ignores_principal() {
        let validator = VisitorTokenValidator;
        let principal =
            Principal::with_permissions(UserId::new("mgr-1"), [Permission::new(VIEW_ROOMS)]);
        let context = AccessContext::with_visitor_token("tok-visitor");

        // The principal carries no weight on this path; only the token does.
        assert!(validator
            .validate(&make_room(), Some(&principal), Some(&context))
            .unwrap());
    }
}
