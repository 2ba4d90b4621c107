//! # roomward-validators
//!
//! Built-in livechat room access validators and the TOML-driven
//! composition step that assembles them into an ordered
//! [`AccessValidatorRegistry`](roomward_core::AccessValidatorRegistry).
//!
//! ## Overview
//!
//! Four validators cover the original deployment's access paths:
//!
//! - `manager-permission` — holder of `view-livechat-rooms` sees any room
//! - `serving-agent`      — the agent assigned to the room
//! - `department-agent`   — department member with the department permission
//! - `visitor-token`      — the room's own guest, identified by session token
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use roomward_validators::RegistryConfig;
//!
//! let registry = RegistryConfig::all_builtin().build()?;
//! let granted = registry.can_access_room(&room, Some(&principal), None)?;
//! ```
//!
//! ## Ordering
//!
//! The registry grants on the first affirmative validator, so the order
//! in `RegistryConfig::validators` is load-bearing deployment policy.

pub mod builtin;
pub mod config;

pub use builtin::{
    DepartmentAgentValidator, ManagerPermissionValidator, ServingAgentValidator,
    VisitorTokenValidator,
};
pub use config::RegistryConfig;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use roomward_contracts::{
        context::AccessContext,
        error::RoomwardError,
        principal::{Permission, Principal, UserId},
        room::{Room, RoomId, Visitor},
    };

    use crate::builtin::VIEW_ROOMS;
    use crate::RegistryConfig;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn make_room() -> Room {
        Room::open_for_visitor(RoomId::new("room-42"), Visitor::new("tok-guest"))
    }

    // ── Composition ───────────────────────────────────────────────────────────

    /// Declaration order in the TOML is preserved as evaluation order.
    #[test]
    fn test_config_preserves_declared_order() {
        let toml = r#"
            validators = ["visitor-token", "manager-permission"]
        "#;

        let registry = RegistryConfig::from_toml_str(toml).unwrap().build().unwrap();

        let names: Vec<&str> = registry.validator_names().collect();
        assert_eq!(names, vec!["visitor-token", "manager-permission"]);
    }

    /// Every built-in validator is buildable from the canonical config.
    #[test]
    fn test_all_builtin_builds() {
        let registry = RegistryConfig::all_builtin().build().unwrap();
        assert_eq!(registry.len(), 4);
    }

    /// An unknown name in the config must fail composition, not silently
    /// skip the entry.
    #[test]
    fn test_unknown_validator_rejected() {
        let toml = r#"
            validators = ["manager-permission", "no-such-validator"]
        "#;

        let result = RegistryConfig::from_toml_str(toml).unwrap().build();

        match result {
            Err(RoomwardError::UnknownValidator { name }) => {
                assert_eq!(name, "no-such-validator");
            }
            other => panic!("expected UnknownValidator, got {:?}", other),
        }
    }

    /// Malformed TOML must produce a `RoomwardError::ConfigError`.
    #[test]
    fn test_toml_parse_error() {
        let bad_toml = r#"
            this is not valid toml ][[[
        "#;

        let result = RegistryConfig::from_toml_str(bad_toml);

        match result {
            Err(RoomwardError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse registry TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// An empty validator list is a valid (deny-everything) composition.
    #[test]
    fn test_empty_config_denies_everything() {
        let toml = r#"
            validators = []
        "#;

        let registry = RegistryConfig::from_toml_str(toml).unwrap().build().unwrap();
        assert!(registry.is_empty());
        assert!(!registry.can_access_room(&make_room(), None, None).unwrap());
    }

    // ── End-to-end access paths ───────────────────────────────────────────────

    /// The full built-in composition grants each access path on its own
    /// evidence and denies when no evidence is presented.
    #[test]
    fn test_builtin_composition_access_paths() {
        let registry = RegistryConfig::all_builtin().build().unwrap();

        let mut room = make_room();
        room.served_by = Some(UserId::new("agent-serving"));

        // Manager path: global permission, no assignment needed.
        let manager =
            Principal::with_permissions(UserId::new("mgr"), [Permission::new(VIEW_ROOMS)]);
        assert!(registry.can_access_room(&room, Some(&manager), None).unwrap());

        // Serving-agent path: no permissions, but assigned to the room.
        let agent = Principal::new(UserId::new("agent-serving"));
        assert!(registry.can_access_room(&room, Some(&agent), None).unwrap());

        // Visitor path: anonymous, correct session token in the context.
        let context = AccessContext::with_visitor_token("tok-guest");
        assert!(registry.can_access_room(&room, None, Some(&context)).unwrap());

        // No evidence at all: default deny.
        let stranger = Principal::new(UserId::new("stranger"));
        assert!(!registry.can_access_room(&room, Some(&stranger), None).unwrap());
        assert!(!registry.can_access_room(&room, None, None).unwrap());
    }
}
