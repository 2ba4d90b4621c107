//! # roomward-core
//!
//! The first-match-wins room access decision core.
//!
//! This crate provides:
//! - The two core traits (`RoomAccessValidator`, `RoomAuthorization`)
//! - The `AccessValidatorRegistry` that evaluates an ordered validator
//!   list strictly in registration order, granting on the first `true`
//!   and denying by default when no validator grants
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roomward_core::{AccessValidatorRegistry, traits::RoomAuthorization};
//!
//! let registry = AccessValidatorRegistry::new(validators);
//! let granted = registry.can_access_room(&room, Some(&principal), None)?;
//! ```

pub mod registry;
pub mod traits;

pub use registry::AccessValidatorRegistry;
pub use traits::{RoomAccessValidator, RoomAuthorization};
