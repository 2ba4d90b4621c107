//! # roomward-contracts
//!
//! Shared types and contracts for the roomward room-access authorization
//! core.
//!
//! All crates in the workspace import from here. No business logic lives
//! in this crate — only data definitions and error types.

pub mod context;
pub mod error;
pub mod principal;
pub mod room;
