//! TOML-driven registry composition.
//!
//! The validator list is process-wide policy fixed at startup. Rather
//! than assembling it through module-level globals, composition is an
//! explicit step: a `RegistryConfig` is loaded from TOML, `build()` maps
//! each declared name to its built-in validator, and the resulting
//! `AccessValidatorRegistry` is injected into whatever exposes it.
//!
//! Declaration order in the config IS evaluation order — a broad
//! validator listed first shadows everything after it, so ordering is a
//! deployment decision made in the config file, not in code.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use roomward_contracts::error::{RoomwardError, RoomwardResult};
use roomward_core::{registry::AccessValidatorRegistry, traits::RoomAccessValidator};

use crate::builtin::{
    DepartmentAgentValidator, ManagerPermissionValidator, ServingAgentValidator,
    VisitorTokenValidator,
};

/// The top-level structure deserialized from a TOML registry file.
///
/// Example:
/// ```toml
/// validators = [
///     "manager-permission",
///     "serving-agent",
///     "department-agent",
///     "visitor-token",
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Validator names in evaluation order. First affirmative wins.
    pub validators: Vec<String>,
}

impl RegistryConfig {
    /// Parse `s` as TOML and build a `RegistryConfig`.
    ///
    /// Returns `RoomwardError::ConfigError` if the TOML is malformed or
    /// does not match the expected schema.
    pub fn from_toml_str(s: &str) -> RoomwardResult<Self> {
        toml::from_str(s).map_err(|e| RoomwardError::ConfigError {
            reason: format!("failed to parse registry TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as TOML registry configuration.
    pub fn from_file(path: &Path) -> RoomwardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RoomwardError::ConfigError {
            reason: format!("failed to read registry file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// A configuration listing every built-in validator in the order the
    /// original deployment composed them.
    pub fn all_builtin() -> Self {
        Self {
            validators: vec![
                ManagerPermissionValidator.name().to_string(),
                ServingAgentValidator.name().to_string(),
                DepartmentAgentValidator.name().to_string(),
                VisitorTokenValidator.name().to_string(),
            ],
        }
    }

    /// Assemble the configured registry, preserving declaration order.
    ///
    /// Returns `RoomwardError::UnknownValidator` for any name that does not
    /// correspond to a built-in validator.
    pub fn build(&self) -> RoomwardResult<AccessValidatorRegistry> {
        let mut validators: Vec<Box<dyn RoomAccessValidator>> =
            Vec::with_capacity(self.validators.len());

        for name in &self.validators {
            let validator: Box<dyn RoomAccessValidator> = match name.as_str() {
                "manager-permission" => Box::new(ManagerPermissionValidator),
                "serving-agent" => Box::new(ServingAgentValidator),
                "department-agent" => Box::new(DepartmentAgentValidator),
                "visitor-token" => Box::new(VisitorTokenValidator),
                unknown => {
                    return Err(RoomwardError::UnknownValidator {
                        name: unknown.to_string(),
                    })
                }
            };
            validators.push(validator);
        }

        debug!(
            validators = ?self.validators,
            "assembled access validator registry"
        );

        Ok(AccessValidatorRegistry::new(validators))
    }
}
