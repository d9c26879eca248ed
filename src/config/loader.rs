//! Configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading leave policy
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    EntitlementsConfig, EntitlementsFile, LeaveType, LeaveTypesConfig, PolicyConfig,
    PolicyMetadata, RosterConfig,
};

/// Loads and provides access to a leave policy configuration.
///
/// The `PolicyLoader` reads YAML configuration files from a directory
/// and provides methods to query leave types, entitlement tiers, and the
/// employee roster.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/acme/
/// ├── policy.yaml        # Company policy metadata
/// ├── leave_types.yaml   # Leave type catalogue
/// ├── entitlements.yaml  # Entitlement tiers by years of service
/// └── roster.yaml        # Departments, employees, opening balances
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/acme").unwrap();
///
/// // Get a leave type
/// let leave_type = loader.get_leave_type("vacation").unwrap();
/// println!("Leave type: {}", leave_type.name);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    config: PolicyConfig,
}

impl PolicyLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/acme")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::PolicyLoader;
    ///
    /// let loader = PolicyLoader::load("./config/acme")?;
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load policy.yaml
        let policy_path = path.join("policy.yaml");
        let metadata = Self::load_yaml::<PolicyMetadata>(&policy_path)?;

        // Load leave_types.yaml
        let leave_types_path = path.join("leave_types.yaml");
        let leave_types_config = Self::load_yaml::<LeaveTypesConfig>(&leave_types_path)?;

        // Load entitlements.yaml
        let entitlements_path = path.join("entitlements.yaml");
        let entitlements_file = Self::load_yaml::<EntitlementsFile>(&entitlements_path)?;

        // Load roster.yaml
        let roster_path = path.join("roster.yaml");
        let roster = Self::load_yaml::<RosterConfig>(&roster_path)?;

        let config = PolicyConfig::new(
            metadata,
            leave_types_config.leave_types,
            EntitlementsConfig::new(entitlements_file.tiers),
            roster,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        self.config.policy()
    }

    /// Gets a leave type by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The leave type code (e.g., "vacation")
    ///
    /// # Returns
    ///
    /// Returns the leave type if found, or `LeaveTypeNotFound` error.
    pub fn get_leave_type(&self, code: &str) -> EngineResult<&LeaveType> {
        self.config
            .leave_types()
            .get(code)
            .ok_or_else(|| EngineError::LeaveTypeNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the entitlement tiers.
    pub fn entitlements(&self) -> &EntitlementsConfig {
        self.config.entitlements()
    }

    /// Returns the employee roster.
    pub fn roster(&self) -> &RosterConfig {
        self.config.roster()
    }
}
