//! Policy configuration for the Leave Request Engine.
//!
//! This module provides functionality for loading leave policy
//! configuration from YAML files: company policy metadata, the leave type
//! catalogue, entitlement tiers, and the employee roster.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    EntitlementTier, EntitlementsConfig, LeaveType, PolicyConfig, PolicyMetadata, RosterConfig,
};
