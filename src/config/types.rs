//! Configuration types for the leave policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{Department, Employee, LeaveBalance};

/// Metadata about the company leave policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The company the policy belongs to.
    pub company: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// The start of the current leave cycle.
    pub cycle_start: NaiveDate,
}

/// A leave type in the catalogue.
///
/// Only leave types with `charges_balance` set deduct their day count from
/// the employee's balance; permits and unpaid leave are recorded without
/// touching it.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveType {
    /// The human-readable name of the leave type.
    pub name: String,
    /// Whether days of this type are paid.
    pub paid: bool,
    /// Whether requested days are deducted from the leave balance.
    pub charges_balance: bool,
}

/// Leave types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypesConfig {
    /// Map of leave type code to leave type details.
    pub leave_types: HashMap<String, LeaveType>,
}

/// One entitlement tier: the annual days granted from a minimum number of
/// completed years of service.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementTier {
    /// The completed years of service from which this tier applies.
    pub min_years: u32,
    /// The annual entitlement in days.
    pub days: Decimal,
}

/// Entitlements configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementsFile {
    /// Entitlement tiers in file order.
    pub tiers: Vec<EntitlementTier>,
}

/// Entitlement tiers, sorted ascending by `min_years`.
///
/// The sort happens on construction so tier resolution can rely on the
/// last matching tier being the effective one.
#[derive(Debug, Clone)]
pub struct EntitlementsConfig {
    tiers: Vec<EntitlementTier>,
}

impl EntitlementsConfig {
    /// Creates a new EntitlementsConfig, sorting the tiers.
    pub fn new(tiers: Vec<EntitlementTier>) -> Self {
        let mut sorted_tiers = tiers;
        sorted_tiers.sort_by_key(|tier| tier.min_years);
        Self {
            tiers: sorted_tiers,
        }
    }

    /// Returns the tiers, sorted ascending by `min_years`.
    pub fn tiers(&self) -> &[EntitlementTier] {
        &self.tiers
    }
}

/// The employee roster configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// All departments.
    pub departments: Vec<Department>,
    /// All employees.
    pub employees: Vec<Employee>,
    /// Opening leave balances for the current cycle.
    pub opening_balances: Vec<LeaveBalance>,
}

/// The complete leave policy configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a policy configuration directory.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Policy metadata.
    metadata: PolicyMetadata,
    /// Leave types available under this policy.
    leave_types: HashMap<String, LeaveType>,
    /// Entitlement tiers.
    entitlements: EntitlementsConfig,
    /// The employee roster.
    roster: RosterConfig,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(
        metadata: PolicyMetadata,
        leave_types: HashMap<String, LeaveType>,
        entitlements: EntitlementsConfig,
        roster: RosterConfig,
    ) -> Self {
        Self {
            metadata,
            leave_types,
            entitlements,
            roster,
        }
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns all leave types.
    pub fn leave_types(&self) -> &HashMap<String, LeaveType> {
        &self.leave_types
    }

    /// Returns the entitlement tiers.
    pub fn entitlements(&self) -> &EntitlementsConfig {
        &self.entitlements
    }

    /// Returns the employee roster.
    pub fn roster(&self) -> &RosterConfig {
        &self.roster
    }
}
