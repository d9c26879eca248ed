//! Application state for the Leave Request Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::PolicyLoader;
use crate::store::LeaveStore;

/// Shared application state.
///
/// The policy is read-only after startup and shared behind an `Arc`; the
/// store is the single mutable owner of balances and requests, behind a
/// `RwLock` so balance reads do not block each other.
#[derive(Clone)]
pub struct AppState {
    /// The loaded policy configuration.
    policy: Arc<PolicyLoader>,
    /// The leave store seeded from the policy's roster.
    store: Arc<RwLock<LeaveStore>>,
}

impl AppState {
    /// Creates a new application state with the given policy loader,
    /// seeding the store from its roster.
    pub fn new(policy: PolicyLoader) -> Self {
        let store = LeaveStore::from_roster(policy.roster());
        Self {
            policy: Arc::new(policy),
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Returns a reference to the policy loader.
    pub fn policy(&self) -> &PolicyLoader {
        &self.policy
    }

    /// Returns the leave store lock.
    pub fn store(&self) -> &RwLock<LeaveStore> {
        &self.store
    }
}
