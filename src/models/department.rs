//! Department model.

use serde::{Deserialize, Serialize};

/// Represents a department managed by a single manager.
///
/// The `manager_id` reference drives the cascading selection filter:
/// picking a manager restricts the selectable departments to the ones
/// whose `manager_id` matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: String,
    /// The human-readable department name.
    pub name: String,
    /// The employee id of the department's manager.
    pub manager_id: String,
}
