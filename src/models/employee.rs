//! Employee model.
//!
//! This module defines the Employee struct used for tenure calculations,
//! balance lookups, and the cascading selection filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an employee in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full display name.
    pub full_name: String,
    /// The department the employee belongs to, if assigned.
    #[serde(default)]
    pub department_id: Option<String>,
    /// The date from which years of service and entitlement are computed.
    ///
    /// An administrative cycle closure may reset this to a later date than
    /// the original hire date.
    pub tenure_start: NaiveDate,
    /// Whether the employee manages one or more departments.
    #[serde(default)]
    pub is_manager: bool,
}

impl Employee {
    /// Returns true if the employee is assigned to the given department.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     full_name: "Alicia Fuentes".to_string(),
    ///     department_id: Some("dept_eng".to_string()),
    ///     tenure_start: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
    ///     is_manager: false,
    /// };
    /// assert!(employee.belongs_to("dept_eng"));
    /// assert!(!employee.belongs_to("dept_fin"));
    /// ```
    pub fn belongs_to(&self, department_id: &str) -> bool {
        self.department_id.as_deref() == Some(department_id)
    }
}
