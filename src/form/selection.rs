//! The cascading manager → department → employee selection filter.
//!
//! Each level is a pure set-membership filter over a parent reference:
//! picking a manager restricts the selectable departments, picking a
//! department restricts the selectable employees. A dependent selection
//! that falls outside the restricted set is cleared, applied top-down on
//! every upstream change.

use crate::models::{Department, Employee};

/// Returns the departments managed by the given manager.
pub fn departments_of_manager<'a>(
    departments: &'a [Department],
    manager_id: &str,
) -> Vec<&'a Department> {
    departments
        .iter()
        .filter(|department| department.manager_id == manager_id)
        .collect()
}

/// Returns the employees assigned to the given department.
pub fn employees_of_department<'a>(
    employees: &'a [Employee],
    department_id: &str,
) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| employee.belongs_to(department_id))
        .collect()
}

/// The three selection values of the cascading filter.
///
/// Selecting upstream clears any dependent selection that is no longer in
/// the restricted set. Clearing a selection to `None` lifts the
/// restriction and leaves downstream choices untouched.
///
/// # Example
///
/// ```
/// use leave_engine::form::CascadingSelection;
/// use leave_engine::models::Department;
///
/// let departments = vec![Department {
///     id: "dept_eng".to_string(),
///     name: "Engineering".to_string(),
///     manager_id: "emp_010".to_string(),
/// }];
///
/// let mut selection = CascadingSelection::new();
/// selection.select_manager(Some("emp_010".to_string()), &departments);
/// selection.select_department(Some("dept_eng".to_string()), &[]);
/// assert_eq!(selection.department_id(), Some("dept_eng"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadingSelection {
    manager_id: Option<String>,
    department_id: Option<String>,
    employee_id: Option<String>,
}

impl CascadingSelection {
    /// Creates a selection with nothing picked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a manager, clearing a department selection that the new
    /// manager does not cover.
    ///
    /// A department cleared this way takes the employee selection with it:
    /// the employee was chosen under a filter that no longer exists.
    pub fn select_manager(&mut self, manager_id: Option<String>, departments: &[Department]) {
        self.manager_id = manager_id;

        if let (Some(manager), Some(department)) = (&self.manager_id, &self.department_id) {
            let allowed = departments_of_manager(departments, manager);
            if !allowed.iter().any(|d| &d.id == department) {
                self.department_id = None;
                self.employee_id = None;
            }
        }
    }

    /// Selects a department, clearing an employee selection outside it.
    pub fn select_department(&mut self, department_id: Option<String>, employees: &[Employee]) {
        self.department_id = department_id;

        if let (Some(department), Some(employee)) = (&self.department_id, &self.employee_id) {
            let allowed = employees_of_department(employees, department);
            if !allowed.iter().any(|e| &e.id == employee) {
                self.employee_id = None;
            }
        }
    }

    /// Selects an employee.
    pub fn select_employee(&mut self, employee_id: Option<String>) {
        self.employee_id = employee_id;
    }

    /// The selected manager, if any.
    pub fn manager_id(&self) -> Option<&str> {
        self.manager_id.as_deref()
    }

    /// The selected department, if any.
    pub fn department_id(&self) -> Option<&str> {
        self.department_id.as_deref()
    }

    /// The selected employee, if any.
    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }
}
