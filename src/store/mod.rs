//! In-memory leave store.
//!
//! The store owns the canonical state the API serves: the roster,
//! per-employee balances, and persisted leave requests. Submissions are
//! re-validated against the balance here, server-side, regardless of what
//! the submitting client computed.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::config::RosterConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Department, Employee, LeaveBalance, LeaveRequest, LeaveSubmission, RequestStatus,
};

/// Holds employees, departments, balances, and persisted requests.
///
/// Seeded from the roster configuration at startup. Requests are kept in
/// submission order; listings return them newest first.
#[derive(Debug, Clone)]
pub struct LeaveStore {
    employees: HashMap<String, Employee>,
    departments: Vec<Department>,
    balances: HashMap<String, LeaveBalance>,
    requests: Vec<LeaveRequest>,
}

impl LeaveStore {
    /// Creates a store seeded from the roster configuration.
    pub fn from_roster(roster: &RosterConfig) -> Self {
        let employees = roster
            .employees
            .iter()
            .map(|employee| (employee.id.clone(), employee.clone()))
            .collect();
        let balances = roster
            .opening_balances
            .iter()
            .map(|balance| (balance.employee_id.clone(), balance.clone()))
            .collect();

        Self {
            employees,
            departments: roster.departments.clone(),
            balances,
            requests: Vec::new(),
        }
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: &str) -> EngineResult<&Employee> {
        self.employees
            .get(id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Returns all departments.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Looks up the leave balance for an employee.
    pub fn balance(&self, employee_id: &str) -> EngineResult<&LeaveBalance> {
        self.balances
            .get(employee_id)
            .ok_or_else(|| EngineError::BalanceNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Persists a validated submission as a pending request.
    ///
    /// When the leave type charges the balance, the requested days are
    /// checked against and deducted from the available balance here; a
    /// pending request holds its days until it is decided.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmployeeNotFound`] for an unknown employee,
    /// [`EngineError::BalanceNotFound`] when a charging submission has no
    /// recorded balance, and [`EngineError::InsufficientBalance`] when the
    /// requested days exceed the available days.
    pub fn submit(
        &mut self,
        submission: LeaveSubmission,
        charges_balance: bool,
    ) -> EngineResult<LeaveRequest> {
        let employee_id = submission.draft.employee_id.clone();
        self.employee(&employee_id)?;

        if charges_balance {
            let balance = self.balances.get_mut(&employee_id).ok_or_else(|| {
                EngineError::BalanceNotFound {
                    employee_id: employee_id.clone(),
                }
            })?;

            if submission.requested_days > balance.available_days {
                return Err(EngineError::InsufficientBalance {
                    requested: submission.requested_days,
                    available: balance.available_days,
                });
            }
            balance.available_days -= submission.requested_days;
        }

        let request = LeaveRequest {
            id: Uuid::new_v4(),
            employee_id,
            leave_type: submission.draft.leave_type,
            start_date: submission.draft.start_date,
            end_date: submission.draft.end_date,
            half_day: submission.draft.half_day,
            note: submission.draft.note,
            requested_days: submission.requested_days,
            charges_balance,
            status: RequestStatus::Pending,
            submitted_at: Utc::now(),
        };

        self.requests.push(request.clone());
        Ok(request)
    }

    /// Returns an employee's requests, newest first.
    pub fn requests_for(&self, employee_id: &str) -> Vec<&LeaveRequest> {
        self.requests
            .iter()
            .rev()
            .filter(|request| request.employee_id == employee_id)
            .collect()
    }

    /// Approves or rejects a pending request.
    ///
    /// Rejecting a request that charged the balance refunds its days;
    /// approval only changes the status, the days were already deducted
    /// at submission.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RequestNotFound`] for an unknown id and
    /// [`EngineError::RequestNotPending`] when the request has already
    /// been decided.
    pub fn decide(&mut self, id: Uuid, approve: bool) -> EngineResult<LeaveRequest> {
        let request = self
            .requests
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or(EngineError::RequestNotFound { id })?;

        if request.status != RequestStatus::Pending {
            return Err(EngineError::RequestNotPending {
                id,
                status: request.status,
            });
        }

        request.status = if approve {
            RequestStatus::Approved
        } else {
            RequestStatus::Rejected
        };

        let request = request.clone();
        if !approve && request.charges_balance {
            if let Some(balance) = self.balances.get_mut(&request.employee_id) {
                balance.available_days += request.requested_days;
            }
        }

        Ok(request)
    }
}
