//! Error types for the leave request engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading policy configuration
//! or processing leave requests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::models::RequestStatus;

/// The main error type for the leave request engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Leave type code was not found in the policy configuration.
    #[error("Leave type not found: {code}")]
    LeaveTypeNotFound {
        /// The leave type code that was not found.
        code: String,
    },

    /// No entitlement tier covers the given years of service.
    #[error("No entitlement tier covers {years} completed years of service")]
    EntitlementNotFound {
        /// The completed years of service for which no tier was found.
        years: u32,
    },

    /// Employee was not found in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee identifier that was not found.
        id: String,
    },

    /// No leave balance is recorded for an employee.
    #[error("No leave balance recorded for employee: {employee_id}")]
    BalanceNotFound {
        /// The employee identifier with no recorded balance.
        employee_id: String,
    },

    /// A draft was submitted with a required field still unset.
    #[error("Draft is incomplete: missing {field}")]
    IncompleteDraft {
        /// The field that was not set.
        field: String,
    },

    /// A date range produced zero chargeable days.
    ///
    /// An inverted range and a range consisting only of Sundays both land
    /// here; the day count itself never errors, it reports zero and the
    /// submission layer rejects the zero.
    #[error("Date range {start} to {end} contains no chargeable days")]
    EmptyRange {
        /// The start of the rejected range.
        start: NaiveDate,
        /// The end of the rejected range.
        end: NaiveDate,
    },

    /// Requested days exceed the employee's available balance.
    #[error("Requested {requested} days but only {available} are available")]
    InsufficientBalance {
        /// The number of days requested.
        requested: Decimal,
        /// The number of days available.
        available: Decimal,
    },

    /// A persisted leave request was not found.
    #[error("Leave request not found: {id}")]
    RequestNotFound {
        /// The request identifier that was not found.
        id: Uuid,
    },

    /// A decision was attempted on a request that is no longer pending.
    #[error("Leave request {id} has already been decided: {status}")]
    RequestNotPending {
        /// The request identifier.
        id: Uuid,
        /// The status the request already carries.
        status: RequestStatus,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
