//! Request types for the Leave Request Engine API.
//!
//! This module defines the JSON request structures for the submission and
//! decision endpoints. The employee identity travels in the request body,
//! never in an ambient default attached to the connection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::LeaveRequestDraft;

/// Request body for the `POST /leave-requests` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLeaveRequest {
    /// The employee the request is for.
    pub employee_id: String,
    /// The leave type code from the policy catalogue.
    pub leave_type: String,
    /// The first day of the requested leave.
    pub start_date: NaiveDate,
    /// The last day of the requested leave (inclusive).
    pub end_date: NaiveDate,
    /// Whether only half of the start day is requested.
    #[serde(default)]
    pub half_day: bool,
    /// Free-form note shown to the approver.
    #[serde(default)]
    pub note: String,
}

/// The decision taken on a pending leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Approve the request; the held days stay deducted.
    Approve,
    /// Reject the request; any held days are refunded.
    Reject,
}

/// Request body for the `POST /leave-requests/{id}/decision` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// The decision to apply.
    pub decision: Decision,
}

impl From<SubmitLeaveRequest> for LeaveRequestDraft {
    fn from(req: SubmitLeaveRequest) -> Self {
        LeaveRequestDraft {
            employee_id: req.employee_id,
            leave_type: req.leave_type,
            start_date: req.start_date,
            end_date: req.end_date,
            half_day: req.half_day,
            note: req.note,
        }
    }
}
