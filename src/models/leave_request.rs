//! Persisted leave request model.
//!
//! Once a submission is accepted, the engine owns the canonical record;
//! clients re-fetch it rather than keeping an authoritative copy.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The lifecycle status of a persisted leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Submitted and awaiting a decision. Its days are already held
    /// against the balance.
    Pending,
    /// Approved by a manager.
    Approved,
    /// Rejected by a manager; any held days have been refunded.
    Rejected,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A persisted leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier assigned at submission.
    pub id: Uuid,
    /// The employee the request belongs to.
    pub employee_id: String,
    /// The leave type code the request was submitted under.
    pub leave_type: String,
    /// The first day of the leave.
    pub start_date: NaiveDate,
    /// The last day of the leave (inclusive).
    pub end_date: NaiveDate,
    /// Whether only half of the start day was requested.
    pub half_day: bool,
    /// Free-form note from the requester.
    pub note: String,
    /// The chargeable-day count computed at submission time.
    pub requested_days: Decimal,
    /// Whether the requested days were deducted from the balance.
    pub charges_balance: bool,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// When the request was submitted.
    pub submitted_at: DateTime<Utc>,
}
