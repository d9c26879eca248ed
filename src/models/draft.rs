//! Leave request draft models.
//!
//! A draft is the in-progress, unpersisted leave request held in interaction
//! state while the user is still editing. It is converted into a
//! [`LeaveSubmission`] once validated, and only becomes a persisted
//! [`crate::models::LeaveRequest`] on the server side.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An in-progress leave request with all fields filled in.
///
/// Invariants expected by the submission layer (the draft itself does not
/// enforce them):
/// - if `half_day` is true, `end_date` is expected to equal `start_date`
///   and the chargeable count is exactly 0.5;
/// - otherwise `end_date >= start_date`, or the computed count is 0 and the
///   draft is not submittable.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveRequestDraft;
/// use chrono::NaiveDate;
///
/// let draft = LeaveRequestDraft {
///     employee_id: "emp_001".to_string(),
///     leave_type: "vacation".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///     half_day: false,
///     note: "Family trip".to_string(),
/// };
/// assert_eq!(draft.leave_type, "vacation");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequestDraft {
    /// The employee the request is for.
    pub employee_id: String,
    /// The leave type code (must exist in the policy catalogue).
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

/// A validated draft together with its computed chargeable-day count.
///
/// Produced by the submission layer once a draft has passed validation; the
/// count is carried along so the server does not have to trust a
/// client-computed figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveSubmission {
    /// The validated draft.
    pub draft: LeaveRequestDraft,
    /// The number of chargeable days the draft spans.
    pub requested_days: Decimal,
}
