//! Leave balance models.
//!
//! [`LeaveBalance`] is the stored per-employee balance; [`BalanceSummary`]
//! is the read model served to clients, with the tenure-derived display
//! fields filled in.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The stored leave balance for one employee.
///
/// `available_days` is the authoritative figure requests are validated
/// against; it decreases when a charging submission is accepted and is
/// refunded when a pending request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The employee this balance belongs to.
    pub employee_id: String,
    /// Days currently available to request.
    pub available_days: Decimal,
    /// Start of the current accrual period.
    pub period_start: NaiveDate,
    /// Days carried over from previous periods.
    #[serde(default)]
    pub carried_over_days: Decimal,
}

/// The balance summary served to clients.
///
/// Combines the stored balance with tenure context computed at read time:
/// the years-worked display string and the annual entitlement for the
/// employee's completed years of service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// The employee this summary describes.
    pub employee_id: String,
    /// Days currently available to request.
    pub available_days: Decimal,
    /// Start of the current accrual period.
    pub period_start: NaiveDate,
    /// The date tenure is currently computed from.
    pub tenure_start: NaiveDate,
    /// Human-readable years of service, e.g. `"3 years, 4 months"`.
    pub years_worked: String,
    /// Annual entitlement in days for the completed years of service.
    pub entitled_days: Decimal,
    /// Days carried over from previous periods.
    pub carried_over_days: Decimal,
}
