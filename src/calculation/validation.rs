//! Submission validation.
//!
//! The day count itself never errors: an inverted range reports zero.
//! Turning that zero into a rejection is the submission layer's policy,
//! implemented here so the calculator stays a pure function.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::LeaveRequestDraft;

use super::chargeable_days::count_chargeable_days;

/// Recomputes the chargeable-day count for a draft and rejects zero.
///
/// The count is recomputed server-side rather than trusted from the
/// client. A zero count (inverted range, or a range consisting only of
/// Sundays) is rejected as [`EngineError::EmptyRange`].
///
/// # Example
///
/// ```
/// use leave_engine::calculation::validate_submission;
/// use leave_engine::models::LeaveRequestDraft;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let draft = LeaveRequestDraft {
///     employee_id: "emp_001".to_string(),
///     leave_type: "vacation".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///     half_day: false,
///     note: String::new(),
/// };
/// assert_eq!(validate_submission(&draft).unwrap(), Decimal::from(5));
/// ```
pub fn validate_submission(draft: &LeaveRequestDraft) -> EngineResult<Decimal> {
    let days = count_chargeable_days(draft.start_date, draft.end_date, draft.half_day);
    if days == Decimal::ZERO {
        return Err(EngineError::EmptyRange {
            start: draft.start_date,
            end: draft.end_date,
        });
    }
    Ok(days)
}
