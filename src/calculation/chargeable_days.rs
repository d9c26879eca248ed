//! Chargeable-day count for a requested date range.
//!
//! This module implements the accrual calculation at the center of the
//! engine: converting a calendar interval plus a half-day flag into the
//! number of days charged against a leave balance.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::day_detection::is_chargeable;

/// Counts the chargeable days for a requested leave range.
///
/// The range is inclusive on both ends and every day counts except
/// Sundays. Saturdays are full chargeable days.
///
/// # Arguments
///
/// * `start_date` - The first day of the requested leave
/// * `end_date` - The last day of the requested leave (inclusive)
/// * `half_day` - Whether only half of the start day is requested
///
/// # Returns
///
/// - Exactly `0.5` when `half_day` is true, regardless of `end_date`. The
///   function does not check that the dates agree; the form layer forces
///   `end_date = start_date` when the flag is toggled on, and a later start
///   date edit is allowed to leave them out of sync (last write wins).
/// - `0` when `end_date` is strictly before `start_date`. An invalid range
///   is signalled by the zero count, never by an error; rejecting zero is
///   the submission layer's policy.
/// - Otherwise the non-negative integer count of non-Sunday days in the
///   range.
///
/// The function is pure: no side effects, and identical inputs always
/// produce identical output.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::count_chargeable_days;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Monday 2024-01-01 through Sunday 2024-01-07: the Sunday is excluded
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(count_chargeable_days(start, end, false), Decimal::from(6));
///
/// // Half-day requests always charge half a day
/// assert_eq!(count_chargeable_days(start, start, true), Decimal::new(5, 1));
/// ```
pub fn count_chargeable_days(start_date: NaiveDate, end_date: NaiveDate, half_day: bool) -> Decimal {
    if half_day {
        return Decimal::new(5, 1);
    }

    if end_date < start_date {
        return Decimal::ZERO;
    }

    let days = start_date
        .iter_days()
        .take_while(|day| *day <= end_date)
        .filter(|day| is_chargeable(*day))
        .count();

    Decimal::from(days as u64)
}
