//! Day classification logic.
//!
//! This module provides utilities for determining the day type (weekday,
//! Saturday, Sunday) for any calendar date and for deciding whether a day
//! is chargeable against a leave balance. Under the leave policy every
//! calendar day is chargeable except Sundays; Saturdays count in full.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for chargeability decisions.
///
/// Saturday is kept distinct from ordinary weekdays even though both are
/// chargeable: reports and approval screens display the split.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday - chargeable.
    Weekday,
    /// Saturday - a full chargeable day under the leave policy.
    Saturday,
    /// Sunday - never charged against a leave balance.
    Sunday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given calendar date.
///
/// # Arguments
///
/// * `date` - The date to classify
///
/// # Returns
///
/// The [`DayType`] for the given date:
/// - [`DayType::Weekday`] for Monday through Friday
/// - [`DayType::Saturday`] for Saturday
/// - [`DayType::Sunday`] for Sunday
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2024-01-06 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
/// assert_eq!(day_type(saturday), DayType::Saturday);
///
/// // 2024-01-07 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(day_type(sunday), DayType::Sunday);
///
/// // 2024-01-01 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(day_type(monday), DayType::Weekday);
/// ```
pub fn day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns whether a day is charged against a leave balance.
///
/// Every calendar day is chargeable except Sunday.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_chargeable;
/// use chrono::NaiveDate;
///
/// // Saturday counts in full
/// assert!(is_chargeable(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
/// // Sunday is excluded
/// assert!(!is_chargeable(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()));
/// ```
pub fn is_chargeable(date: NaiveDate) -> bool {
    day_type(date) != DayType::Sunday
}
