//! Years-of-service arithmetic and entitlement tier lookup.
//!
//! Tenure is measured from the employee's tenure-start date, which an
//! administrative cycle closure may have reset to a later date than the
//! original hire date. Completed years drive the entitlement tier lookup.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EntitlementsConfig;
use crate::error::{EngineError, EngineResult};

/// Completed years and months of service.
///
/// A year or month is only counted once its anniversary has been reached;
/// the day before a third anniversary is still `2 years, 11 months`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::ServiceTenure;
///
/// let tenure = ServiceTenure { years: 3, months: 4 };
/// assert_eq!(tenure.to_string(), "3 years, 4 months");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTenure {
    /// Completed years of service.
    pub years: u32,
    /// Completed months beyond the last full year.
    pub months: u32,
}

impl std::fmt::Display for ServiceTenure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let year_label = if self.years == 1 { "year" } else { "years" };
        let month_label = if self.months == 1 { "month" } else { "months" };
        write!(
            f,
            "{} {}, {} {}",
            self.years, year_label, self.months, month_label
        )
    }
}

/// Computes completed years and months of service.
///
/// The computation is calendar-exact: an anniversary that has not yet been
/// reached does not count, including the month component. An `as_of` date on
/// or before `tenure_start` yields zero tenure.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::years_of_service;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// let tenure = years_of_service(start, as_of);
/// // The fifth anniversary is 2024-03-01, one day away
/// assert_eq!(tenure.years, 4);
/// assert_eq!(tenure.months, 11);
/// ```
pub fn years_of_service(tenure_start: NaiveDate, as_of: NaiveDate) -> ServiceTenure {
    if as_of <= tenure_start {
        return ServiceTenure { years: 0, months: 0 };
    }

    let mut years = as_of.year() - tenure_start.year();
    let mut months = as_of.month() as i32 - tenure_start.month() as i32;
    if as_of.day() < tenure_start.day() {
        months -= 1;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    ServiceTenure {
        years: years.max(0) as u32,
        months: months as u32,
    }
}

/// Looks up the annual entitlement in days for completed years of service.
///
/// Resolves to the highest tier whose `min_years` does not exceed the
/// completed years. The tier list is sorted ascending on construction, so
/// the last matching tier is the effective one.
///
/// # Errors
///
/// Returns [`EngineError::EntitlementNotFound`] when no tier covers the
/// given years, which only happens when the lowest configured tier starts
/// above zero.
pub fn annual_entitlement(
    completed_years: u32,
    entitlements: &EntitlementsConfig,
) -> EngineResult<Decimal> {
    entitlements
        .tiers()
        .iter()
        .rev()
        .find(|tier| tier.min_years <= completed_years)
        .map(|tier| tier.days)
        .ok_or(EngineError::EntitlementNotFound {
            years: completed_years,
        })
}
