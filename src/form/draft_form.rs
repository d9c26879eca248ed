//! The leave request draft lifecycle.
//!
//! A form is created empty when the user opens the new-request
//! interaction, mutated one field at a time, and recomputes its chargeable
//! day count synchronously on every mutation. Cancelling resets the draft;
//! submitting validates it and hands over a [`LeaveSubmission`]. The form
//! holds no authoritative state after submission.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::{count_chargeable_days, validate_submission};
use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveRequestDraft, LeaveSubmission};

/// In-progress leave request state for one employee.
///
/// The computed day count is a derived value: it is recomputed on every
/// edit to the start date, end date, or half-day flag, and never stored
/// independently of the fields that produced it.
///
/// Toggling half-day on forces `end_date = start_date` at that moment. A
/// later start date edit does not re-sync the end date; the count stays
/// 0.5 while the flag is set, so the relaxation is invisible until the
/// flag is cleared again (last write wins, as in the system this engine
/// replaces).
///
/// # Example
///
/// ```
/// use leave_engine::form::LeaveRequestForm;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut form = LeaveRequestForm::new("emp_001");
/// form.set_leave_type("vacation");
/// form.set_start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// form.set_end_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
/// assert_eq!(form.computed_days(), Decimal::from(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequestForm {
    employee_id: String,
    leave_type: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    half_day: bool,
    note: String,
    computed_days: Decimal,
}

impl LeaveRequestForm {
    /// Creates an empty draft for the given employee.
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            leave_type: None,
            start_date: None,
            end_date: None,
            half_day: false,
            note: String::new(),
            computed_days: Decimal::ZERO,
        }
    }

    /// Sets the leave type code.
    pub fn set_leave_type(&mut self, code: impl Into<String>) {
        self.leave_type = Some(code.into());
    }

    /// Sets the start date and recomputes the day count.
    ///
    /// Does not touch the end date, even when half-day is on.
    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = Some(date);
        self.recompute();
    }

    /// Sets the end date and recomputes the day count.
    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.end_date = Some(date);
        self.recompute();
    }

    /// Toggles the half-day flag and recomputes the day count.
    ///
    /// Turning the flag on forces the end date to the current start date.
    pub fn set_half_day(&mut self, half_day: bool) {
        if half_day {
            self.end_date = self.start_date;
        }
        self.half_day = half_day;
        self.recompute();
    }

    /// Sets the free-form note.
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Returns the current chargeable day count.
    ///
    /// Zero until both dates are set, except that half-day is always 0.5.
    pub fn computed_days(&self) -> Decimal {
        self.computed_days
    }

    /// Returns the employee the draft is for.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Discards all edits, returning to the empty draft.
    pub fn cancel(&mut self) {
        *self = Self::new(std::mem::take(&mut self.employee_id));
    }

    /// Validates the draft and converts it into a submission.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IncompleteDraft`] when the leave type or
    /// either date is still unset, and [`EngineError::EmptyRange`] when
    /// the range yields zero chargeable days.
    pub fn submission(&self) -> EngineResult<LeaveSubmission> {
        let leave_type = self
            .leave_type
            .clone()
            .ok_or_else(|| EngineError::IncompleteDraft {
                field: "leave_type".to_string(),
            })?;
        let start_date = self.start_date.ok_or_else(|| EngineError::IncompleteDraft {
            field: "start_date".to_string(),
        })?;
        let end_date = self.end_date.ok_or_else(|| EngineError::IncompleteDraft {
            field: "end_date".to_string(),
        })?;

        let draft = LeaveRequestDraft {
            employee_id: self.employee_id.clone(),
            leave_type,
            start_date,
            end_date,
            half_day: self.half_day,
            note: self.note.clone(),
        };
        let requested_days = validate_submission(&draft)?;

        Ok(LeaveSubmission {
            draft,
            requested_days,
        })
    }

    fn recompute(&mut self) {
        self.computed_days = match (self.start_date, self.end_date) {
            _ if self.half_day => Decimal::new(5, 1),
            (Some(start), Some(end)) => count_chargeable_days(start, end, false),
            _ => Decimal::ZERO,
        };
    }
}
