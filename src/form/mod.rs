//! Interaction state for the leave request form.
//!
//! This module models the client-side interaction the engine serves: the
//! draft lifecycle of a leave request (created empty, mutated per field,
//! recomputed on every edit, cancelled or submitted) and the cascading
//! manager → department → employee selection filter.

mod draft_form;
mod selection;

pub use draft_form::LeaveRequestForm;
pub use selection::{CascadingSelection, departments_of_manager, employees_of_department};
