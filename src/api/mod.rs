//! HTTP API module for the Leave Request Engine.
//!
//! This module provides the REST API endpoints for fetching balance
//! summaries, submitting leave requests, and deciding pending requests.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{Decision, DecisionRequest, SubmitLeaveRequest};
pub use response::ApiError;
pub use state::AppState;
