//! HTTP request handlers for the Leave Request Engine API.
//!
//! This module contains the handler functions for all API endpoints.
//! Every request is identified by the path or body parameters it carries;
//! there is no ambient per-connection identity.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{annual_entitlement, validate_submission, years_of_service};
use crate::config::PolicyLoader;
use crate::error::EngineResult;
use crate::models::{BalanceSummary, LeaveRequest, LeaveRequestDraft, LeaveSubmission};
use crate::store::LeaveStore;

use super::request::{Decision, DecisionRequest, SubmitLeaveRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees/:id/balance", get(balance_handler))
        .route("/employees/:id/leave-requests", get(list_requests_handler))
        .route("/leave-requests", post(submit_handler))
        .route("/leave-requests/:id/decision", post(decision_handler))
        .with_state(state)
}

/// Converts a JSON extraction failure into an error body.
fn json_rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for GET /employees/{id}/balance.
///
/// Returns the employee's balance summary with tenure context computed at
/// read time.
async fn balance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Fetching balance summary"
    );

    let store = state.store().read().await;
    match build_balance_summary(&store, state.policy(), &employee_id) {
        Ok(summary) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(summary),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Balance summary failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Builds the balance summary for an employee.
fn build_balance_summary(
    store: &LeaveStore,
    policy: &PolicyLoader,
    employee_id: &str,
) -> EngineResult<BalanceSummary> {
    let employee = store.employee(employee_id)?;
    let balance = store.balance(employee_id)?;

    let tenure = years_of_service(employee.tenure_start, Utc::now().date_naive());
    let entitled_days = annual_entitlement(tenure.years, policy.entitlements())?;

    Ok(BalanceSummary {
        employee_id: employee.id.clone(),
        available_days: balance.available_days,
        period_start: balance.period_start,
        tenure_start: employee.tenure_start,
        years_worked: tenure.to_string(),
        entitled_days,
        carried_over_days: balance.carried_over_days,
    })
}

/// Handler for POST /leave-requests.
///
/// Validates a submission and persists it as a pending request.
async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitLeaveRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave request submission");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_to_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Validate the leave type exists in the catalogue
    let leave_type = match state.policy().get_leave_type(&request.leave_type) {
        Ok(leave_type) => leave_type.clone(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                leave_type = %request.leave_type,
                "Leave type not found"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Recompute the day count server-side and reject zero
    let draft: LeaveRequestDraft = request.into();
    let requested_days = match validate_submission(&draft) {
        Ok(days) => days,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Submission rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let mut store = state.store().write().await;

    // An unknown employee in a submission body is a validation failure,
    // not a missing resource
    if store.employee(&draft.employee_id).is_err() {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %draft.employee_id,
            "Employee not found"
        );
        let error = ApiError::employee_not_found(&draft.employee_id);
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(error),
        )
            .into_response();
    }

    let submission = LeaveSubmission {
        draft,
        requested_days,
    };
    match store.submit(submission, leave_type.charges_balance) {
        Ok(persisted) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %persisted.id,
                employee_id = %persisted.employee_id,
                leave_type = %persisted.leave_type,
                requested_days = %persisted.requested_days,
                "Leave request persisted"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(persisted),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Submission failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /employees/{id}/leave-requests.
///
/// Returns the employee's persisted requests, newest first, so clients
/// can re-fetch canonical state after submitting.
async fn list_requests_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Listing leave requests"
    );

    let store = state.store().read().await;
    if let Err(err) = store.employee(&employee_id) {
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let requests: Vec<LeaveRequest> = store
        .requests_for(&employee_id)
        .into_iter()
        .cloned()
        .collect();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(requests),
    )
        .into_response()
}

/// Handler for POST /leave-requests/{id}/decision.
///
/// Approves or rejects a pending request; rejection refunds held days.
async fn decision_handler(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        request_id = %request_id,
        "Processing decision"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_to_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let approve = request.decision == Decision::Approve;
    let mut store = state.store().write().await;
    match store.decide(request_id, approve) {
        Ok(decided) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %decided.id,
                status = %decided.status,
                "Decision applied"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(decided),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                request_id = %request_id,
                error = %err,
                "Decision failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
