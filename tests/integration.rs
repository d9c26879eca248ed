//! Integration tests for the Leave Request Engine API.
//!
//! This test suite drives the router end to end, covering:
//! - Balance summary fetching
//! - Leave request submission (full weeks, half days, Saturdays)
//! - Every error code the API can return
//! - Balance deduction, refund on rejection, and canonical re-fetch

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use leave_engine::api::{AppState, create_router};
use leave_engine::config::PolicyLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let policy = PolicyLoader::load("./config/acme").expect("Failed to load config");
    AppState::new(policy)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_submission(
    employee_id: &str,
    leave_type: &str,
    start_date: &str,
    end_date: &str,
) -> Value {
    json!({
        "employee_id": employee_id,
        "leave_type": leave_type,
        "start_date": start_date,
        "end_date": end_date,
        "note": ""
    })
}

fn assert_requested_days(result: &Value, expected: &str) {
    let actual = result["requested_days"].as_str().unwrap();
    assert_eq!(
        decimal(actual),
        decimal(expected),
        "Expected requested_days {}, got {}",
        expected,
        actual
    );
}

async fn fetch_available_days(router: Router, employee_id: &str) -> Decimal {
    let (status, body) = get(router, &format!("/employees/{}/balance", employee_id)).await;
    assert_eq!(status, StatusCode::OK);
    decimal(body["available_days"].as_str().unwrap())
}

// =============================================================================
// Balance summary
// =============================================================================

#[tokio::test]
async fn test_balance_summary_returns_stored_fields() {
    let router = create_router_for_test();

    let (status, body) = get(router, "/employees/emp_001/balance").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee_id"], "emp_001");
    assert_eq!(decimal(body["available_days"].as_str().unwrap()), decimal("12.5"));
    assert_eq!(body["period_start"], "2026-01-01");
    assert_eq!(body["tenure_start"], "2019-03-01");
    assert_eq!(
        decimal(body["carried_over_days"].as_str().unwrap()),
        decimal("2.5")
    );
}

#[tokio::test]
async fn test_balance_summary_includes_tenure_context() {
    let router = create_router_for_test();

    let (status, body) = get(router, "/employees/emp_011/balance").await;

    assert_eq!(status, StatusCode::OK);
    // emp_011 started 2012-09-01; well past the top entitlement tier
    assert_eq!(decimal(body["entitled_days"].as_str().unwrap()), decimal("25"));
    let years_worked = body["years_worked"].as_str().unwrap();
    assert!(
        years_worked.contains("years") && years_worked.contains("month"),
        "Unexpected years_worked format: {}",
        years_worked
    );
}

#[tokio::test]
async fn test_balance_unknown_employee_returns_404() {
    let router = create_router_for_test();

    let (status, body) = get(router, "/employees/emp_404/balance").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test]
async fn test_submit_full_week_returns_201() {
    let router = create_router_for_test();

    // Monday 2026-02-02 through Friday 2026-02-06
    let body = create_submission("emp_001", "vacation", "2026-02-02", "2026-02-06");
    let (status, result) = post(router, "/leave-requests", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(result["employee_id"], "emp_001");
    assert_eq!(result["leave_type"], "vacation");
    assert_eq!(result["status"], "pending");
    assert!(result["charges_balance"].as_bool().unwrap());
    assert_requested_days(&result, "5");
}

#[tokio::test]
async fn test_submit_week_spanning_sunday_excludes_it() {
    let router = create_router_for_test();

    // Monday 2026-02-02 through Sunday 2026-02-08
    let body = create_submission("emp_001", "vacation", "2026-02-02", "2026-02-08");
    let (status, result) = post(router, "/leave-requests", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_requested_days(&result, "6");
}

#[tokio::test]
async fn test_submit_single_saturday_charges_one_day() {
    let router = create_router_for_test();

    // 2026-02-07 is a Saturday
    let body = create_submission("emp_001", "vacation", "2026-02-07", "2026-02-07");
    let (status, result) = post(router, "/leave-requests", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_requested_days(&result, "1");
}

#[tokio::test]
async fn test_submit_half_day_charges_half() {
    let state = create_test_state();
    let router = create_router(state);

    let body = json!({
        "employee_id": "emp_001",
        "leave_type": "vacation",
        "start_date": "2026-02-02",
        "end_date": "2026-02-02",
        "half_day": true,
        "note": "Dentist"
    });
    let (status, result) = post(router.clone(), "/leave-requests", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_requested_days(&result, "0.5");

    let available = fetch_available_days(router, "emp_001").await;
    assert_eq!(available, decimal("12"));
}

#[tokio::test]
async fn test_submission_deducts_balance_on_refetch() {
    let state = create_test_state();
    let router = create_router(state);

    let body = create_submission("emp_001", "vacation", "2026-02-02", "2026-02-06");
    let (status, _) = post(router.clone(), "/leave-requests", body).await;
    assert_eq!(status, StatusCode::CREATED);

    // The canonical balance comes from a re-fetch, not client arithmetic
    let available = fetch_available_days(router, "emp_001").await;
    assert_eq!(available, decimal("7.5"));
}

#[tokio::test]
async fn test_permit_submission_does_not_deduct() {
    let state = create_test_state();
    let router = create_router(state);

    let body = create_submission("emp_001", "permit", "2026-02-02", "2026-02-03");
    let (status, result) = post(router.clone(), "/leave-requests", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!result["charges_balance"].as_bool().unwrap());
    assert_requested_days(&result, "2");

    let available = fetch_available_days(router, "emp_001").await;
    assert_eq!(available, decimal("12.5"));
}

// =============================================================================
// Submission errors
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/leave-requests")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let router = create_router_for_test();

    let body = json!({
        "employee_id": "emp_001",
        "leave_type": "vacation",
        "start_date": "2026-02-02"
    });
    let (status, error) = post(router, "/leave-requests", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(
        error["message"].as_str().unwrap().contains("end_date"),
        "Expected message to mention end_date, got: {}",
        error["message"]
    );
}

#[tokio::test]
async fn test_unknown_leave_type_returns_400() {
    let router = create_router_for_test();

    let body = create_submission("emp_001", "sabbatical", "2026-02-02", "2026-02-06");
    let (status, error) = post(router, "/leave-requests", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "LEAVE_TYPE_NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_employee_submission_returns_400() {
    let router = create_router_for_test();

    let body = create_submission("emp_404", "vacation", "2026-02-02", "2026-02-06");
    let (status, error) = post(router, "/leave-requests", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_inverted_range_returns_empty_range() {
    let router = create_router_for_test();

    let body = create_submission("emp_001", "vacation", "2026-02-06", "2026-02-02");
    let (status, error) = post(router, "/leave-requests", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "EMPTY_RANGE");
}

#[tokio::test]
async fn test_sunday_only_range_returns_empty_range() {
    let router = create_router_for_test();

    // 2026-02-08 is a Sunday
    let body = create_submission("emp_001", "vacation", "2026-02-08", "2026-02-08");
    let (status, error) = post(router, "/leave-requests", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "EMPTY_RANGE");
}

#[tokio::test]
async fn test_over_balance_returns_insufficient_balance() {
    let state = create_test_state();
    let router = create_router(state);

    // emp_002 has 2 available days; a full week needs 5
    let body = create_submission("emp_002", "vacation", "2026-02-02", "2026-02-06");
    let (status, error) = post(router.clone(), "/leave-requests", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INSUFFICIENT_BALANCE");

    // A failed submission deducts nothing
    let available = fetch_available_days(router, "emp_002").await;
    assert_eq!(available, decimal("2"));
}

// =============================================================================
// Request listing
// =============================================================================

#[tokio::test]
async fn test_requests_listed_newest_first() {
    let state = create_test_state();
    let router = create_router(state);

    let first = create_submission("emp_001", "vacation", "2026-02-02", "2026-02-03");
    let (status, first_result) = post(router.clone(), "/leave-requests", first).await;
    assert_eq!(status, StatusCode::CREATED);

    let second = create_submission("emp_001", "vacation", "2026-03-02", "2026-03-03");
    let (status, second_result) = post(router.clone(), "/leave-requests", second).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, listed) = get(router, "/employees/emp_001/leave-requests").await;

    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], second_result["id"]);
    assert_eq!(listed[1]["id"], first_result["id"]);
}

#[tokio::test]
async fn test_listing_unknown_employee_returns_404() {
    let router = create_router_for_test();

    let (status, error) = get(router, "/employees/emp_404/leave-requests").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_listing_other_employee_excludes_requests() {
    let state = create_test_state();
    let router = create_router(state);

    let body = create_submission("emp_001", "vacation", "2026-02-02", "2026-02-03");
    post(router.clone(), "/leave-requests", body).await;

    let (status, listed) = get(router, "/employees/emp_003/leave-requests").await;

    assert_eq!(status, StatusCode::OK);
    assert!(listed.as_array().unwrap().is_empty());
}

// =============================================================================
// Decisions
// =============================================================================

#[tokio::test]
async fn test_approve_keeps_deduction() {
    let state = create_test_state();
    let router = create_router(state);

    let body = create_submission("emp_001", "vacation", "2026-02-02", "2026-02-06");
    let (_, submitted) = post(router.clone(), "/leave-requests", body).await;
    let request_id = submitted["id"].as_str().unwrap().to_string();

    let (status, decided) = post(
        router.clone(),
        &format!("/leave-requests/{}/decision", request_id),
        json!({"decision": "approve"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["status"], "approved");

    let available = fetch_available_days(router, "emp_001").await;
    assert_eq!(available, decimal("7.5"));
}

#[tokio::test]
async fn test_reject_refunds_balance() {
    let state = create_test_state();
    let router = create_router(state);

    let body = create_submission("emp_001", "vacation", "2026-02-02", "2026-02-06");
    let (_, submitted) = post(router.clone(), "/leave-requests", body).await;
    let request_id = submitted["id"].as_str().unwrap().to_string();

    let available = fetch_available_days(router.clone(), "emp_001").await;
    assert_eq!(available, decimal("7.5"));

    let (status, decided) = post(
        router.clone(),
        &format!("/leave-requests/{}/decision", request_id),
        json!({"decision": "reject"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["status"], "rejected");

    let available = fetch_available_days(router, "emp_001").await;
    assert_eq!(available, decimal("12.5"));
}

#[tokio::test]
async fn test_second_decision_returns_409() {
    let state = create_test_state();
    let router = create_router(state);

    let body = create_submission("emp_001", "vacation", "2026-02-02", "2026-02-06");
    let (_, submitted) = post(router.clone(), "/leave-requests", body).await;
    let request_id = submitted["id"].as_str().unwrap().to_string();

    let uri = format!("/leave-requests/{}/decision", request_id);
    post(router.clone(), &uri, json!({"decision": "reject"})).await;

    let (status, error) = post(router.clone(), &uri, json!({"decision": "approve"})).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "REQUEST_ALREADY_DECIDED");

    // The repeated decision must not refund a second time
    let available = fetch_available_days(router, "emp_001").await;
    assert_eq!(available, decimal("12.5"));
}

#[tokio::test]
async fn test_decision_on_unknown_request_returns_404() {
    let router = create_router_for_test();

    let (status, error) = post(
        router,
        "/leave-requests/00000000-0000-0000-0000-000000000000/decision",
        json!({"decision": "approve"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "REQUEST_NOT_FOUND");
}

#[tokio::test]
async fn test_decision_with_invalid_verb_returns_400() {
    let state = create_test_state();
    let router = create_router(state);

    let body = create_submission("emp_001", "vacation", "2026-02-02", "2026-02-06");
    let (_, submitted) = post(router.clone(), "/leave-requests", body).await;
    let request_id = submitted["id"].as_str().unwrap().to_string();

    let (status, _) = post(
        router,
        &format!("/leave-requests/{}/decision", request_id),
        json!({"decision": "escalate"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
