//! HTTP routing and shared handler plumbing for the Pay Package Engine API.
//!
//! Every handler tags its log events with a per-request correlation id and
//! turns extractor rejections into [`ApiError`] bodies.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    routing::{get, patch, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_with_breakdown;
use crate::error::EngineError;
use crate::models::{PayPackageCalculation, PayPackageInput};

use super::request::PayPackageRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;
use super::{journal, notifications, pay_packages, reminders};

/// Creates the API router with all endpoints mounted under `/api`.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/calculate", post(calculate_handler))
        .route(
            "/pay-packages",
            get(pay_packages::list).post(pay_packages::create),
        )
        .route("/pay-packages/recent", get(pay_packages::recent))
        .route("/pay-packages/email", post(notifications::send_email))
        .route("/pay-packages/sms", post(notifications::send_sms))
        .route(
            "/pay-packages/:id",
            get(pay_packages::get_one)
                .put(pay_packages::replace)
                .patch(pay_packages::merge)
                .delete(pay_packages::delete),
        )
        .route(
            "/pay-packages/:id/communications",
            get(notifications::communications),
        )
        .route("/pay-packages/:id/journal", get(journal::for_package))
        .route("/pay-packages/:id/reminders", get(reminders::for_package))
        .route("/journal", get(journal::list).post(journal::create))
        .route("/journal/:id", put(journal::update).delete(journal::delete))
        .route("/reminders", get(reminders::list).post(reminders::create))
        .route("/reminders/upcoming", get(reminders::upcoming))
        .route(
            "/reminders/:id",
            put(reminders::update).delete(reminders::delete),
        )
        .route("/reminders/:id/complete", patch(reminders::complete));

    Router::new().nest("/api", api).with_state(state)
}

/// Handler for `POST /api/calculate`.
///
/// Previews a calculation without storing it. Accepts any input; missing
/// fields count as zero and missing dates fall back to 13 weeks.
async fn calculate_handler(
    payload: Result<Json<PayPackageRequest>, JsonRejection>,
) -> Result<Json<PayPackageCalculation>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation preview");

    let input: PayPackageInput = json_body(payload, correlation_id)?.into();

    let start_time = Instant::now();
    let calculation = calculate_with_breakdown(&input);
    info!(
        correlation_id = %correlation_id,
        weekly_gross = %calculation.result.weekly_gross,
        weekly_margin = %calculation.result.weekly_agency_margin,
        warnings = calculation.audit_trace.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    Ok(Json(calculation))
}

/// Unwraps a JSON body, mapping rejections to 400 responses.
pub(super) fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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
            };
            Err(ApiErrorResponse::bad_request(error))
        }
    }
}

/// Unwraps a numeric `:id` path segment.
pub(super) fn path_id(
    path: Result<Path<u64>, PathRejection>,
    correlation_id: Uuid,
) -> Result<u64, ApiErrorResponse> {
    path.map(|Path(id)| id).map_err(|rejection| {
        let details = rejection.body_text();
        warn!(correlation_id = %correlation_id, error = %details, "Invalid id");
        ApiErrorResponse::bad_request(ApiError::invalid_id(details))
    })
}

/// Unwraps a query string.
pub(super) fn query<T>(
    query: Result<Query<T>, QueryRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    query.map(|Query(value)| value).map_err(|rejection| {
        let details = rejection.body_text();
        warn!(correlation_id = %correlation_id, error = %details, "Invalid query string");
        ApiErrorResponse::bad_request(ApiError::validation_error(details))
    })
}

/// Logs an engine error against the request and converts it.
pub(super) fn engine_error(error: EngineError, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    error.into()
}
