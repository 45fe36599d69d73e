//! Pay package endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::calculation::calculate;
use crate::error::EngineError;
use crate::models::{PayPackage, PayPackageInput, PayPackageResult};

use super::handlers::{engine_error, json_body, path_id};
use super::request::PayPackageRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Validates an input for storage and calculates it.
fn calculate_for_storage(
    input: PayPackageInput,
    correlation_id: Uuid,
) -> Result<PayPackageResult, ApiErrorResponse> {
    input
        .validate_for_storage()
        .map_err(|e| engine_error(e, correlation_id))?;
    Ok(calculate(&input))
}

fn not_found(id: u64, correlation_id: Uuid) -> ApiErrorResponse {
    engine_error(EngineError::PayPackageNotFound { id }, correlation_id)
}

pub(super) async fn list(State(state): State<AppState>) -> Json<Vec<PayPackage>> {
    Json(state.storage().list_pay_packages())
}

pub(super) async fn recent(State(state): State<AppState>) -> Json<Vec<PayPackage>> {
    Json(
        state
            .storage()
            .recent_pay_packages(state.service().recent_limit),
    )
}

pub(super) async fn get_one(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<PayPackage>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(path, correlation_id)?;

    state
        .storage()
        .get_pay_package(id)
        .map(Json)
        .ok_or_else(|| not_found(id, correlation_id))
}

pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<PayPackageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PayPackage>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let input: PayPackageInput = json_body(payload, correlation_id)?.into();
    let result = calculate_for_storage(input, correlation_id)?;

    let package = state.storage().create_pay_package(result);
    info!(
        correlation_id = %correlation_id,
        pay_package_id = package.id,
        weekly_gross = %package.result.weekly_gross,
        "Pay package created"
    );

    Ok((StatusCode::CREATED, Json(package)))
}

pub(super) async fn replace(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<PayPackageRequest>, JsonRejection>,
) -> Result<Json<PayPackage>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(path, correlation_id)?;
    let input: PayPackageInput = json_body(payload, correlation_id)?.into();

    if state.storage().get_pay_package(id).is_none() {
        return Err(not_found(id, correlation_id));
    }
    let result = calculate_for_storage(input, correlation_id)?;

    let package = state
        .storage()
        .update_pay_package(id, result)
        .ok_or_else(|| not_found(id, correlation_id))?;
    info!(correlation_id = %correlation_id, pay_package_id = id, "Pay package replaced");

    Ok(Json(package))
}

/// Merges the given input fields onto the stored input, then recalculates
/// every derived figure.
pub(super) async fn merge(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PayPackage>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(path, correlation_id)?;
    let Value::Object(changes) = json_body(payload, correlation_id)? else {
        return Err(ApiErrorResponse::bad_request(ApiError::malformed_json(
            "Request body must be a JSON object",
        )));
    };

    let existing = state
        .storage()
        .get_pay_package(id)
        .ok_or_else(|| not_found(id, correlation_id))?;

    let mut merged = serde_json::to_value(&existing.result.input)
        .map_err(|e| ApiErrorResponse::internal(e.to_string()))?;
    if let Value::Object(fields) = &mut merged {
        fields.extend(changes);
    }
    let request: PayPackageRequest = serde_json::from_value(merged).map_err(|e| {
        ApiErrorResponse::bad_request(ApiError::malformed_json(e.to_string()))
    })?;

    let result = calculate_for_storage(request.into(), correlation_id)?;
    let package = state
        .storage()
        .update_pay_package(id, result)
        .ok_or_else(|| not_found(id, correlation_id))?;
    info!(correlation_id = %correlation_id, pay_package_id = id, "Pay package updated");

    Ok(Json(package))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(path, correlation_id)?;

    if !state.storage().delete_pay_package(id) {
        return Err(not_found(id, correlation_id));
    }
    info!(correlation_id = %correlation_id, pay_package_id = id, "Pay package deleted");

    Ok(StatusCode::NO_CONTENT)
}
