//! Delivery endpoints and communication history.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::Serialize;
use uuid::Uuid;

use crate::models::CommunicationLog;
use crate::notify::DeliveryOutcome;

use super::handlers::{engine_error, json_body, path_id};
use super::request::{SendEmailRequest, SendSmsRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Body returned after a successful delivery.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryResponse {
    message: String,
    #[serde(flatten)]
    outcome: DeliveryOutcome,
}

/// Pulls the id and a non-blank recipient out of a delivery request.
fn required(
    pay_package_id: Option<u64>,
    recipient: Option<String>,
    message: &str,
) -> Result<(u64, String), ApiErrorResponse> {
    match (pay_package_id, recipient) {
        (Some(id), Some(recipient)) if !recipient.trim().is_empty() => Ok((id, recipient)),
        _ => Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            message,
        ))),
    }
}

pub(super) async fn send_email(
    State(state): State<AppState>,
    payload: Result<Json<SendEmailRequest>, JsonRejection>,
) -> Result<Json<DeliveryResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = json_body(payload, correlation_id)?;
    let (id, email) = required(
        request.pay_package_id,
        request.email,
        "Pay package ID and email are required",
    )?;

    let outcome = state
        .notifier()
        .send_email(id, &email)
        .await
        .map_err(|e| engine_error(e, correlation_id))?;

    Ok(Json(DeliveryResponse {
        message: "Email sent successfully".to_string(),
        outcome,
    }))
}

pub(super) async fn send_sms(
    State(state): State<AppState>,
    payload: Result<Json<SendSmsRequest>, JsonRejection>,
) -> Result<Json<DeliveryResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = json_body(payload, correlation_id)?;
    let (id, phone_number) = required(
        request.pay_package_id,
        request.phone_number,
        "Pay package ID and phone number are required",
    )?;

    let outcome = state
        .notifier()
        .send_sms(id, &phone_number)
        .await
        .map_err(|e| engine_error(e, correlation_id))?;

    Ok(Json(DeliveryResponse {
        message: "SMS sent successfully".to_string(),
        outcome,
    }))
}

pub(super) async fn communications(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Vec<CommunicationLog>>, ApiErrorResponse> {
    let id = path_id(path, Uuid::new_v4())?;
    Ok(Json(state.storage().communication_logs(id)))
}
