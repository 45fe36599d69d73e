//! Reminder endpoints.
//!
//! Reminders are returned with their due status (`overdue`, `today`,
//! `tomorrow`, `upcoming`) worked out against the time of the request.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{DueStatus, NewReminder, Reminder};

use super::handlers::{engine_error, json_body, path_id, query};
use super::request::{CompleteReminderRequest, ReminderListQuery, UpcomingQuery};
use super::response::ApiErrorResponse;
use super::state::AppState;

/// A reminder as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderView {
    #[serde(flatten)]
    reminder: Reminder,
    due_status: DueStatus,
}

fn view(reminder: Reminder, now: DateTime<Utc>) -> ReminderView {
    ReminderView {
        due_status: reminder.due_status(now),
        reminder,
    }
}

fn views(reminders: Vec<Reminder>) -> Json<Vec<ReminderView>> {
    let now = Utc::now();
    Json(reminders.into_iter().map(|r| view(r, now)).collect())
}

fn not_found(id: u64, correlation_id: Uuid) -> ApiErrorResponse {
    engine_error(EngineError::ReminderNotFound { id }, correlation_id)
}

fn check_reminder(reminder: &NewReminder, correlation_id: Uuid) -> Result<(), ApiErrorResponse> {
    reminder
        .validate()
        .map_err(|e| engine_error(e, correlation_id))
}

pub(super) async fn list(
    State(state): State<AppState>,
    params: Result<Query<ReminderListQuery>, QueryRejection>,
) -> Result<Json<Vec<ReminderView>>, ApiErrorResponse> {
    let params = query(params, Uuid::new_v4())?;
    Ok(views(state.storage().all_reminders(params.include_completed)))
}

pub(super) async fn upcoming(
    State(state): State<AppState>,
    params: Result<Query<UpcomingQuery>, QueryRejection>,
) -> Result<Json<Vec<ReminderView>>, ApiErrorResponse> {
    let params = query(params, Uuid::new_v4())?;
    let days = params
        .days
        .filter(|d| *d > 0)
        .unwrap_or(state.service().upcoming_reminder_days);

    Ok(views(state.storage().upcoming_reminders(days, Utc::now())))
}

pub(super) async fn for_package(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Vec<ReminderView>>, ApiErrorResponse> {
    let id = path_id(path, Uuid::new_v4())?;
    Ok(views(state.storage().reminders_for_package(id)))
}

pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewReminder>, JsonRejection>,
) -> Result<(StatusCode, Json<ReminderView>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let reminder = json_body(payload, correlation_id)?;
    check_reminder(&reminder, correlation_id)?;

    let stored = state
        .storage()
        .create_reminder(reminder)
        .map_err(|e| engine_error(e, correlation_id))?;
    info!(
        correlation_id = %correlation_id,
        reminder_id = stored.id,
        pay_package_id = stored.pay_package_id,
        "Reminder created"
    );

    Ok((StatusCode::CREATED, Json(view(stored, Utc::now()))))
}

pub(super) async fn update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<NewReminder>, JsonRejection>,
) -> Result<Json<ReminderView>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(path, correlation_id)?;
    let reminder = json_body(payload, correlation_id)?;

    if state.storage().get_reminder(id).is_none() {
        return Err(not_found(id, correlation_id));
    }
    check_reminder(&reminder, correlation_id)?;

    let stored = state
        .storage()
        .update_reminder(id, reminder)
        .map_err(|e| engine_error(e, correlation_id))?;
    info!(correlation_id = %correlation_id, reminder_id = id, "Reminder updated");

    Ok(Json(view(stored, Utc::now())))
}

pub(super) async fn complete(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<CompleteReminderRequest>, JsonRejection>,
) -> Result<Json<ReminderView>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(path, correlation_id)?;
    let request = json_body(payload, correlation_id)?;

    let stored = state
        .storage()
        .set_reminder_completed(id, request.is_completed)
        .ok_or_else(|| not_found(id, correlation_id))?;
    info!(
        correlation_id = %correlation_id,
        reminder_id = id,
        is_completed = request.is_completed,
        "Reminder completion set"
    );

    Ok(Json(view(stored, Utc::now())))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(path, correlation_id)?;

    if !state.storage().delete_reminder(id) {
        return Err(not_found(id, correlation_id));
    }
    info!(correlation_id = %correlation_id, reminder_id = id, "Reminder deleted");

    Ok(StatusCode::NO_CONTENT)
}
