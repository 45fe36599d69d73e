//! Journal entry endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{JournalEntry, NewJournalEntry};

use super::handlers::{engine_error, json_body, path_id};
use super::response::ApiErrorResponse;
use super::state::AppState;

fn check_entry(entry: &NewJournalEntry, correlation_id: Uuid) -> Result<(), ApiErrorResponse> {
    entry
        .validate()
        .map_err(|e| engine_error(e, correlation_id))
}

pub(super) async fn list(State(state): State<AppState>) -> Json<Vec<JournalEntry>> {
    Json(state.storage().list_journal_entries())
}

pub(super) async fn for_package(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Vec<JournalEntry>>, ApiErrorResponse> {
    let id = path_id(path, Uuid::new_v4())?;
    Ok(Json(state.storage().journal_entries_for_package(id)))
}

pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewJournalEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<JournalEntry>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let entry = json_body(payload, correlation_id)?;
    check_entry(&entry, correlation_id)?;

    let stored = state
        .storage()
        .create_journal_entry(entry)
        .map_err(|e| engine_error(e, correlation_id))?;
    info!(
        correlation_id = %correlation_id,
        journal_entry_id = stored.id,
        pay_package_id = stored.pay_package_id,
        "Journal entry created"
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

pub(super) async fn update(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<NewJournalEntry>, JsonRejection>,
) -> Result<Json<JournalEntry>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(path, correlation_id)?;
    let entry = json_body(payload, correlation_id)?;

    if state.storage().get_journal_entry(id).is_none() {
        return Err(engine_error(
            EngineError::JournalEntryNotFound { id },
            correlation_id,
        ));
    }
    check_entry(&entry, correlation_id)?;

    let stored = state
        .storage()
        .update_journal_entry(id, entry)
        .map_err(|e| engine_error(e, correlation_id))?;
    info!(correlation_id = %correlation_id, journal_entry_id = id, "Journal entry updated");

    Ok(Json(stored))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(path, correlation_id)?;

    if !state.storage().delete_journal_entry(id) {
        return Err(engine_error(
            EngineError::JournalEntryNotFound { id },
            correlation_id,
        ));
    }
    info!(correlation_id = %correlation_id, journal_entry_id = id, "Journal entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
