//! Response types for the Pay Package Engine API.
//!
//! This module defines the error response structures and the mapping from
//! [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid id error response.
    pub fn invalid_id(details: impl Into<String>) -> Self {
        Self::with_details("INVALID_ID", "Invalid ID", details)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// A 500 response.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::new("INTERNAL_ERROR", message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

fn not_found(code: &str, message: String) -> ApiErrorResponse {
    ApiErrorResponse {
        status: StatusCode::NOT_FOUND,
        error: ApiError::new(code, message),
    }
}

fn invalid(code: &str, field: String, message: String) -> ApiErrorResponse {
    ApiErrorResponse::bad_request(ApiError::with_details(
        code,
        format!("Invalid field '{}': {}", field, message),
        field,
    ))
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let text = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::PayPackageNotFound { .. } => {
                not_found("PAY_PACKAGE_NOT_FOUND", "Pay package not found".to_string())
            }
            EngineError::JournalEntryNotFound { .. } => {
                not_found("JOURNAL_ENTRY_NOT_FOUND", "Journal entry not found".to_string())
            }
            EngineError::ReminderNotFound { .. } => {
                not_found("REMINDER_NOT_FOUND", "Reminder not found".to_string())
            }
            EngineError::InvalidPayPackage { field, message } => {
                invalid("INVALID_PAY_PACKAGE", field, message)
            }
            EngineError::InvalidJournalEntry { field, message } => {
                invalid("INVALID_JOURNAL_ENTRY", field, message)
            }
            EngineError::InvalidReminder { field, message } => {
                invalid("INVALID_REMINDER", field, message)
            }
            EngineError::InvalidRecipient { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_RECIPIENT", text))
            }
            EngineError::ChannelNotConfigured { .. } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::new("CHANNEL_NOT_CONFIGURED", text),
            },
            EngineError::DeliveryFailed { message, .. } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details("DELIVERY_FAILED", text, message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = EngineError::PayPackageNotFound { id: 9 }.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "PAY_PACKAGE_NOT_FOUND");
        assert_eq!(response.error.message, "Pay package not found");

        let response: ApiErrorResponse = EngineError::ReminderNotFound { id: 9 }.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_field_maps_to_400() {
        let response: ApiErrorResponse = EngineError::InvalidPayPackage {
            field: "providerName".to_string(),
            message: "must not be empty".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_PAY_PACKAGE");
        assert_eq!(response.error.details.as_deref(), Some("providerName"));
    }

    #[test]
    fn test_channel_errors() {
        let response: ApiErrorResponse = EngineError::ChannelNotConfigured {
            channel: "SMS".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.error.message, "SMS service not configured properly");

        let response: ApiErrorResponse = EngineError::DeliveryFailed {
            channel: "email".to_string(),
            recipient: "a@b.com".to_string(),
            message: "timeout".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
        assert_eq!(response.error.details.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let response: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "service.yaml".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }
}
