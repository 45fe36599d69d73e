//! Error types for the Pay Package Engine.
//!
//! The calculation core never fails; these errors belong to the layers around
//! it (configuration, storage lookups, edge validation and notification
//! delivery).

use thiserror::Error;

/// The main error type for the Pay Package Engine.
///
/// # Example
///
/// ```
/// use pay_package_engine::error::EngineError;
///
/// let error = EngineError::PayPackageNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Pay package not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No pay package exists with the given id.
    #[error("Pay package not found: {id}")]
    PayPackageNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// No journal entry exists with the given id.
    #[error("Journal entry not found: {id}")]
    JournalEntryNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// No reminder exists with the given id.
    #[error("Reminder not found: {id}")]
    ReminderNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// A pay package failed edge validation before being stored.
    #[error("Invalid pay package field '{field}': {message}")]
    InvalidPayPackage {
        /// The offending field (wire name).
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A journal entry failed edge validation.
    #[error("Invalid journal entry field '{field}': {message}")]
    InvalidJournalEntry {
        /// The offending field (wire name).
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A reminder failed edge validation.
    #[error("Invalid reminder field '{field}': {message}")]
    InvalidReminder {
        /// The offending field (wire name).
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A notification recipient was missing or malformed.
    #[error("Invalid {channel} recipient '{recipient}'")]
    InvalidRecipient {
        /// The delivery channel ("email" or "sms").
        channel: String,
        /// The recipient as supplied.
        recipient: String,
    },

    /// The delivery channel has no transport configured.
    #[error("{channel} service not configured properly")]
    ChannelNotConfigured {
        /// The delivery channel ("email" or "sms").
        channel: String,
    },

    /// The transport accepted the message but delivery failed.
    #[error("Failed to deliver {channel} to '{recipient}': {message}")]
    DeliveryFailed {
        /// The delivery channel ("email" or "sms").
        channel: String,
        /// The intended recipient.
        recipient: String,
        /// The transport's failure description.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
