//! Communication log model.
//!
//! Every attempt to send a pay package to a provider, successful or not, is
//! recorded as a [`CommunicationLog`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The delivery channel used for a communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Email with an HTML body.
    Email,
    /// SMS with a plain-text body.
    Sms,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Sms => write!(f, "sms"),
        }
    }
}

/// Outcome of a delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// The transport accepted the message.
    Success,
    /// The attempt failed; see the log's error message.
    Failed,
}

/// Fields recorded for a new communication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommunicationLog {
    /// The package that was sent.
    pub pay_package_id: u64,
    /// The channel used.
    pub channel: Channel,
    /// Email address or phone number.
    pub recipient: String,
    /// Outcome of the attempt.
    pub status: DeliveryStatus,
    /// Failure description, when the attempt failed.
    pub error_message: Option<String>,
}

/// A stored communication attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationLog {
    /// Storage-assigned identity.
    pub id: u64,
    /// The package that was sent.
    pub pay_package_id: u64,
    /// The channel used.
    #[serde(rename = "type")]
    pub channel: Channel,
    /// Email address or phone number.
    pub recipient: String,
    /// When the attempt was recorded.
    pub sent_at: DateTime<Utc>,
    /// Outcome of the attempt.
    pub status: DeliveryStatus,
    /// Failure description, when the attempt failed.
    pub error_message: Option<String>,
}
