//! Delivery of pay package summaries to providers.
//!
//! Transports implement [`EmailSender`] or [`SmsSender`]. The [`Notifier`]
//! renders a stored package, hands it to a transport and records the attempt
//! as a communication log whether or not it succeeded.

mod dispatch;
mod transport;

pub use dispatch::{DeliveryOutcome, Notifier};
pub use transport::{
    LogEmailSender, LogSmsSender, UnconfiguredEmailSender, UnconfiguredSmsSender,
    email_sender_from_config, sms_sender_from_config,
};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::EngineResult;

/// An HTML email ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Sender, as `"Name" <address>`.
    pub from: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html_body: String,
}

/// A text message ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    /// Recipient phone number.
    pub to: String,
    /// Plain-text body.
    pub body: String,
}

/// What a transport returns once it has accepted a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReceipt {
    /// The transport's identifier for the message.
    pub message_id: String,
}

/// Sends email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends one message.
    async fn send(&self, message: &EmailMessage) -> EngineResult<DeliveryReceipt>;
}

/// Sends SMS.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Sends one message.
    async fn send(&self, message: &SmsMessage) -> EngineResult<DeliveryReceipt>;
}
