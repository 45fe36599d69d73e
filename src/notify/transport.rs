//! Transports.
//!
//! The log transports stand in for an SMTP relay and an SMS gateway: they
//! emit a tracing event per message and hand back a generated message id.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::config::NotificationConfig;
use crate::error::{EngineError, EngineResult};

use super::{DeliveryReceipt, EmailMessage, EmailSender, SmsMessage, SmsSender};

/// Writes each email to the log.
#[derive(Debug, Clone, Default)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, message: &EmailMessage) -> EngineResult<DeliveryReceipt> {
        let message_id = format!("<{}@pay-package-engine>", Uuid::new_v4());
        info!(
            message_id = %message_id,
            to = %message.to,
            from = %message.from,
            subject = %message.subject,
            body_bytes = message.html_body.len(),
            "email sent"
        );
        Ok(DeliveryReceipt { message_id })
    }
}

/// Writes each text message to the log.
#[derive(Debug, Clone)]
pub struct LogSmsSender {
    from_number: String,
}

impl LogSmsSender {
    /// Creates a sender that reports messages as coming from `from_number`.
    pub fn new(from_number: impl Into<String>) -> Self {
        Self {
            from_number: from_number.into(),
        }
    }
}

#[async_trait]
impl SmsSender for LogSmsSender {
    async fn send(&self, message: &SmsMessage) -> EngineResult<DeliveryReceipt> {
        let message_id = format!("SM{}", Uuid::new_v4().simple());
        info!(
            message_id = %message_id,
            to = %message.to,
            from = %self.from_number,
            body_chars = message.body.chars().count(),
            "sms sent"
        );
        Ok(DeliveryReceipt { message_id })
    }
}

/// Rejects every email; used when email is disabled.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredEmailSender;

#[async_trait]
impl EmailSender for UnconfiguredEmailSender {
    async fn send(&self, _message: &EmailMessage) -> EngineResult<DeliveryReceipt> {
        Err(EngineError::ChannelNotConfigured {
            channel: "Email".to_string(),
        })
    }
}

/// Rejects every text message; used when SMS has no sending number.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredSmsSender;

#[async_trait]
impl SmsSender for UnconfiguredSmsSender {
    async fn send(&self, _message: &SmsMessage) -> EngineResult<DeliveryReceipt> {
        Err(EngineError::ChannelNotConfigured {
            channel: "SMS".to_string(),
        })
    }
}

/// Picks the email transport described by the configuration.
pub fn email_sender_from_config(config: &NotificationConfig) -> Arc<dyn EmailSender> {
    if config.email.enabled {
        Arc::new(LogEmailSender)
    } else {
        Arc::new(UnconfiguredEmailSender)
    }
}

/// Picks the SMS transport described by the configuration.
pub fn sms_sender_from_config(config: &NotificationConfig) -> Arc<dyn SmsSender> {
    match config.sms.from_number.as_deref() {
        Some(number) if config.sms.is_configured() => Arc::new(LogSmsSender::new(number.trim())),
        _ => Arc::new(UnconfiguredSmsSender),
    }
}
