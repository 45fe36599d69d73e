//! Sending a stored pay package and recording the attempt.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Channel, CommunicationLog, DeliveryStatus, NewCommunicationLog, PayPackage};
use crate::storage::Storage;
use crate::summary::SummaryFormatter;

use super::{
    DeliveryReceipt, EmailMessage, EmailSender, SmsMessage, SmsSender, email_sender_from_config,
    sms_sender_from_config,
};

/// A successful delivery.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOutcome {
    /// The transport's identifier for the message.
    pub message_id: String,
    /// The recorded attempt.
    pub communication_log: CommunicationLog,
}

/// Sends pay packages over email or SMS.
#[derive(Clone)]
pub struct Notifier {
    storage: Arc<dyn Storage>,
    formatter: SummaryFormatter,
    email: Arc<dyn EmailSender>,
    sms: Arc<dyn SmsSender>,
    email_from: String,
}

impl Notifier {
    /// Creates a notifier with explicit transports.
    pub fn new(
        storage: Arc<dyn Storage>,
        formatter: SummaryFormatter,
        email: Arc<dyn EmailSender>,
        sms: Arc<dyn SmsSender>,
        email_from: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            formatter,
            email,
            sms,
            email_from: email_from.into(),
        }
    }

    /// Creates a notifier whose transports and agency come from configuration.
    pub fn from_config(storage: Arc<dyn Storage>, config: &AppConfig) -> Self {
        let email = &config.notifications.email;
        Self::new(
            storage,
            SummaryFormatter::new(config.agency.clone()),
            email_sender_from_config(&config.notifications),
            sms_sender_from_config(&config.notifications),
            format!("\"{}\" <{}>", email.from_name, email.from_address),
        )
    }

    /// Emails a package summary to `recipient`.
    pub async fn send_email(
        &self,
        pay_package_id: u64,
        recipient: &str,
    ) -> EngineResult<DeliveryOutcome> {
        let recipient = recipient.trim();
        if !is_valid_email(recipient) {
            return Err(invalid_recipient(Channel::Email, recipient));
        }
        let package = self.load(pay_package_id)?;

        let message = EmailMessage {
            to: recipient.to_string(),
            from: self.email_from.clone(),
            subject: self.formatter.email_subject(&package.result),
            html_body: self.formatter.email_html(&package.result),
        };
        let sent = self.email.send(&message).await;

        self.record(pay_package_id, Channel::Email, recipient, sent)
    }

    /// Texts a package summary to `recipient`.
    pub async fn send_sms(
        &self,
        pay_package_id: u64,
        recipient: &str,
    ) -> EngineResult<DeliveryOutcome> {
        let recipient = recipient.trim();
        if !is_valid_phone_number(recipient) {
            return Err(invalid_recipient(Channel::Sms, recipient));
        }
        let package = self.load(pay_package_id)?;

        let message = SmsMessage {
            to: recipient.to_string(),
            body: self.formatter.sms_text(&package.result),
        };
        let sent = self.sms.send(&message).await;

        self.record(pay_package_id, Channel::Sms, recipient, sent)
    }

    fn load(&self, pay_package_id: u64) -> EngineResult<PayPackage> {
        self.storage
            .get_pay_package(pay_package_id)
            .ok_or(EngineError::PayPackageNotFound { id: pay_package_id })
    }

    fn record(
        &self,
        pay_package_id: u64,
        channel: Channel,
        recipient: &str,
        sent: EngineResult<DeliveryReceipt>,
    ) -> EngineResult<DeliveryOutcome> {
        match sent {
            Ok(receipt) => {
                let communication_log = self.storage.create_communication_log(NewCommunicationLog {
                    pay_package_id,
                    channel,
                    recipient: recipient.to_string(),
                    status: DeliveryStatus::Success,
                    error_message: None,
                });
                self.storage.mark_delivered(pay_package_id, channel);
                info!(
                    pay_package_id,
                    channel = %channel,
                    message_id = %receipt.message_id,
                    "pay package delivered"
                );
                Ok(DeliveryOutcome {
                    message_id: receipt.message_id,
                    communication_log,
                })
            }
            Err(error) => {
                self.storage.create_communication_log(NewCommunicationLog {
                    pay_package_id,
                    channel,
                    recipient: recipient.to_string(),
                    status: DeliveryStatus::Failed,
                    error_message: Some(error.to_string()),
                });
                warn!(
                    pay_package_id,
                    channel = %channel,
                    error = %error,
                    "pay package delivery failed"
                );
                Err(error)
            }
        }
    }
}

fn invalid_recipient(channel: Channel, recipient: &str) -> EngineError {
    EngineError::InvalidRecipient {
        channel: channel.to_string(),
        recipient: recipient.to_string(),
    }
}

/// One `@` with text on both sides, a dot in the domain, no whitespace.
fn is_valid_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// 7 to 15 digits, optionally led by `+`, with common separators allowed.
fn is_valid_phone_number(number: &str) -> bool {
    let rest = number.strip_prefix('+').unwrap_or(number);
    let mut digits = 0;
    for ch in rest.chars() {
        match ch {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' | '.' => {}
            _ => return false,
        }
    }
    (7..=15).contains(&digits)
}
