//! Configuration types for the pay package service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

/// The staffing agency that issues pay packages.
///
/// Rendered into email footers and SMS headers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgencyProfile {
    /// Full trading name (e.g., "Adelphi Healthcare Staffing").
    pub name: String,
    /// Short name used where space is tight, such as SMS.
    pub short_name: String,
    /// Postal address line.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
}

impl Default for AgencyProfile {
    fn default() -> Self {
        Self {
            name: "Adelphi Healthcare Staffing".to_string(),
            short_name: "Adelphi Healthcare".to_string(),
            address: "123 Healthcare Avenue, Suite 300, New York, NY 10001".to_string(),
            phone: "(800) 555-1234".to_string(),
            email: "info@adelphihealthcare.com".to_string(),
        }
    }
}

/// Outgoing email settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailSettings {
    /// Whether email delivery is available.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Sender address.
    pub from_address: String,
    /// Sender display name.
    pub from_name: String,
}

/// Outgoing SMS settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SmsSettings {
    /// Whether SMS delivery is available.
    #[serde(default)]
    pub enabled: bool,
    /// The sending phone number. SMS is treated as unconfigured without one.
    #[serde(default)]
    pub from_number: Option<String>,
}

impl SmsSettings {
    /// True when SMS is enabled and has a non-blank sending number.
    pub fn is_configured(&self) -> bool {
        self.enabled
            && self
                .from_number
                .as_deref()
                .is_some_and(|n| !n.trim().is_empty())
    }
}

/// Notification configuration file structure (`notifications.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    /// Email settings.
    pub email: EmailSettings,
    /// SMS settings.
    #[serde(default)]
    pub sms: SmsSettings,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            email: EmailSettings {
                enabled: true,
                from_address: "info@adelphihealthcare.com".to_string(),
                from_name: "Adelphi Healthcare Staffing".to_string(),
            },
            sms: SmsSettings::default(),
        }
    }
}

/// Service configuration file structure (`service.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Number of packages returned by the recent packages listing.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Default look-ahead window, in days, for upcoming reminders.
    #[serde(default = "default_upcoming_reminder_days")]
    pub upcoming_reminder_days: i64,
    /// Seed demonstration packages at startup.
    #[serde(default)]
    pub seed_sample_data: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            recent_limit: default_recent_limit(),
            upcoming_reminder_days: default_upcoming_reminder_days(),
            seed_sample_data: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_bind_address() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_recent_limit() -> usize {
    5
}

fn default_upcoming_reminder_days() -> i64 {
    7
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// The issuing agency.
    pub agency: AgencyProfile,
    /// Email and SMS settings.
    pub notifications: NotificationConfig,
    /// HTTP service settings.
    pub service: ServiceConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_defaults_fill_missing_fields() {
        let service: ServiceConfig = serde_yaml::from_str("seed_sample_data: true").unwrap();
        assert_eq!(service.recent_limit, 5);
        assert_eq!(service.upcoming_reminder_days, 7);
        assert_eq!(service.bind_address, "127.0.0.1:5000");
        assert!(service.seed_sample_data);
    }

    #[test]
    fn test_sms_requires_from_number() {
        let sms = SmsSettings {
            enabled: true,
            from_number: Some("  ".to_string()),
        };
        assert!(!sms.is_configured());

        let sms = SmsSettings {
            enabled: true,
            from_number: Some("+15555550100".to_string()),
        };
        assert!(sms.is_configured());

        let sms = SmsSettings {
            enabled: false,
            from_number: Some("+15555550100".to_string()),
        };
        assert!(!sms.is_configured());
    }

    #[test]
    fn test_default_agency_profile() {
        let agency = AgencyProfile::default();
        assert_eq!(agency.name, "Adelphi Healthcare Staffing");
        assert_eq!(agency.phone, "(800) 555-1234");
    }
}
