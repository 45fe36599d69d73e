//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AgencyProfile, AppConfig, NotificationConfig, ServiceConfig};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/adelphi/
/// ├── agency.yaml         # Agency name and contact details
/// ├── notifications.yaml  # Email sender and SMS settings
/// └── service.yaml        # Bind address and listing limits
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_package_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/adelphi")?;
/// println!("Agency: {}", loader.agency().name);
/// # Ok::<(), pay_package_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any of the three files is missing or contains
    /// invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let agency = Self::load_yaml::<AgencyProfile>(&path.join("agency.yaml"))?;
        let notifications =
            Self::load_yaml::<NotificationConfig>(&path.join("notifications.yaml"))?;
        let service = Self::load_yaml::<ServiceConfig>(&path.join("service.yaml"))?;

        Ok(Self {
            config: AppConfig {
                agency,
                notifications,
                service,
            },
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Returns the agency profile.
    pub fn agency(&self) -> &AgencyProfile {
        &self.config.agency
    }

    /// Returns the notification settings.
    pub fn notifications(&self) -> &NotificationConfig {
        &self.config.notifications
    }

    /// Returns the service settings.
    pub fn service(&self) -> &ServiceConfig {
        &self.config.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/adelphi"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "pay-package-config-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.agency().name, "Adelphi Healthcare Staffing");
        assert_eq!(
            loader.notifications().email.from_address,
            "info@adelphihealthcare.com"
        );
        assert_eq!(loader.service().recent_limit, 5);
        assert_eq!(loader.service().upcoming_reminder_days, 7);
    }

    #[test]
    fn test_shipped_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.agency(), &AgencyProfile::default());
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("./config/does-not-exist");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("agency.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("invalid");
        fs::write(dir.join("agency.yaml"), "name: [unclosed").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("agency.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_later_file_is_reported() {
        let dir = scratch_dir("partial");
        fs::write(
            dir.join("agency.yaml"),
            "name: Test Staffing\nshort_name: Test\naddress: 1 Main St\nphone: '555'\nemail: a@b.com\n",
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("notifications.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
