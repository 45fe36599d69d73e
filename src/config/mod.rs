//! Configuration loading for the Pay Package Engine.
//!
//! The service reads its agency profile, notification settings and HTTP
//! settings from YAML files in a single directory.
//!
//! # Example
//!
//! ```no_run
//! use pay_package_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/adelphi").unwrap();
//! println!("Loaded agency: {}", config.agency().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AgencyProfile, AppConfig, EmailSettings, NotificationConfig, ServiceConfig, SmsSettings,
};
