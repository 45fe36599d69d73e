//! HTTP API module for the Pay Package Engine.
//!
//! This module provides the REST endpoints for previewing calculations,
//! storing pay packages, sending them to providers, and keeping journal
//! entries and reminders against them.

mod handlers;
mod journal;
mod notifications;
mod pay_packages;
mod reminders;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use notifications::DeliveryResponse;
pub use reminders::ReminderView;
pub use request::{
    CompleteReminderRequest, PayPackageRequest, ReminderListQuery, SendEmailRequest,
    SendSmsRequest, UpcomingQuery,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
