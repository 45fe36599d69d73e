//! Core data models for the Pay Package Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod communication;
mod journal;
mod pay_package;
mod reminder;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, Deductions, PayBreakdown, PayPackageCalculation,
};
pub use communication::{Channel, CommunicationLog, DeliveryStatus, NewCommunicationLog};
pub use journal::{EntryType, JournalEntry, NewJournalEntry};
pub use pay_package::{PayPackage, PayPackageInput, PayPackageResult};
pub use reminder::{DueStatus, NewReminder, Priority, Reminder, display_order, sort_for_display};
