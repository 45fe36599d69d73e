//! Persistence for pay packages and their follow-up records.
//!
//! The [`Storage`] trait is what the HTTP layer and the notifier depend on;
//! [`MemoryStore`] is the in-process implementation.
//!
//! Lookups of unknown ids return `None`, and deletes of unknown ids return
//! `false`. Neither is an error at this layer. Writes that attach a record to a
//! package return an [`EngineResult`] naming whichever record was missing.

mod memory;
mod seed;

pub use memory::MemoryStore;
pub use seed::sample_packages;

use chrono::{DateTime, Utc};

use crate::error::EngineResult;
use crate::models::{
    Channel, CommunicationLog, JournalEntry, NewCommunicationLog, NewJournalEntry, NewReminder,
    PayPackage, PayPackageResult, Reminder,
};

/// A keyed store for pay packages, journal entries, reminders and
/// communication logs.
///
/// Implementations assign unique, increasing ids per record kind, and a read
/// concurrent with a write observes the record either entirely before or
/// entirely after that write.
pub trait Storage: Send + Sync {
    /// Stores a calculated package, assigning its id and creation time.
    fn create_pay_package(&self, result: PayPackageResult) -> PayPackage;

    /// Looks up a package.
    fn get_pay_package(&self, id: u64) -> Option<PayPackage>;

    /// All packages, newest first.
    fn list_pay_packages(&self) -> Vec<PayPackage>;

    /// The `limit` newest packages.
    fn recent_pay_packages(&self, limit: usize) -> Vec<PayPackage>;

    /// Replaces a package's calculated content. Id, creation time and
    /// delivery flags are kept.
    fn update_pay_package(&self, id: u64, result: PayPackageResult) -> Option<PayPackage>;

    /// Records that a package was delivered over `channel`.
    fn mark_delivered(&self, id: u64, channel: Channel) -> Option<PayPackage>;

    /// Deletes a package together with its journal entries and reminders.
    /// Communication logs are kept.
    fn delete_pay_package(&self, id: u64) -> bool;

    /// Stores a journal entry against an existing package.
    ///
    /// The package check and the insert are one atomic step, so an entry is
    /// never left behind by a concurrent package delete. Fails with
    /// `PayPackageNotFound` when the package does not exist.
    fn create_journal_entry(&self, entry: NewJournalEntry) -> EngineResult<JournalEntry>;

    /// Looks up a journal entry.
    fn get_journal_entry(&self, id: u64) -> Option<JournalEntry>;

    /// All journal entries, newest first.
    fn list_journal_entries(&self) -> Vec<JournalEntry>;

    /// Journal entries for one package, newest first.
    fn journal_entries_for_package(&self, pay_package_id: u64) -> Vec<JournalEntry>;

    /// Replaces a journal entry's content and bumps its update time.
    ///
    /// Fails with `JournalEntryNotFound`, or with `PayPackageNotFound` when the
    /// entry is moved to a package that does not exist.
    fn update_journal_entry(
        &self,
        id: u64,
        entry: NewJournalEntry,
    ) -> EngineResult<JournalEntry>;

    /// Deletes a journal entry.
    fn delete_journal_entry(&self, id: u64) -> bool;

    /// Stores a reminder against an existing package, atomically with the
    /// package check. Fails with `PayPackageNotFound`.
    fn create_reminder(&self, reminder: NewReminder) -> EngineResult<Reminder>;

    /// Looks up a reminder.
    fn get_reminder(&self, id: u64) -> Option<Reminder>;

    /// Reminders for one package, in display order.
    fn reminders_for_package(&self, pay_package_id: u64) -> Vec<Reminder>;

    /// All reminders in display order, optionally including completed ones.
    fn all_reminders(&self, include_completed: bool) -> Vec<Reminder>;

    /// Incomplete reminders due on or before `now + days`, overdue ones
    /// included, soonest first.
    fn upcoming_reminders(&self, days: i64, now: DateTime<Utc>) -> Vec<Reminder>;

    /// Replaces a reminder's content. Id and creation time are kept.
    ///
    /// Fails with `ReminderNotFound` or `PayPackageNotFound`.
    fn update_reminder(&self, id: u64, reminder: NewReminder) -> EngineResult<Reminder>;

    /// Sets a reminder's completion flag.
    fn set_reminder_completed(&self, id: u64, is_completed: bool) -> Option<Reminder>;

    /// Deletes a reminder.
    fn delete_reminder(&self, id: u64) -> bool;

    /// Records a delivery attempt.
    fn create_communication_log(&self, log: NewCommunicationLog) -> CommunicationLog;

    /// Delivery attempts for one package, newest first.
    fn communication_logs(&self, pay_package_id: u64) -> Vec<CommunicationLog>;
}
