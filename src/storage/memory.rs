//! In-memory storage.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Channel, CommunicationLog, JournalEntry, NewCommunicationLog, NewJournalEntry, NewReminder,
    PayPackage, PayPackageResult, Reminder, sort_for_display,
};

use super::Storage;
use super::seed::sample_packages;

#[derive(Debug, Default)]
struct Tables {
    pay_packages: BTreeMap<u64, PayPackage>,
    journal_entries: BTreeMap<u64, JournalEntry>,
    reminders: BTreeMap<u64, Reminder>,
    communication_logs: BTreeMap<u64, CommunicationLog>,
    next_pay_package_id: u64,
    next_journal_entry_id: u64,
    next_reminder_id: u64,
    next_communication_log_id: u64,
}

impl Tables {
    fn require_pay_package(&self, id: u64) -> EngineResult<()> {
        if self.pay_packages.contains_key(&id) {
            Ok(())
        } else {
            Err(EngineError::PayPackageNotFound { id })
        }
    }
}

fn next_id(counter: &mut u64) -> u64 {
    *counter += 1;
    *counter
}

/// Newest first, ties broken by the higher id.
fn newest_first<T>(mut items: Vec<T>, key: impl Fn(&T) -> (DateTime<Utc>, u64)) -> Vec<T> {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

/// A [`Storage`] held entirely in process memory.
///
/// All tables and id counters sit behind one lock, so every operation is
/// atomic with respect to every other.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the demonstration packages.
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        for package in sample_packages() {
            store.create_pay_package(package);
        }
        store
    }
}

impl Storage for MemoryStore {
    fn create_pay_package(&self, result: PayPackageResult) -> PayPackage {
        let mut tables = self.tables.write();
        let id = next_id(&mut tables.next_pay_package_id);
        let package = PayPackage {
            id,
            created_at: Utc::now(),
            email_sent: false,
            sms_sent: false,
            result,
        };
        tables.pay_packages.insert(id, package.clone());
        debug!(pay_package_id = id, "pay package stored");
        package
    }

    fn get_pay_package(&self, id: u64) -> Option<PayPackage> {
        self.tables.read().pay_packages.get(&id).cloned()
    }

    fn list_pay_packages(&self) -> Vec<PayPackage> {
        let packages = self.tables.read().pay_packages.values().cloned().collect();
        newest_first(packages, |p| (p.created_at, p.id))
    }

    fn recent_pay_packages(&self, limit: usize) -> Vec<PayPackage> {
        let mut packages = self.list_pay_packages();
        packages.truncate(limit);
        packages
    }

    fn update_pay_package(&self, id: u64, result: PayPackageResult) -> Option<PayPackage> {
        let mut tables = self.tables.write();
        let package = tables.pay_packages.get_mut(&id)?;
        package.result = result;
        debug!(pay_package_id = id, "pay package updated");
        Some(package.clone())
    }

    fn mark_delivered(&self, id: u64, channel: Channel) -> Option<PayPackage> {
        let mut tables = self.tables.write();
        let package = tables.pay_packages.get_mut(&id)?;
        match channel {
            Channel::Email => package.email_sent = true,
            Channel::Sms => package.sms_sent = true,
        }
        Some(package.clone())
    }

    fn delete_pay_package(&self, id: u64) -> bool {
        let mut tables = self.tables.write();
        if tables.pay_packages.remove(&id).is_none() {
            return false;
        }
        tables.journal_entries.retain(|_, e| e.pay_package_id != id);
        tables.reminders.retain(|_, r| r.pay_package_id != id);
        debug!(pay_package_id = id, "pay package deleted");
        true
    }

    fn create_journal_entry(&self, entry: NewJournalEntry) -> EngineResult<JournalEntry> {
        let mut tables = self.tables.write();
        tables.require_pay_package(entry.pay_package_id)?;
        let id = next_id(&mut tables.next_journal_entry_id);
        let now = Utc::now();
        let stored = JournalEntry {
            id,
            pay_package_id: entry.pay_package_id,
            title: entry.title,
            content: entry.content,
            entry_type: entry.entry_type,
            created_at: now,
            updated_at: now,
        };
        tables.journal_entries.insert(id, stored.clone());
        debug!(
            journal_entry_id = id,
            pay_package_id = stored.pay_package_id,
            "journal entry stored"
        );
        Ok(stored)
    }

    fn get_journal_entry(&self, id: u64) -> Option<JournalEntry> {
        self.tables.read().journal_entries.get(&id).cloned()
    }

    fn list_journal_entries(&self) -> Vec<JournalEntry> {
        let entries = self.tables.read().journal_entries.values().cloned().collect();
        newest_first(entries, |e| (e.created_at, e.id))
    }

    fn journal_entries_for_package(&self, pay_package_id: u64) -> Vec<JournalEntry> {
        let entries = self
            .tables
            .read()
            .journal_entries
            .values()
            .filter(|e| e.pay_package_id == pay_package_id)
            .cloned()
            .collect();
        newest_first(entries, |e| (e.created_at, e.id))
    }

    fn update_journal_entry(
        &self,
        id: u64,
        entry: NewJournalEntry,
    ) -> EngineResult<JournalEntry> {
        let mut tables = self.tables.write();
        if !tables.journal_entries.contains_key(&id) {
            return Err(EngineError::JournalEntryNotFound { id });
        }
        tables.require_pay_package(entry.pay_package_id)?;
        let stored = tables
            .journal_entries
            .get_mut(&id)
            .ok_or(EngineError::JournalEntryNotFound { id })?;
        stored.pay_package_id = entry.pay_package_id;
        stored.title = entry.title;
        stored.content = entry.content;
        stored.entry_type = entry.entry_type;
        stored.updated_at = Utc::now().max(stored.created_at);
        Ok(stored.clone())
    }

    fn delete_journal_entry(&self, id: u64) -> bool {
        self.tables.write().journal_entries.remove(&id).is_some()
    }

    fn create_reminder(&self, reminder: NewReminder) -> EngineResult<Reminder> {
        let mut tables = self.tables.write();
        tables.require_pay_package(reminder.pay_package_id)?;
        let id = next_id(&mut tables.next_reminder_id);
        let stored = Reminder {
            id,
            pay_package_id: reminder.pay_package_id,
            title: reminder.title,
            description: reminder.description,
            due_date: reminder.due_date,
            priority: reminder.priority,
            is_completed: reminder.is_completed,
            created_at: Utc::now(),
        };
        tables.reminders.insert(id, stored.clone());
        debug!(
            reminder_id = id,
            pay_package_id = stored.pay_package_id,
            "reminder stored"
        );
        Ok(stored)
    }

    fn get_reminder(&self, id: u64) -> Option<Reminder> {
        self.tables.read().reminders.get(&id).cloned()
    }

    fn reminders_for_package(&self, pay_package_id: u64) -> Vec<Reminder> {
        let mut reminders: Vec<Reminder> = self
            .tables
            .read()
            .reminders
            .values()
            .filter(|r| r.pay_package_id == pay_package_id)
            .cloned()
            .collect();
        sort_for_display(&mut reminders);
        reminders
    }

    fn all_reminders(&self, include_completed: bool) -> Vec<Reminder> {
        let mut reminders: Vec<Reminder> = self
            .tables
            .read()
            .reminders
            .values()
            .filter(|r| include_completed || !r.is_completed)
            .cloned()
            .collect();
        sort_for_display(&mut reminders);
        reminders
    }

    fn upcoming_reminders(&self, days: i64, now: DateTime<Utc>) -> Vec<Reminder> {
        let mut reminders: Vec<Reminder> = self
            .tables
            .read()
            .reminders
            .values()
            .filter(|r| r.is_due_within(days, now))
            .cloned()
            .collect();
        reminders.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.id.cmp(&b.id)));
        reminders
    }

    fn update_reminder(&self, id: u64, reminder: NewReminder) -> EngineResult<Reminder> {
        let mut tables = self.tables.write();
        if !tables.reminders.contains_key(&id) {
            return Err(EngineError::ReminderNotFound { id });
        }
        tables.require_pay_package(reminder.pay_package_id)?;
        let stored = tables
            .reminders
            .get_mut(&id)
            .ok_or(EngineError::ReminderNotFound { id })?;
        stored.pay_package_id = reminder.pay_package_id;
        stored.title = reminder.title;
        stored.description = reminder.description;
        stored.due_date = reminder.due_date;
        stored.priority = reminder.priority;
        stored.is_completed = reminder.is_completed;
        Ok(stored.clone())
    }

    fn set_reminder_completed(&self, id: u64, is_completed: bool) -> Option<Reminder> {
        let mut tables = self.tables.write();
        let stored = tables.reminders.get_mut(&id)?;
        stored.is_completed = is_completed;
        Some(stored.clone())
    }

    fn delete_reminder(&self, id: u64) -> bool {
        self.tables.write().reminders.remove(&id).is_some()
    }

    fn create_communication_log(&self, log: NewCommunicationLog) -> CommunicationLog {
        let mut tables = self.tables.write();
        let id = next_id(&mut tables.next_communication_log_id);
        let stored = CommunicationLog {
            id,
            pay_package_id: log.pay_package_id,
            channel: log.channel,
            recipient: log.recipient,
            sent_at: Utc::now(),
            status: log.status,
            error_message: log.error_message,
        };
        tables.communication_logs.insert(id, stored.clone());
        stored
    }

    fn communication_logs(&self, pay_package_id: u64) -> Vec<CommunicationLog> {
        let logs = self
            .tables
            .read()
            .communication_logs
            .values()
            .filter(|l| l.pay_package_id == pay_package_id)
            .cloned()
            .collect();
        newest_first(logs, |l| (l.sent_at, l.id))
    }
}
