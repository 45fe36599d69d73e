//! Reminder model.
//!
//! Reminders are dated follow-ups attached to a single pay package. Besides the
//! record itself this module holds the two display rules reminders carry: the
//! due-date classification and the list ordering.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How urgent a reminder is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Sort rank, most urgent first.
    fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// Where a reminder's due date falls relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    /// Due earlier today or later today.
    Today,
    /// Due tomorrow.
    Tomorrow,
    /// Due before today.
    Overdue,
    /// Due after tomorrow.
    Upcoming,
}

impl DueStatus {
    /// Classifies a due date against `now` by calendar day.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use pay_package_engine::models::DueStatus;
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
    /// assert_eq!(DueStatus::classify(now - Duration::hours(2), now), DueStatus::Today);
    /// assert_eq!(DueStatus::classify(now + Duration::days(1), now), DueStatus::Tomorrow);
    /// assert_eq!(DueStatus::classify(now - Duration::days(3), now), DueStatus::Overdue);
    /// ```
    pub fn classify(due: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let due_day = due.date_naive();

        if due_day == today {
            DueStatus::Today
        } else if Some(due_day) == today.succ_opt() {
            DueStatus::Tomorrow
        } else if due < now {
            DueStatus::Overdue
        } else {
            DueStatus::Upcoming
        }
    }
}

/// Fields a caller supplies to create or replace a reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    /// The owning pay package.
    pub pay_package_id: u64,
    /// Short title.
    pub title: String,
    /// Optional detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the reminder is due.
    pub due_date: DateTime<Utc>,
    /// Urgency; defaults to medium.
    #[serde(default)]
    pub priority: Priority,
    /// Completion flag; defaults to false.
    #[serde(default)]
    pub is_completed: bool,
}

impl NewReminder {
    /// Rejects reminders with a blank title.
    pub fn validate(&self) -> EngineResult<()> {
        if self.title.trim().is_empty() {
            return Err(EngineError::InvalidReminder {
                field: "title".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// A stored reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Storage-assigned identity.
    pub id: u64,
    /// The owning pay package.
    pub pay_package_id: u64,
    /// Short title.
    pub title: String,
    /// Optional detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the reminder is due.
    pub due_date: DateTime<Utc>,
    /// Urgency.
    pub priority: Priority,
    /// Whether the reminder has been dealt with.
    pub is_completed: bool,
    /// When the reminder was created.
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    /// Classifies this reminder's due date against `now`.
    pub fn due_status(&self, now: DateTime<Utc>) -> DueStatus {
        DueStatus::classify(self.due_date, now)
    }

    /// True if the reminder is still open and due no later than `now + days`.
    ///
    /// A window reaching past the representable calendar has no upper bound.
    pub fn is_due_within(&self, days: i64, now: DateTime<Utc>) -> bool {
        if self.is_completed {
            return false;
        }
        Duration::try_days(days)
            .and_then(|window| now.checked_add_signed(window))
            .is_none_or(|horizon| self.due_date <= horizon)
    }
}

/// List ordering: incomplete before completed, then earliest due date, then
/// highest priority.
pub fn display_order(a: &Reminder, b: &Reminder) -> Ordering {
    a.is_completed
        .cmp(&b.is_completed)
        .then_with(|| a.due_date.cmp(&b.due_date))
        .then_with(|| a.priority.rank().cmp(&b.priority.rank()))
}

/// Sorts reminders into [`display_order`].
pub fn sort_for_display(reminders: &mut [Reminder]) {
    reminders.sort_by(display_order);
}
