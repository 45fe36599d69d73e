//! Journal entry model.
//!
//! Journal entries are recruiter notes attached to a single pay package.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of interaction a journal entry records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    /// A general note.
    #[default]
    Note,
    /// A response received from the provider.
    Response,
    /// A follow-up to do or done.
    Followup,
    /// A phone call.
    Call,
    /// An email exchange.
    Email,
    /// Anything else.
    Other,
}

/// Fields a caller supplies to create or replace a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntry {
    /// The owning pay package.
    pub pay_package_id: u64,
    /// Short title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Kind of entry; defaults to a note.
    #[serde(default)]
    pub entry_type: EntryType,
}

impl NewJournalEntry {
    /// Rejects entries with a blank title or content.
    pub fn validate(&self) -> EngineResult<()> {
        if self.title.trim().is_empty() {
            return Err(EngineError::InvalidJournalEntry {
                field: "title".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.content.trim().is_empty() {
            return Err(EngineError::InvalidJournalEntry {
                field: "content".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// A stored journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Storage-assigned identity.
    pub id: u64,
    /// The owning pay package.
    pub pay_package_id: u64,
    /// Short title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Kind of entry.
    pub entry_type: EntryType,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last changed.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_defaults_to_note() {
        let json = r#"{"payPackageId": 1, "title": "Offer", "content": "Sent offer"}"#;
        let entry: NewJournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.entry_type, EntryType::Note);
    }

    #[test]
    fn test_entry_type_vocabulary() {
        for (text, expected) in [
            ("\"note\"", EntryType::Note),
            ("\"response\"", EntryType::Response),
            ("\"followup\"", EntryType::Followup),
            ("\"call\"", EntryType::Call),
            ("\"email\"", EntryType::Email),
            ("\"other\"", EntryType::Other),
        ] {
            let parsed: EntryType = serde_json::from_str(text).unwrap();
            assert_eq!(parsed, expected);
        }
        assert!(serde_json::from_str::<EntryType>("\"memo\"").is_err());
    }

    #[test]
    fn test_blank_content_is_rejected() {
        let entry = NewJournalEntry {
            pay_package_id: 1,
            title: "Call".to_string(),
            content: " ".to_string(),
            entry_type: EntryType::Call,
        };
        match entry.validate() {
            Err(EngineError::InvalidJournalEntry { field, .. }) => assert_eq!(field, "content"),
            other => panic!("Expected InvalidJournalEntry, got {:?}", other),
        }
    }
}
