//! Per-day entry model and on-disk shape normalization.
//!
//! # Responsibility
//! - Represent one day's completion record in a single normalized form.
//! - Accept both persisted shapes on read: a bare percentage number (legacy)
//!   and a structured `{percentage, description}` object.
//!
//! # Invariants
//! - `percentage` is always within `[0, 100]` after construction.
//! - A fully completed entry (`percentage == 100`) never carries a
//!   description.
//! - Writes emit the structured object only when a description is present;
//!   otherwise the bare number form is written. Readers must handle both
//!   shapes indefinitely.

use serde::{Deserialize, Serialize};

/// Sentinel percentage meaning "no record exists for this date".
///
/// Distinct from `0`, which is an explicit "not done" mark.
pub const NO_RECORD: i32 = -1;

/// Normalized in-memory record of one day's completion for one habit.
///
/// Construction clamps and applies the description-discard rule, so a value
/// of this type is valid by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredEntry", into = "StoredEntry")]
pub struct Entry {
    percentage: u8,
    description: Option<String>,
}

impl Entry {
    /// Builds an entry from raw caller input.
    ///
    /// # Contract
    /// - `percentage` is clamped to `[0, 100]`, never rejected.
    /// - The description is kept only for incomplete entries; empty or
    ///   whitespace-only text normalizes to `None`.
    pub fn new(percentage: i64, description: Option<&str>) -> Self {
        let percentage = clamp_percentage(percentage);
        let description = match description {
            Some(text) if percentage < 100 => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            _ => None,
        };
        Self {
            percentage,
            description,
        }
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.percentage == 100
    }
}

/// On-disk entry shape, disambiguated purely by JSON type.
///
/// Legacy payloads store a bare number; current payloads store an object
/// when a note is attached. There is no version field, so both variants
/// remain readable forever.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredEntry {
    Bare(i64),
    Structured {
        percentage: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl From<StoredEntry> for Entry {
    fn from(stored: StoredEntry) -> Self {
        match stored {
            StoredEntry::Bare(percentage) => Entry::new(percentage, None),
            StoredEntry::Structured {
                percentage,
                description,
            } => Entry::new(percentage, description.as_deref()),
        }
    }
}

impl From<Entry> for StoredEntry {
    fn from(entry: Entry) -> Self {
        match entry.description {
            Some(description) => StoredEntry::Structured {
                percentage: i64::from(entry.percentage),
                description: Some(description),
            },
            None => StoredEntry::Bare(i64::from(entry.percentage)),
        }
    }
}

/// Saturates any raw integer into the valid percentage range.
pub fn clamp_percentage(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Returns the percentage for an entry slot, or [`NO_RECORD`] when the slot
/// is entirely absent. Total over every input shape.
pub fn entry_percentage(entry: Option<&Entry>) -> i32 {
    entry.map_or(NO_RECORD, |entry| i32::from(entry.percentage))
}

/// Returns the description for an entry slot when one applies. Total over
/// every input shape.
pub fn entry_description(entry: Option<&Entry>) -> Option<&str> {
    entry.and_then(Entry::description)
}

/// Derived state of one calendar day cell.
///
/// Never stored; recomputed from whatever percentage is read for the date.
/// Days change state only through explicit writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    NoRecord,
    Incomplete,
    Partial,
    Complete,
}

impl DayState {
    pub fn from_percentage(percentage: i32) -> Self {
        match percentage {
            i32::MIN..=-1 => Self::NoRecord,
            0 => Self::Incomplete,
            1..=99 => Self::Partial,
            _ => Self::Complete,
        }
    }

    pub fn of(entry: Option<&Entry>) -> Self {
        Self::from_percentage(entry_percentage(entry))
    }
}
