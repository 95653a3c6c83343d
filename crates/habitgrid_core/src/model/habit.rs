//! Habit domain model.
//!
//! # Responsibility
//! - Define the durable habit record and its creation rules.
//! - Keep name validation in the model so every write path shares it.
//!
//! # Invariants
//! - `id` is stable and never reused for another habit.
//! - `name` is non-empty after trimming.
//! - `created_at` is immutable and bounds calendar navigation.
//! - At most one entry exists per date key.

use crate::model::entry::{DayState, Entry};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a habit, the sole lookup key.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type HabitId = Uuid;

/// Model-level validation failures for habit input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitValidationError {
    /// The name is empty once surrounding whitespace is removed.
    EmptyName,
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "habit name is empty after trimming"),
        }
    }
}

impl Error for HabitValidationError {}

/// Trims a habit name and rejects names that are blank after trimming.
pub fn normalize_name(raw: &str) -> Result<String, HabitValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HabitValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// A user-defined recurring activity tracked per calendar day.
///
/// Serialized field names stay camelCase to remain byte-compatible with the
/// persisted payloads of earlier app versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Stable global ID, generated at creation.
    pub id: HabitId,
    /// Display name, trimmed at creation. Duplicates across habits are
    /// permitted.
    pub name: String,
    /// Hex color token, display-only. Not validated beyond being a string.
    pub color: String,
    /// Creation timestamp; months before it are not navigable.
    pub created_at: DateTime<Utc>,
    /// `YYYY-MM-DD` date key -> entry. Lookups are always by explicit key.
    #[serde(default)]
    pub entries: BTreeMap<String, Entry>,
}

impl Habit {
    /// Creates a habit with a fresh id, the current timestamp and no
    /// entries.
    pub fn new(name: &str, color: impl Into<String>) -> Result<Self, HabitValidationError> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: normalize_name(name)?,
            color: color.into(),
            created_at: Utc::now(),
            entries: BTreeMap::new(),
        })
    }

    /// Returns the entry recorded for a date key, if any.
    pub fn entry(&self, date: &str) -> Option<&Entry> {
        self.entries.get(date)
    }

    /// Creation date in the local calendar, for month navigation bounds.
    pub fn created_date_local(&self) -> NaiveDate {
        self.created_at.with_timezone(&Local).date_naive()
    }

    /// Tallies recorded entries by their derived day state.
    pub fn completion_stats(&self) -> CompletionStats {
        let mut stats = CompletionStats::default();
        for entry in self.entries.values() {
            stats.total += 1;
            match DayState::of(Some(entry)) {
                DayState::Complete => stats.completed += 1,
                DayState::Partial => stats.partial += 1,
                DayState::Incomplete => stats.not_completed += 1,
                DayState::NoRecord => {}
            }
        }
        stats
    }
}

/// Per-habit tallies over all recorded entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionStats {
    pub total: usize,
    pub completed: usize,
    pub partial: usize,
    pub not_completed: usize,
}
