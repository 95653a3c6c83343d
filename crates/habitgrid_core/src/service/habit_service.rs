//! Habit use-case service.
//!
//! # Responsibility
//! - Provide the entry points view shells call: create/read/update/delete
//!   plus the bulk marking flows.
//! - Validate habit names at the edge, before the store is involved.
//!
//! # Invariants
//! - Service APIs never bypass store clamping/persistence contracts.
//! - The service remains storage-agnostic.

use crate::model::color::DEFAULT_COLOR;
use crate::model::entry::{entry_percentage, Entry};
use crate::model::habit::{normalize_name, Habit, HabitId};
use crate::repo::habit_repo::{HabitStore, StoreResult, SubscriptionId};
use crate::storage::StorageBackend;
use std::collections::HashSet;

/// Use-case wrapper over the habit store.
pub struct HabitService<S: StorageBackend> {
    store: HabitStore<S>,
}

impl<S: StorageBackend> HabitService<S> {
    pub fn new(store: HabitStore<S>) -> Self {
        Self { store }
    }

    /// The full habit collection.
    pub fn habits(&self) -> Vec<Habit> {
        self.store.list()
    }

    /// One habit by id.
    pub fn habit(&self, id: HabitId) -> Option<Habit> {
        self.store.find_by_id(id)
    }

    /// Creates a habit after trimming and validating the name.
    ///
    /// Falls back to [`DEFAULT_COLOR`] when no color was chosen.
    pub fn create_habit(&mut self, name: &str, color: Option<&str>) -> StoreResult<Habit> {
        let name = normalize_name(name)?;
        self.store.create(&name, color.unwrap_or(DEFAULT_COLOR))
    }

    /// Records a day's completion for one habit.
    pub fn update_entry(
        &mut self,
        id: HabitId,
        date: &str,
        percentage: i64,
        description: Option<&str>,
    ) -> StoreResult<Entry> {
        self.store.update_entry(id, date, percentage, description)
    }

    /// Deletes a habit; a miss is a no-op.
    pub fn delete_habit(&mut self, id: HabitId) -> StoreResult<()> {
        self.store.delete(id)
    }

    /// Marks every habit fully complete for `date` in one write cycle.
    pub fn mark_all_complete(&mut self, date: &str) -> StoreResult<()> {
        self.store.bulk_set_for_date(date, 100)
    }

    /// Applies a bulk-mark selection for `date`.
    ///
    /// Selected habits are marked 100; habits that were complete for `date`
    /// but are no longer selected drop to 0; everything else is untouched.
    /// Returns whether any habit newly reached completion, so shells can
    /// trigger their celebration effects.
    pub fn bulk_mark(&mut self, date: &str, selected: &[HabitId]) -> StoreResult<bool> {
        let habits = self.store.list();
        let selected_set: HashSet<HabitId> = selected.iter().copied().collect();
        let mut newly_completed = false;

        for habit in &habits {
            let was_complete = entry_percentage(habit.entry(date)) == 100;
            if selected_set.contains(&habit.id) {
                if !was_complete {
                    newly_completed = true;
                }
                self.store.update_entry(habit.id, date, 100, None)?;
            } else if was_complete {
                self.store.update_entry(habit.id, date, 0, None)?;
            }
        }

        Ok(newly_completed)
    }

    /// Registers a change callback on the underlying store.
    pub fn subscribe(&mut self, callback: impl Fn() + 'static) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    /// Removes a change callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.store.unsubscribe(id);
    }
}
