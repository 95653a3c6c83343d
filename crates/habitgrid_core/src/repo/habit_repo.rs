//! Habit store: the sole authority for durable habit state.
//!
//! # Responsibility
//! - Funnel every read and write of the habit collection through one type.
//! - Apply value constraints (clamping, description discard) on write.
//! - Notify subscribers synchronously after each successful mutation.
//!
//! # Invariants
//! - Mutations are full deserialize -> mutate -> reserialize cycles over the
//!   single storage slot; there is no partial write and no locking. Two
//!   writers sharing a slot race last-write-wins, exactly like the original
//!   single-tab assumption.
//! - Read faults degrade to an empty collection and are logged; write
//!   faults propagate to the caller.

use crate::model::entry::Entry;
use crate::model::habit::{Habit, HabitId, HabitValidationError};
use crate::storage::{StorageBackend, StorageError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure conditions surfaced by store operations.
#[derive(Debug)]
pub enum StoreError {
    /// The referenced habit does not exist (possibly deleted elsewhere).
    NotFound(HabitId),
    /// Model-level input validation failed.
    Validation(HabitValidationError),
    /// The storage medium rejected a write.
    Storage(StorageError),
    /// The collection could not be encoded for persistence.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "habit not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode habit collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<HabitValidationError> for StoreError {
    fn from(value: HabitValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Handle identifying one change subscription.
pub type SubscriptionId = u64;

/// Store over an injected storage backend.
///
/// Change notification is an explicit observer interface: callbacks
/// registered via [`subscribe`](HabitStore::subscribe) run synchronously
/// after each successful mutating operation, and only then. A failed
/// persist notifies nobody.
pub struct HabitStore<S: StorageBackend> {
    storage: S,
    subscribers: Vec<(SubscriptionId, Box<dyn Fn()>)>,
    next_subscription: SubscriptionId,
}

impl<S: StorageBackend> HabitStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// The full ordered habit collection.
    ///
    /// Never fails the caller: missing, unavailable or corrupt storage reads
    /// as an empty collection. Corruption is logged; the next successful
    /// write replaces the corrupt payload with a valid one.
    pub fn list(&self) -> Vec<Habit> {
        match self.storage.read() {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(habits) => habits,
                Err(err) => {
                    warn!("event=store_read module=repo status=corrupt error={err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=store_read module=repo status=unavailable error={err}");
                Vec::new()
            }
        }
    }

    /// The matching habit, or `None` when the id is unknown.
    pub fn find_by_id(&self, id: HabitId) -> Option<Habit> {
        self.list().into_iter().find(|habit| habit.id == id)
    }

    /// Creates a habit and appends it to the collection.
    ///
    /// Name validation normally happens at the caller edge; the store
    /// re-checks it so a blank name can never be persisted. Duplicate names
    /// are permitted.
    pub fn create(&mut self, name: &str, color: &str) -> StoreResult<Habit> {
        let habit = Habit::new(name, color)?;
        let mut habits = self.list();
        habits.push(habit.clone());
        self.persist(&habits)?;
        info!(
            "event=store_create module=repo status=ok habit_id={}",
            habit.id
        );
        self.notify();
        Ok(habit)
    }

    /// Records `percentage` (clamped) for one habit and date,
    /// overwriting any existing entry for that date.
    ///
    /// # Errors
    /// - [`StoreError::NotFound`] when no habit matches `id`.
    /// - [`StoreError::Storage`] / [`StoreError::Serialize`] when the
    ///   collection cannot be persisted.
    pub fn update_entry(
        &mut self,
        id: HabitId,
        date: &str,
        percentage: i64,
        description: Option<&str>,
    ) -> StoreResult<Entry> {
        let mut habits = self.list();
        let Some(habit) = habits.iter_mut().find(|habit| habit.id == id) else {
            return Err(StoreError::NotFound(id));
        };

        let entry = Entry::new(percentage, description);
        habit.entries.insert(date.to_string(), entry.clone());

        self.persist(&habits)?;
        info!(
            "event=store_update_entry module=repo status=ok habit_id={id} date={date} percentage={}",
            entry.percentage()
        );
        self.notify();
        Ok(entry)
    }

    /// Removes a habit. A miss is a no-op, not an error; the (possibly
    /// unchanged) collection is persisted either way.
    pub fn delete(&mut self, id: HabitId) -> StoreResult<()> {
        let mut habits = self.list();
        let before = habits.len();
        habits.retain(|habit| habit.id != id);

        self.persist(&habits)?;
        info!(
            "event=store_delete module=repo status=ok habit_id={id} removed={}",
            before - habits.len()
        );
        self.notify();
        Ok(())
    }

    /// Applies the same clamped percentage to every habit's entry for one
    /// date, in a single collection read/write cycle. Descriptions are not
    /// accepted here.
    pub fn bulk_set_for_date(&mut self, date: &str, percentage: i64) -> StoreResult<()> {
        let mut habits = self.list();
        for habit in &mut habits {
            habit
                .entries
                .insert(date.to_string(), Entry::new(percentage, None));
        }

        self.persist(&habits)?;
        info!(
            "event=store_bulk_set module=repo status=ok date={date} habits={}",
            habits.len()
        );
        self.notify();
        Ok(())
    }

    /// Registers a callback invoked after every successful mutation.
    pub fn subscribe(&mut self, callback: impl Fn() + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    fn persist(&self, habits: &[Habit]) -> StoreResult<()> {
        let payload = serde_json::to_string(habits)?;
        if let Err(err) = self.storage.write(&payload) {
            error!("event=store_write module=repo status=error error={err}");
            return Err(err.into());
        }
        Ok(())
    }

    fn notify(&self) {
        for (_, callback) in &self.subscribers {
            callback();
        }
    }
}
