//! Core domain logic for habitgrid.
//! This crate is the single source of truth for business invariants.

pub mod calendar;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use calendar::{
    calendar_view, days_in_month, format_date, month_date_range, month_grid, today, today_key,
    MonthCursor,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::color::{ColorOption, DEFAULT_COLOR, PRESET_COLORS};
pub use model::entry::{
    clamp_percentage, entry_description, entry_percentage, DayState, Entry, StoredEntry, NO_RECORD,
};
pub use model::habit::{
    normalize_name, CompletionStats, Habit, HabitId, HabitValidationError,
};
pub use repo::habit_repo::{HabitStore, StoreError, StoreResult, SubscriptionId};
pub use service::habit_service::HabitService;
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
