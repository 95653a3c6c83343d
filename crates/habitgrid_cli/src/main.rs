//! CLI probe shell.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `habitgrid_core` wiring
//!   end-to-end against the real file store.
//! - Render each stored habit with its current-month progress row.

use habitgrid_core::{calendar_view, today, today_key, DayState, FileStorage, HabitStore};
use std::path::PathBuf;

fn main() {
    let data_dir = std::env::var_os("HABITGRID_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("habitgrid"));
    let data_path = data_dir.join("habits.json");

    println!("habitgrid_core version={}", habitgrid_core::core_version());
    println!("today={}", today_key());

    let storage = match FileStorage::open(&data_path) {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("cannot open habit store at {}: {err}", data_path.display());
            std::process::exit(1);
        }
    };
    let store = HabitStore::new(storage);

    let habits = store.list();
    if habits.is_empty() {
        println!("no habits recorded at {}", data_path.display());
        return;
    }

    let view = calendar_view(today());
    for habit in &habits {
        let stats = habit.completion_stats();
        println!(
            "{} [{}] recorded={} completed={} partial={} missed={}",
            habit.name, habit.color, stats.total, stats.completed, stats.partial,
            stats.not_completed
        );
        let row: String = view
            .iter()
            .map(|cell| match cell {
                None => ' ',
                Some(date) => match DayState::of(habit.entry(date)) {
                    DayState::NoRecord => '.',
                    DayState::Incomplete => 'x',
                    DayState::Partial => 'o',
                    DayState::Complete => '#',
                },
            })
            .collect();
        println!("  {row}");
    }
}
