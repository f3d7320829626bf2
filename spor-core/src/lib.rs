//! Spor Core Library
//!
//! Models, storage seam, day aggregation and entry editing for Spor, a
//! weekly training and diet planner.

pub mod aggregate;
pub mod editor;
pub mod error;
pub mod media;
pub mod models;
pub mod store;

pub use aggregate::{
    diet_day_label, exercise_count, group_by_day, group_by_meal_type, macro_totals,
    program_day_label, week_overview, DaySummary, MealSection, EMPTY_LABEL,
};
pub use editor::{DietPatch, EntryEditor, NewDietEntry, NewProgramEntry, ProgramPatch};
pub use error::{StoreError, StoreResult, ValidationError};
pub use media::{FileMediaSource, ImageSelection, MediaError, MediaSource};
pub use models::{DayIndex, DietEntry, MacroTotals, MealType, ProgramEntry, DAYS_PER_WEEK};
pub use store::{
    Collection, Entry, EntryStore, MemoryStore, NotifyingStore, SortKey, StoreEvent,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
