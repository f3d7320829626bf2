mod day;
mod diet_entry;
mod image_data;
mod macros;
mod meal_type;
mod program_entry;

pub use day::{DayIndex, DAYS_PER_WEEK};
pub use diet_entry::DietEntry;
pub use macros::{check_macro, normalize_macro, MacroTotals};
pub use meal_type::MealType;
pub use program_entry::ProgramEntry;
