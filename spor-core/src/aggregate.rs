//! Per-day grouping and summaries. Everything here is pure.

use serde::Serialize;

use crate::models::{DayIndex, DietEntry, MacroTotals, MealType, ProgramEntry, DAYS_PER_WEEK};

/// Label shown for a day with nothing in it.
pub const EMPTY_LABEL: &str = "Empty";

/// Anything that belongs to a weekday bucket.
pub trait DayScoped {
    fn day_index(&self) -> DayIndex;
}

impl DayScoped for ProgramEntry {
    fn day_index(&self) -> DayIndex {
        self.day_index
    }
}

impl DayScoped for DietEntry {
    fn day_index(&self) -> DayIndex {
        self.day_index
    }
}

/// Splits entries into seven Monday-first buckets, keeping input order inside
/// each bucket.
pub fn group_by_day<T: DayScoped + Clone>(entries: &[T]) -> [Vec<T>; DAYS_PER_WEEK] {
    let mut buckets: [Vec<T>; DAYS_PER_WEEK] = Default::default();
    for entry in entries {
        buckets[entry.day_index().as_usize()].push(entry.clone());
    }
    buckets
}

/// Sums each macro over the entries where it is present.
pub fn macro_totals(entries: &[DietEntry]) -> MacroTotals {
    MacroTotals {
        protein: entries.iter().filter_map(|e| e.protein).sum(),
        carb: entries.iter().filter_map(|e| e.carb).sum(),
        fat: entries.iter().filter_map(|e| e.fat).sum(),
    }
}

pub fn exercise_count(entries: &[ProgramEntry]) -> usize {
    entries.len()
}

pub fn program_day_label(count: usize) -> String {
    match count {
        0 => EMPTY_LABEL.to_string(),
        1 => "1 exercise".to_string(),
        n => format!("{} exercises", n),
    }
}

/// Days are labelled by protein only; a day with carbs but no protein reads
/// as empty.
pub fn diet_day_label(totals: &MacroTotals) -> String {
    if totals.protein > 0.0 {
        format!("{:.0}g protein", totals.protein)
    } else {
        EMPTY_LABEL.to_string()
    }
}

/// A day's meals under one meal type.
#[derive(Debug, Clone, Serialize)]
pub struct MealSection {
    pub meal_type: MealType,
    pub entries: Vec<DietEntry>,
}

/// Splits a day's meals into the four meal sections, in
/// [`MealType::ALL`] order. Empty sections are kept.
pub fn group_by_meal_type(entries: &[DietEntry]) -> Vec<MealSection> {
    MealType::ALL
        .iter()
        .map(|meal_type| MealSection {
            meal_type: *meal_type,
            entries: entries
                .iter()
                .filter(|e| e.meal_type == *meal_type)
                .cloned()
                .collect(),
        })
        .collect()
}

/// One row of the weekly overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub day: DayIndex,
    pub day_name: &'static str,
    pub exercise_count: usize,
    pub macros: MacroTotals,
    pub program_label: String,
    pub diet_label: String,
}

pub fn week_overview(program: &[ProgramEntry], diet: &[DietEntry]) -> Vec<DaySummary> {
    let program_days = group_by_day(program);
    let diet_days = group_by_day(diet);

    DayIndex::all()
        .map(|day| {
            let count = exercise_count(&program_days[day.as_usize()]);
            let macros = macro_totals(&diet_days[day.as_usize()]);
            DaySummary {
                day,
                day_name: day.name(),
                exercise_count: count,
                macros,
                program_label: program_day_label(count),
                diet_label: diet_day_label(&macros),
            }
        })
        .collect()
}
