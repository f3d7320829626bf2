use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::day::DayIndex;
use super::macros::check_macro;
use super::meal_type::MealType;
use crate::error::ValidationError;

/// One logged meal item. Absent macros are "not specified".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietEntry {
    pub id: Uuid,
    pub day_index: DayIndex,
    pub meal_type: MealType,
    pub title: String,
    pub protein: Option<f64>,
    pub carb: Option<f64>,
    pub fat: Option<f64>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub sort_order: i64,
}

impl DietEntry {
    pub fn new(day_index: DayIndex, meal_type: MealType, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            day_index,
            meal_type,
            title: title.into(),
            protein: None,
            carb: None,
            fat: None,
            note: None,
            created_at: Utc::now(),
            sort_order: 0,
        }
    }

    pub fn with_macros(mut self, protein: Option<f64>, carb: Option<f64>, fat: Option<f64>) -> Self {
        self.protein = protein;
        self.carb = carb;
        self.fat = fat;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        check_macro("protein", self.protein)?;
        check_macro("carb", self.carb)?;
        check_macro("fat", self.fat)?;
        Ok(())
    }
}

impl fmt::Display for DietEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;
        writeln!(f, "Day: {}", self.day_index)?;
        writeln!(f, "Meal: {}", self.meal_type)?;

        let macros: Vec<String> = [("P", self.protein), ("C", self.carb), ("F", self.fat)]
            .iter()
            .filter_map(|(label, value)| value.map(|v| format!("{} {:.0}g", label, v)))
            .collect();
        if !macros.is_empty() {
            writeln!(f, "Macros: {}", macros.join("  "))?;
        }

        if let Some(note) = &self.note {
            writeln!(f, "\nNote: {}", note)?;
        }
        Ok(())
    }
}
