use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::day::DayIndex;
use crate::error::ValidationError;

/// One exercise scheduled on a weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub id: Uuid,
    pub day_index: DayIndex,
    pub exercise_id: String,
    pub exercise_name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(
        default,
        with = "super::image_data",
        skip_serializing_if = "Option::is_none"
    )]
    pub exercise_image_data: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
    /// Rank within the day; `0..n-1` after any reorder.
    pub sort_order: i64,
}

impl ProgramEntry {
    pub fn new(day_index: DayIndex, exercise_name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            day_index,
            exercise_id: Uuid::new_v4().to_string(),
            exercise_name: exercise_name.into(),
            sets,
            reps,
            exercise_image_data: None,
            created_at: Utc::now(),
            sort_order: 0,
        }
    }

    pub fn with_image(mut self, data: Vec<u8>) -> Self {
        self.exercise_image_data = Some(data);
        self
    }

    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Store-level checks. Upper bounds on sets/reps belong to the editor.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.exercise_name.trim().is_empty() {
            return Err(ValidationError::EmptyField("exercise name"));
        }
        if self.sets == 0 {
            return Err(ValidationError::OutOfRange {
                field: "sets",
                value: 0,
                min: 1,
                max: u32::MAX as i64,
            });
        }
        if self.reps == 0 {
            return Err(ValidationError::OutOfRange {
                field: "reps",
                value: 0,
                min: 1,
                max: u32::MAX as i64,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ProgramEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.exercise_name)?;
        writeln!(f, "{}", "=".repeat(self.exercise_name.len()))?;
        writeln!(f, "Day: {}", self.day_index)?;
        writeln!(f, "Sets: {}", self.sets)?;
        writeln!(f, "Reps: {}", self.reps)?;
        writeln!(f, "Position: {}", self.sort_order + 1)?;
        if let Some(image) = &self.exercise_image_data {
            writeln!(f, "Image: {} bytes", image.len())?;
        }
        Ok(())
    }
}
