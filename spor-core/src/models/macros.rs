use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

use crate::error::ValidationError;

/// Summed protein, carbohydrate and fat grams for a set of diet entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub protein: f64,
    pub carb: f64,
    pub fat: f64,
}

impl MacroTotals {
    pub fn new(protein: f64, carb: f64, fat: f64) -> Self {
        Self { protein, carb, fat }
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.protein, self.carb, self.fat)
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.protein += rhs.protein;
        self.carb += rhs.carb;
        self.fat += rhs.fat;
    }
}

impl fmt::Display for MacroTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Protein {:.0}g  Carb {:.0}g  Fat {:.0}g",
            self.protein, self.carb, self.fat
        )
    }
}

/// Rejects negative and non-finite gram values.
pub fn check_macro(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_finite() => Err(ValidationError::NonFiniteMacro { field }),
        Some(v) if v < 0.0 => Err(ValidationError::NegativeMacro { field, value: v }),
        _ => Ok(()),
    }
}

/// A zero gram value means "not specified" and is stored as absent.
pub fn normalize_macro(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}
