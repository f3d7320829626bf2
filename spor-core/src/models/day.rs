use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub const DAYS_PER_WEEK: usize = 7;

const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Weekday bucket an entry belongs to. Monday is 0, Sunday is 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DayIndex(u8);

impl DayIndex {
    pub const MONDAY: DayIndex = DayIndex(0);
    pub const SUNDAY: DayIndex = DayIndex(6);

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (0..DAYS_PER_WEEK as i64).contains(&value) {
            Ok(DayIndex(value as u8))
        } else {
            Err(ValidationError::DayOutOfRange(value))
        }
    }

    /// All seven days, Monday first.
    pub fn all() -> impl Iterator<Item = DayIndex> {
        (0..DAYS_PER_WEEK as u8).map(DayIndex)
    }

    pub fn today() -> Self {
        Local::now().weekday().into()
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Position in a seven-element, Monday-first array.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        DAY_NAMES[self.as_usize()]
    }

    pub fn weekday(self) -> Weekday {
        Weekday::try_from(self.0).unwrap_or(Weekday::Mon)
    }
}

impl From<Weekday> for DayIndex {
    fn from(weekday: Weekday) -> Self {
        DayIndex(weekday.num_days_from_monday() as u8)
    }
}

impl TryFrom<i64> for DayIndex {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        DayIndex::new(value)
    }
}

impl From<DayIndex> for u8 {
    fn from(day: DayIndex) -> Self {
        day.0
    }
}

impl From<DayIndex> for i64 {
    fn from(day: DayIndex) -> Self {
        day.0 as i64
    }
}

impl fmt::Display for DayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayIndex {
    type Err = ValidationError;

    /// Accepts `0`-`6`, `today`, or any unambiguous prefix of a weekday name
    /// (`mon`, `tues`, `th`, `Sunday`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return DayIndex::new(n);
        }
        if trimmed.eq_ignore_ascii_case("today") {
            return Ok(DayIndex::today());
        }
        let lowered = trimmed.to_lowercase();
        let mut matches = DAY_NAMES.iter().enumerate().filter(|(_, name)| {
            !lowered.is_empty() && name.to_lowercase().starts_with(&lowered)
        });
        match (matches.next(), matches.next()) {
            (Some((index, _)), None) => Ok(DayIndex(index as u8)),
            _ => Err(ValidationError::InvalidDay(s.to_string())),
        }
    }
}
