//! Error types shared by every store and the entry editor.

use thiserror::Error;
use uuid::Uuid;

/// A record failed a field-level rule. Rejected records are never written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Day index {0} is out of range (expected 0-6)")]
    DayOutOfRange(i64),

    #[error("Invalid day '{0}'. Use 0-6, a weekday name, or 'today'")]
    InvalidDay(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("{field} cannot be negative (got {value})")]
    NegativeMacro { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteMacro { field: &'static str },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("Invalid meal type '{0}'. Valid options: breakfast, lunch, dinner, snack")]
    InvalidMealType(String),
}

/// Errors returned by [`EntryStore`](crate::store::EntryStore) implementations
/// and the [`EntryEditor`](crate::editor::EntryEditor).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Entry already exists: {0}")]
    DuplicateId(Uuid),

    #[error("Entry not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The underlying storage engine failed.
    #[error("Storage error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(err: impl std::fmt::Display) -> Self {
        StoreError::Backend(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
