//! Record storage for program and diet entries.
//!
//! [`EntryStore`] is the seam between the editor and whatever persists the
//! records. [`MemoryStore`] keeps everything in process; the `spor` binary
//! provides a SQLite implementation. [`NotifyingStore`] wraps any store and
//! broadcasts a [`StoreEvent`] after every successful mutation.

mod memory;
mod notify;

pub use memory::MemoryStore;
pub use notify::{ChangeKind, NotifyingStore, StoreEvent};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::{DayIndex, DietEntry, ProgramEntry};

/// The two record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Program,
    Diet,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Program => write!(f, "program"),
            Collection::Diet => write!(f, "diet"),
        }
    }
}

/// Ascending sort keys supported by [`EntryStore::query_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    SortOrder,
}

/// A record from either collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "collection", rename_all = "lowercase")]
pub enum Entry {
    Program(ProgramEntry),
    Diet(DietEntry),
}

impl Entry {
    pub fn id(&self) -> Uuid {
        match self {
            Entry::Program(e) => e.id,
            Entry::Diet(e) => e.id,
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            Entry::Program(_) => Collection::Program,
            Entry::Diet(_) => Collection::Diet,
        }
    }

    pub fn day_index(&self) -> DayIndex {
        match self {
            Entry::Program(e) => e.day_index,
            Entry::Diet(e) => e.day_index,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Entry::Program(e) => e.created_at,
            Entry::Diet(e) => e.created_at,
        }
    }

    /// Creation time is fixed at insert; stores call this before replacing a
    /// record.
    pub(crate) fn keep_created_at(&mut self, created_at: DateTime<Utc>) {
        match self {
            Entry::Program(e) => e.created_at = created_at,
            Entry::Diet(e) => e.created_at = created_at,
        }
    }

    pub fn validate(&self) -> StoreResult<()> {
        match self {
            Entry::Program(e) => e.validate()?,
            Entry::Diet(e) => e.validate()?,
        }
        Ok(())
    }

    pub fn into_program(self) -> Option<ProgramEntry> {
        match self {
            Entry::Program(e) => Some(e),
            Entry::Diet(_) => None,
        }
    }

    pub fn into_diet(self) -> Option<DietEntry> {
        match self {
            Entry::Diet(e) => Some(e),
            Entry::Program(_) => None,
        }
    }
}

impl From<ProgramEntry> for Entry {
    fn from(entry: ProgramEntry) -> Self {
        Entry::Program(entry)
    }
}

impl From<DietEntry> for Entry {
    fn from(entry: DietEntry) -> Self {
        Entry::Diet(entry)
    }
}

/// Durable keyed storage for both collections.
///
/// Every mutation is complete when the returned future resolves. Records are
/// validated on `insert` and `update`.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Adds a record under its own id. Fails with `DuplicateId` if taken.
    async fn insert(&self, entry: &Entry) -> StoreResult<()>;

    /// Replaces the record with the same id. Fails with `NotFound` if absent.
    async fn update(&self, entry: &Entry) -> StoreResult<()>;

    /// Removes a record. Returns `false` when nothing had that id.
    async fn delete(&self, collection: Collection, id: Uuid) -> StoreResult<bool>;

    async fn get(&self, collection: Collection, id: Uuid) -> StoreResult<Option<Entry>>;

    /// All records of a collection. Unsorted results come back in insertion
    /// order; sorted results are ascending with ties kept in insertion order.
    async fn query_all(
        &self,
        collection: Collection,
        sort: Option<SortKey>,
    ) -> StoreResult<Vec<Entry>>;

    /// Writes new `sort_order` values for program entries in one step.
    /// If any id is missing nothing is written and `NotFound` is returned.
    async fn reassign_sort_orders(&self, ranks: &[(Uuid, i64)]) -> StoreResult<()>;

    async fn program_entries(&self, sort: Option<SortKey>) -> StoreResult<Vec<ProgramEntry>> {
        let entries = self.query_all(Collection::Program, sort).await?;
        Ok(entries.into_iter().filter_map(Entry::into_program).collect())
    }

    async fn diet_entries(&self, sort: Option<SortKey>) -> StoreResult<Vec<DietEntry>> {
        let entries = self.query_all(Collection::Diet, sort).await?;
        Ok(entries.into_iter().filter_map(Entry::into_diet).collect())
    }

    /// A day's exercises in rank order.
    async fn program_entries_for_day(&self, day: DayIndex) -> StoreResult<Vec<ProgramEntry>> {
        let mut entries = self.program_entries(Some(SortKey::SortOrder)).await?;
        entries.retain(|e| e.day_index == day);
        Ok(entries)
    }

    /// A day's meals in creation order.
    async fn diet_entries_for_day(&self, day: DayIndex) -> StoreResult<Vec<DietEntry>> {
        let mut entries = self.diet_entries(Some(SortKey::CreatedAt)).await?;
        entries.retain(|e| e.day_index == day);
        Ok(entries)
    }

    async fn get_program_entry(&self, id: Uuid) -> StoreResult<Option<ProgramEntry>> {
        Ok(self
            .get(Collection::Program, id)
            .await?
            .and_then(Entry::into_program))
    }

    async fn get_diet_entry(&self, id: Uuid) -> StoreResult<Option<DietEntry>> {
        Ok(self.get(Collection::Diet, id).await?.and_then(Entry::into_diet))
    }
}
