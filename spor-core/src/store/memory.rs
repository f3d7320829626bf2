use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use super::{Collection, Entry, EntryStore, SortKey};
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Default)]
struct Collections {
    program: Vec<Entry>,
    diet: Vec<Entry>,
}

impl Collections {
    fn bucket(&self, collection: Collection) -> &Vec<Entry> {
        match collection {
            Collection::Program => &self.program,
            Collection::Diet => &self.diet,
        }
    }

    fn bucket_mut(&mut self, collection: Collection) -> &mut Vec<Entry> {
        match collection {
            Collection::Program => &mut self.program,
            Collection::Diet => &mut self.diet,
        }
    }
}

/// In-process store. Vectors keep insertion order, which is the order
/// returned by unsorted queries.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Collections>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }
}

/// Stable ascending sort; equal keys keep their relative order.
pub(crate) fn sort_entries(entries: &mut [Entry], key: SortKey) {
    match key {
        SortKey::CreatedAt => entries.sort_by_key(|e| match e {
            Entry::Program(p) => p.created_at,
            Entry::Diet(d) => d.created_at,
        }),
        SortKey::SortOrder => entries.sort_by_key(|e| match e {
            Entry::Program(p) => p.sort_order,
            Entry::Diet(d) => d.sort_order,
        }),
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn insert(&self, entry: &Entry) -> StoreResult<()> {
        entry.validate()?;
        let mut state = self.lock()?;
        let bucket = state.bucket_mut(entry.collection());
        if bucket.iter().any(|e| e.id() == entry.id()) {
            return Err(StoreError::DuplicateId(entry.id()));
        }
        bucket.push(entry.clone());
        tracing::debug!(id = %entry.id(), collection = %entry.collection(), "inserted entry");
        Ok(())
    }

    async fn update(&self, entry: &Entry) -> StoreResult<()> {
        entry.validate()?;
        let mut state = self.lock()?;
        let slot = state
            .bucket_mut(entry.collection())
            .iter_mut()
            .find(|e| e.id() == entry.id())
            .ok_or(StoreError::NotFound(entry.id()))?;
        let mut updated = entry.clone();
        updated.keep_created_at(slot.created_at());
        *slot = updated;
        tracing::debug!(id = %entry.id(), collection = %entry.collection(), "updated entry");
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> StoreResult<bool> {
        let mut state = self.lock()?;
        let bucket = state.bucket_mut(collection);
        match bucket.iter().position(|e| e.id() == id) {
            Some(pos) => {
                bucket.remove(pos);
                tracing::debug!(%id, %collection, "deleted entry");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get(&self, collection: Collection, id: Uuid) -> StoreResult<Option<Entry>> {
        let state = self.lock()?;
        Ok(state
            .bucket(collection)
            .iter()
            .find(|e| e.id() == id)
            .cloned())
    }

    async fn query_all(
        &self,
        collection: Collection,
        sort: Option<SortKey>,
    ) -> StoreResult<Vec<Entry>> {
        let mut entries = self.lock()?.bucket(collection).clone();
        if let Some(key) = sort {
            sort_entries(&mut entries, key);
        }
        Ok(entries)
    }

    async fn reassign_sort_orders(&self, ranks: &[(Uuid, i64)]) -> StoreResult<()> {
        let mut state = self.lock()?;
        let bucket = state.bucket_mut(Collection::Program);

        // Resolve every id before touching anything.
        let mut positions = Vec::with_capacity(ranks.len());
        for (id, rank) in ranks {
            let pos = bucket
                .iter()
                .position(|e| e.id() == *id)
                .ok_or(StoreError::NotFound(*id))?;
            positions.push((pos, *rank));
        }

        for (pos, rank) in positions {
            if let Entry::Program(entry) = &mut bucket[pos] {
                entry.sort_order = rank;
            }
        }
        tracing::debug!(count = ranks.len(), "reassigned sort orders");
        Ok(())
    }
}
