use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::{Collection, Entry, EntryStore, SortKey};
use crate::error::StoreResult;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Inserted,
    Updated,
    Deleted,
    Reordered,
}

/// Emitted after a mutation has been applied to the wrapped store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreEvent {
    pub collection: Collection,
    pub id: Uuid,
    pub kind: ChangeKind,
}

/// Wraps a store and broadcasts a [`StoreEvent`] for every successful write,
/// so views can re-query instead of polling.
///
/// Events are dropped when nobody is subscribed. Slow subscribers see
/// `RecvError::Lagged` and should re-read the store.
pub struct NotifyingStore<S> {
    inner: S,
    events: broadcast::Sender<StoreEvent>,
}

impl<S: EntryStore> NotifyingStore<S> {
    pub fn new(inner: S) -> Self {
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { inner, events }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn publish(&self, collection: Collection, id: Uuid, kind: ChangeKind) {
        // Err only means there are no receivers right now.
        let _ = self.events.send(StoreEvent {
            collection,
            id,
            kind,
        });
    }
}

#[async_trait]
impl<S: EntryStore> EntryStore for NotifyingStore<S> {
    async fn insert(&self, entry: &Entry) -> StoreResult<()> {
        self.inner.insert(entry).await?;
        self.publish(entry.collection(), entry.id(), ChangeKind::Inserted);
        Ok(())
    }

    async fn update(&self, entry: &Entry) -> StoreResult<()> {
        self.inner.update(entry).await?;
        self.publish(entry.collection(), entry.id(), ChangeKind::Updated);
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> StoreResult<bool> {
        let removed = self.inner.delete(collection, id).await?;
        if removed {
            self.publish(collection, id, ChangeKind::Deleted);
        }
        Ok(removed)
    }

    async fn get(&self, collection: Collection, id: Uuid) -> StoreResult<Option<Entry>> {
        self.inner.get(collection, id).await
    }

    async fn query_all(
        &self,
        collection: Collection,
        sort: Option<SortKey>,
    ) -> StoreResult<Vec<Entry>> {
        self.inner.query_all(collection, sort).await
    }

    async fn reassign_sort_orders(&self, ranks: &[(Uuid, i64)]) -> StoreResult<()> {
        self.inner.reassign_sort_orders(ranks).await?;
        for (id, _) in ranks {
            self.publish(Collection::Program, *id, ChangeKind::Reordered);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayIndex, ProgramEntry};
    use crate::store::MemoryStore;
    use tokio::sync::broadcast::error::TryRecvError;

    #[tokio::test]
    async fn test_mutations_are_published() {
        let store = NotifyingStore::new(MemoryStore::new());
        let mut events = store.subscribe();

        let mut entry = ProgramEntry::new(DayIndex::MONDAY, "Deadlift", 5, 5);
        store.insert(&entry.clone().into()).await.unwrap();
        entry.reps = 3;
        store.update(&entry.clone().into()).await.unwrap();
        store.delete(Collection::Program, entry.id).await.unwrap();

        let kinds: Vec<_> = (0..3).map(|_| events.try_recv().unwrap().kind).collect();
        assert_eq!(
            kinds,
            vec![ChangeKind::Inserted, ChangeKind::Updated, ChangeKind::Deleted]
        );
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn test_failed_mutations_are_silent() {
        let store = NotifyingStore::new(MemoryStore::new());
        let mut events = store.subscribe();

        let entry = ProgramEntry::new(DayIndex::MONDAY, "Deadlift", 5, 5);
        assert!(store.update(&entry.clone().into()).await.is_err());
        assert!(!store.delete(Collection::Program, entry.id).await.unwrap());

        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn test_reorder_publishes_each_id() {
        let store = NotifyingStore::new(MemoryStore::new());
        let a = ProgramEntry::new(DayIndex::MONDAY, "A", 3, 10);
        let b = ProgramEntry::new(DayIndex::MONDAY, "B", 3, 10).with_sort_order(1);
        store.insert(&a.clone().into()).await.unwrap();
        store.insert(&b.clone().into()).await.unwrap();

        let mut events = store.subscribe();
        store
            .reassign_sort_orders(&[(b.id, 0), (a.id, 1)])
            .await
            .unwrap();

        let first = events.try_recv().unwrap();
        assert_eq!(first.id, b.id);
        assert_eq!(first.kind, ChangeKind::Reordered);
        assert_eq!(events.try_recv().unwrap().id, a.id);
    }
}
