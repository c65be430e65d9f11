use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::events::core::model::{Event, NewEvent};
use crate::modules::events::store::{EventStore, StoreError};

/// Process-local store. Id assignment and insertion share one critical
/// section, so concurrent registrations cannot hand out the same id.
pub struct InMemoryEventStore {
    inner: Mutex<Inner>,
    offline: bool,
}

struct Inner {
    events: BTreeMap<i64, Event>,
    next_id: i64,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                events: BTreeMap::new(),
                next_id: 1,
            }),
            offline: false,
        }
    }

    /// Test hook: makes every operation fail as if the backend were down.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Backend("event store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, event: NewEvent) -> Result<i64, StoreError> {
        self.check_online()?;
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.events.insert(id, event.with_id(id));
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Event>, StoreError> {
        self.check_online()?;
        let inner = self.inner.lock().await;
        Ok(inner.events.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        self.check_online()?;
        let inner = self.inner.lock().await;
        Ok(inner.events.values().cloned().collect())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        self.check_online()?;
        let mut inner = self.inner.lock().await;
        // The counter is deliberately left alone: ids stay unique for the
        // lifetime of the store even across resets.
        inner.events.clear();
        Ok(())
    }
}
