use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::model::{Event, NewEvent};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("invalid persisted event data: {0}")]
    InvalidData(String),
}

/// Persistence seam for events. The store owns id assignment: `create`
/// hands out the next id and the caller never supplies one.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn create(&self, event: NewEvent) -> Result<i64, StoreError>;
    async fn get(&self, id: i64) -> Result<Option<Event>, StoreError>;

    /// All events, ascending by id.
    async fn list(&self) -> Result<Vec<Event>, StoreError>;

    /// Reset utility for tests. Ids are not reused afterwards.
    async fn delete_all(&self) -> Result<(), StoreError>;
}

pub mod in_memory;
pub mod sqlite;
