use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};

/// A deadline reminder record. Ids are assigned by the store, never by
/// clients, and are strictly increasing within a store instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i64,
    pub deadline: DateTime<FixedOffset>,
    pub title: String,
    pub memo: String,
}

/// Store input for a registration: everything but the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub deadline: DateTime<FixedOffset>,
    pub title: String,
    pub memo: String,
}

impl NewEvent {
    pub fn with_id(self, id: i64) -> Event {
        Event {
            id,
            deadline: self.deadline,
            title: self.title,
            memo: self.memo,
        }
    }
}

/// Wire representation of an event. The deadline keeps the offset the
/// client registered with, so the string written is the string read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventView {
    pub id: i64,
    pub deadline: String,
    pub title: String,
    pub memo: String,
}

impl From<&Event> for EventView {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            deadline: event.deadline.to_rfc3339_opts(SecondsFormat::Secs, false),
            title: event.title.clone(),
            memo: event.memo.clone(),
        }
    }
}
