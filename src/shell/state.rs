use std::sync::Arc;

use crate::modules::events::store::EventStore;

/// Handler dependencies. The store is injected here so backends can vary
/// without the handlers knowing which one is behind the trait.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }
}
