use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::events::use_cases::{get_event, list_events, register_event};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/event",
            post(register_event::handle).get(list_events::handle),
        )
        .route("/api/v1/event/{id}", get(get_event::handle))
        .with_state(state)
}
