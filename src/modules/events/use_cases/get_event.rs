use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::events::core::model::EventView;
use crate::modules::events::use_cases::response::failure;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    // Lenient id parsing: a non-numeric segment is just an event that
    // does not exist, not a bad request.
    let Ok(id) = id.parse::<i64>() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.store.get(id).await {
        Ok(Some(event)) => Json(EventView::from(&event)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            tracing::warn!(error = %err, id, "event lookup failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}
