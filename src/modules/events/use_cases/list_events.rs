use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::events::core::model::EventView;
use crate::modules::events::use_cases::response::failure;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.store.list().await {
        Ok(events) => {
            let views: Vec<EventView> = events.iter().map(EventView::from).collect();
            Json(views).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "event listing failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}
