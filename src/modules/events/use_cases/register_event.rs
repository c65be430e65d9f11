use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::modules::events::core::model::NewEvent;
use crate::modules::events::use_cases::response::failure;
use crate::shell::state::AppState;

/// All fields default so a structurally valid body with missing fields
/// still binds; an absent deadline then fails RFC3339 parsing instead.
#[derive(Deserialize)]
pub struct RegisterEventBody {
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub memo: String,
}

#[derive(Serialize)]
pub struct RegisterEventResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterEventBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return failure(StatusCode::BAD_REQUEST, "invalid request format"),
    };

    let deadline = match DateTime::parse_from_rfc3339(&body.deadline) {
        Ok(t) => t,
        Err(_) => return failure(StatusCode::BAD_REQUEST, "invalid date format"),
    };

    let event = NewEvent {
        deadline,
        title: body.title,
        memo: body.memo,
    };

    match state.store.create(event).await {
        Ok(id) => (
            StatusCode::OK,
            Json(RegisterEventResponse {
                status: "success",
                message: "registered",
                id,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "event registration failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}
