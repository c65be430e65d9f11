use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Fixed-message status envelope used by failure responses.
#[derive(Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: &'static str,
}

pub fn failure(code: StatusCode, message: &'static str) -> Response {
    (code, Json(StatusMessage { status: "failure", message })).into_response()
}
