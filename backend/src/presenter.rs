use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn res_success<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

// Failures still answer 200; clients look for the `error` key.
pub fn res_error<E: Display>(err: E) -> Response {
    let body = ErrorResponse {
        error: err.to_string(),
    };
    (StatusCode::OK, Json(body)).into_response()
}
