use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::booking::SeatRef;

/// Crate-wide API error taxonomy.
///
/// Validation and conflict failures are the caller's problem (400); anything
/// that went wrong inside the store is a 500 with a generic message, with the
/// root cause kept in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("some seats already booked")]
    Conflict { seats: Vec<SeatRef> },

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ApiError::Conflict { seats } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "some seats already booked", "seats": seats })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "not found" })),
            )
                .into_response(),
            ApiError::Database(e) => {
                tracing::error!("database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal error", "details": e.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
