use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::Seat;
use crate::services::booking::{PaymentProof, ReserveRequest, SeatRef};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/showtimes/{id}/seats", get(list_seats))
        .route("/bookings", post(create_booking))
}

// GET /api/showtimes/{id}/seats
async fn list_seats(
    State(state): State<Arc<AppState>>,
    Path(showtime_id): Path<i64>,
) -> Result<Json<Vec<Seat>>, ApiError> {
    let seats = state.bookings.list_seats(showtime_id).await?;
    Ok(Json(seats))
}

// POST /api/bookings
#[derive(Debug, Deserialize)]
struct CreateBookingRequest {
    #[serde(rename = "showtimeId")]
    showtime_id: Option<i64>,
    seats: Option<Vec<SeatRef>>,
    #[serde(rename = "customerName")]
    customer_name: Option<String>,
    #[serde(rename = "customerEmail")]
    customer_email: Option<String>,
    payment: Option<PaymentProof>,
}

async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let booking_id = state
        .bookings
        .reserve(ReserveRequest {
            showtime_id: req.showtime_id.unwrap_or(0),
            seats: req.seats.unwrap_or_default(),
            customer_name: req.customer_name,
            customer_email: req.customer_email,
            payment: req.payment,
        })
        .await?;

    Ok(Json(json!({ "success": true, "bookingId": booking_id })))
}
