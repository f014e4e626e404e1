use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Seat status values: 'available' | 'booked'. Kept as plain text in the
// schema with a CHECK constraint rather than a Postgres enum.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Seat {
    pub id: i64,
    #[serde(rename = "showtimeId")]
    pub showtime_id: i64,
    #[serde(rename = "row")]
    #[sqlx(rename = "seat_row")]
    pub row: String,
    #[serde(rename = "number")]
    #[sqlx(rename = "seat_number")]
    pub number: i32,
    pub status: String,
    #[serde(rename = "bookingId")]
    pub booking_id: Option<i64>,
}
