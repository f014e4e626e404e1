use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::HashSet;

use crate::config::BookingConfig;
use crate::error::ApiError;
use crate::models::Seat;

/// A seat as clients identify it: row letter plus number, scoped to a showtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatRef {
    pub row: String,
    pub number: i32,
}

/// Identifiers handed out by the mock payment gateway. Recorded on the
/// booking as-is; the demo performs no verification against the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentProof {
    #[serde(rename = "paymentId")]
    pub payment_id: String,
    #[serde(rename = "orderId", default)]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReserveRequest {
    pub showtime_id: i64,
    pub seats: Vec<SeatRef>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub payment: Option<PaymentProof>,
}

/// The reservation core. Owns the pool and the pricing/payment policy; the
/// only component allowed to move a seat from 'available' to 'booked'.
#[derive(Clone)]
pub struct BookingService {
    pool: PgPool,
    seat_price_cents: i64,
    auto_approve_unpaid: bool,
}

impl BookingService {
    pub fn new(pool: PgPool, config: &BookingConfig) -> Self {
        Self {
            pool,
            seat_price_cents: config.seat_price_cents,
            auto_approve_unpaid: config.auto_approve_unpaid,
        }
    }

    /// Atomically reserve a set of seats for a showtime.
    ///
    /// Locks exactly the requested seat rows with `FOR UPDATE`, so the
    /// availability check and the booked-write share one isolation scope:
    /// of two concurrent reservations contesting a seat, the first to commit
    /// wins and the other observes it as booked. On any failure the whole
    /// transaction rolls back; no partial reservation is ever visible.
    pub async fn reserve(&self, req: ReserveRequest) -> Result<i64, ApiError> {
        // Rejected before any lock is taken.
        if req.showtime_id <= 0 || req.seats.is_empty() {
            return Err(ApiError::Validation("missing showtimeId or seats".to_string()));
        }
        let mut seen = HashSet::new();
        for seat in &req.seats {
            if !seen.insert((seat.row.as_str(), seat.number)) {
                return Err(ApiError::Validation(format!(
                    "duplicate seat {}{}",
                    seat.row, seat.number
                )));
            }
        }

        let mut tx = self.pool.begin().await?;

        let showtime_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM showtimes WHERE id = $1)")
                .bind(req.showtime_id)
                .fetch_one(&mut *tx)
                .await?;
        if !showtime_exists {
            let _ = tx.rollback().await;
            return Err(ApiError::Validation("showtime not found".to_string()));
        }

        // Lock the matching seat rows, in id order so overlapping requests
        // acquire locks in the same sequence and cannot deadlock. Seats
        // requested but not present for this showtime simply do not match,
        // which the count check catches.
        let rows: Vec<String> = req.seats.iter().map(|s| s.row.clone()).collect();
        let numbers: Vec<i32> = req.seats.iter().map(|s| s.number).collect();

        let locked: Vec<(i64, String, i32, String)> = sqlx::query_as(
            r#"
            SELECT s.id, s.seat_row, s.seat_number, s.status
            FROM seats s
            JOIN UNNEST($2::text[], $3::int[]) AS req(seat_row, seat_number)
              ON s.seat_row = req.seat_row AND s.seat_number = req.seat_number
            WHERE s.showtime_id = $1
            ORDER BY s.id
            FOR UPDATE OF s
            "#,
        )
        .bind(req.showtime_id)
        .bind(&rows)
        .bind(&numbers)
        .fetch_all(&mut *tx)
        .await?;

        if locked.len() != req.seats.len() {
            let _ = tx.rollback().await;
            return Err(ApiError::Validation("some seats not found".to_string()));
        }

        let conflicting: Vec<SeatRef> = locked
            .iter()
            .filter(|(_, _, _, status)| status == "booked")
            .map(|(_, row, number, _)| SeatRef {
                row: row.clone(),
                number: *number,
            })
            .collect();
        if !conflicting.is_empty() {
            let _ = tx.rollback().await;
            return Err(ApiError::Conflict { seats: conflicting });
        }

        let amount_cents = locked.len() as i64 * self.seat_price_cents;

        let booking_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO bookings (showtime_id, customer_name, customer_email, amount_cents, status)
             VALUES ($1, $2, $3, $4, 'pending')
             RETURNING id",
        )
        .bind(req.showtime_id)
        .bind(&req.customer_name)
        .bind(&req.customer_email)
        .bind(amount_cents)
        .fetch_one(&mut *tx)
        .await?;

        let seat_ids: Vec<i64> = locked.iter().map(|(id, ..)| *id).collect();
        sqlx::query("UPDATE seats SET status = 'booked', booking_id = $1 WHERE id = ANY($2)")
            .bind(booking_id)
            .bind(&seat_ids)
            .execute(&mut *tx)
            .await?;

        // Payment policy: any supplied proof is taken at face value (demo
        // limitation). Without one the booking is auto-approved only when
        // configured to, otherwise it stays 'pending'.
        match &req.payment {
            Some(proof) => {
                sqlx::query(
                    "UPDATE bookings SET status = 'paid', payment_id = $1, order_id = $2
                     WHERE id = $3",
                )
                .bind(&proof.payment_id)
                .bind(&proof.order_id)
                .bind(booking_id)
                .execute(&mut *tx)
                .await?;
            }
            None if self.auto_approve_unpaid => {
                sqlx::query("UPDATE bookings SET status = 'paid' WHERE id = $1")
                    .bind(booking_id)
                    .execute(&mut *tx)
                    .await?;
            }
            None => {}
        }

        tx.commit().await?;

        tracing::info!(
            "booking {} created: showtime={} seats={}",
            booking_id,
            req.showtime_id,
            locked.len()
        );
        Ok(booking_id)
    }

    /// Current seat map for a showtime, ordered by row then number.
    /// Pure read-committed read; never locks and may differ between calls.
    pub async fn list_seats(&self, showtime_id: i64) -> Result<Vec<Seat>, ApiError> {
        let seats = sqlx::query_as::<_, Seat>(
            "SELECT id, showtime_id, seat_row, seat_number, status, booking_id
             FROM seats
             WHERE showtime_id = $1
             ORDER BY seat_row, seat_number",
        )
        .bind(showtime_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(seats)
    }
}
