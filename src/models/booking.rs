use serde::Serialize;
use sqlx::FromRow;

// Booking status values: 'pending' | 'paid' | 'failed'.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: i64,
    #[serde(rename = "showtimeId")]
    pub showtime_id: i64,
    #[serde(rename = "customerName")]
    pub customer_name: Option<String>,
    #[serde(rename = "customerEmail")]
    pub customer_email: Option<String>,
    #[serde(rename = "amountCents")]
    pub amount_cents: i64,
    pub status: String,
    #[serde(rename = "paymentId")]
    pub payment_id: Option<String>,
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
}
