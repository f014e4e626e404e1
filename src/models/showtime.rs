use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Showtime {
    pub id: i64,
    #[serde(rename = "movieId")]
    pub movie_id: i64,
    #[serde(rename = "startsAt")]
    pub starts_at: DateTime<Utc>,
}
