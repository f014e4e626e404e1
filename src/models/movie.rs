use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "durationMin")]
    pub duration_min: Option<i32>,
    #[serde(rename = "posterUrl")]
    pub poster_url: Option<String>,
    pub rating: f64,
    pub votes: i64,
}
