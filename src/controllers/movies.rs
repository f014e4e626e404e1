use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::Row;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Movie, Showtime};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/{id}", get(get_movie))
}

#[derive(Debug, Serialize)]
struct MovieWithShowtimes {
    #[serde(flatten)]
    movie: Movie,
    showtimes: Vec<Showtime>,
}

// GET /api/movies
async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MovieWithShowtimes>>, ApiError> {
    let rows = sqlx::query(
        r#"
        SELECT m.id, m.title, m.description, m.duration_min, m.poster_url, m.rating, m.votes,
               s.id AS showtime_id, s.starts_at
        FROM movies m
        LEFT JOIN showtimes s ON s.movie_id = m.id
        ORDER BY m.id, s.starts_at
        "#,
    )
    .fetch_all(&state.db.pool)
    .await?;

    // One row per (movie, showtime); fold into movies with nested showtimes.
    let mut map: BTreeMap<i64, MovieWithShowtimes> = BTreeMap::new();
    for r in rows {
        let movie_id: i64 = r.get("id");
        let entry = map.entry(movie_id).or_insert_with(|| MovieWithShowtimes {
            movie: Movie {
                id: movie_id,
                title: r.get("title"),
                description: r.get("description"),
                duration_min: r.get("duration_min"),
                poster_url: r.get("poster_url"),
                rating: r.get("rating"),
                votes: r.get("votes"),
            },
            showtimes: Vec::new(),
        });
        if let Some(showtime_id) = r.get::<Option<i64>, _>("showtime_id") {
            entry.showtimes.push(Showtime {
                id: showtime_id,
                movie_id,
                starts_at: r.get::<DateTime<Utc>, _>("starts_at"),
            });
        }
    }

    Ok(Json(map.into_values().collect()))
}

// GET /api/movies/{id}
async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MovieWithShowtimes>, ApiError> {
    let movie = sqlx::query_as::<_, Movie>(
        "SELECT id, title, description, duration_min, poster_url, rating, votes
         FROM movies WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db.pool)
    .await?
    .ok_or(ApiError::NotFound)?;

    let showtimes = sqlx::query_as::<_, Showtime>(
        "SELECT id, movie_id, starts_at FROM showtimes WHERE movie_id = $1 ORDER BY starts_at",
    )
    .bind(id)
    .fetch_all(&state.db.pool)
    .await?;

    Ok(Json(MovieWithShowtimes { movie, showtimes }))
}
