//! Shared helpers for the HTTP integration tests.
//!
//! Requests are driven straight into the router with `tower::ServiceExt`,
//! no TCP listener involved.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceExt;

use movie_booking::config::{AppConfig, BookingConfig, Config, DatabaseConfig, PaymentConfig};
use movie_booking::database::Database;
use movie_booking::services::booking::BookingService;
use movie_booking::{router, AppState};

/// Test configuration with the demo defaults. The database URL is a dummy:
/// tests always inject the `#[sqlx::test]` pool directly.
pub fn test_config() -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "movie_booking=debug".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            pool_size: 5,
        },
        booking: BookingConfig {
            seat_price_cents: 1000,
            auto_approve_unpaid: true,
        },
        payment: PaymentConfig {
            key_id: "demo_key_123456789".to_string(),
            gateway_name: "Demo Payments".to_string(),
        },
    }
}

/// Build the full application router around the given pool, mirroring the
/// construction in `lib.rs` so tests exercise the production stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: PgPool, config: Config) -> Router {
    let db = Database { pool: pool.clone() };
    let bookings = BookingService::new(pool, &config.booking);
    let state = Arc::new(AppState { db, config, bookings });
    router(state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a movie with one showtime and the full A-F x 1-10 seat grid.
/// Returns the showtime id.
pub async fn create_showtime(pool: &PgPool) -> i64 {
    let movie_id: i64 = sqlx::query_scalar(
        "INSERT INTO movies (title, description, duration_min, poster_url, rating, votes)
         VALUES ('Test Movie', 'A test fixture', 120, '/posters/test.avif', 7.5, 1234)
         RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();

    let showtime_id: i64 = sqlx::query_scalar(
        "INSERT INTO showtimes (movie_id, starts_at) VALUES ($1, NOW() + INTERVAL '2 hours')
         RETURNING id",
    )
    .bind(movie_id)
    .fetch_one(pool)
    .await
    .unwrap();

    movie_booking::seed::create_seat_grid(pool, showtime_id)
        .await
        .unwrap();

    showtime_id
}

pub async fn seat_status(pool: &PgPool, showtime_id: i64, row: &str, number: i32) -> (String, Option<i64>) {
    sqlx::query_as(
        "SELECT status, booking_id FROM seats
         WHERE showtime_id = $1 AND seat_row = $2 AND seat_number = $3",
    )
    .bind(showtime_id)
    .bind(row)
    .bind(number)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn booking_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
        .fetch_one(pool)
        .await
        .unwrap()
}
