pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;

use anyhow::Context;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Shared state for the whole application.
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
    pub bookings: services::booking::BookingService,
}

impl AppState {
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let db = database::Database::new(&config.database.url, config.database.pool_size)
            .await
            .context("failed to connect to database")?;

        db.run_migrations()
            .await
            .context("failed to run migrations")?;

        seed::seed_if_empty(&db.pool)
            .await
            .context("failed to seed demo catalog")?;

        let bookings = services::booking::BookingService::new(db.pool.clone(), &config.booking);

        Ok(Arc::new(Self { db, config, bookings }))
    }
}

/// Full application router; used by main and by the integration tests so
/// both exercise the same middleware stack.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "MovieBooking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
