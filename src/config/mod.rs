use serde::Deserialize;
use std::env;

// Top-level configuration container, populated from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub booking: BookingConfig,
    pub payment: PaymentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

// Reservation policy knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    // Flat per-seat price, in cents.
    pub seat_price_cents: i64,
    // Demo policy: a booking submitted without a payment proof is promoted
    // to 'paid' anyway. Turn off to leave such bookings 'pending'.
    pub auto_approve_unpaid: bool,
}

// Descriptor for the mock payment gateway shown to clients.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    pub key_id: String,
    pub gateway_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "4000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "movie_booking=debug,tower_http=debug".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
                pool_size: env::var("DB_POOL_SIZE")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .expect("DB_POOL_SIZE must be a valid number"),
            },
            booking: BookingConfig {
                seat_price_cents: env::var("SEAT_PRICE_CENTS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .expect("SEAT_PRICE_CENTS must be a valid number"),
                auto_approve_unpaid: env::var("AUTO_APPROVE_UNPAID")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("AUTO_APPROVE_UNPAID must be true or false"),
            },
            payment: PaymentConfig {
                key_id: env::var("DEMO_PAYMENT_KEY_ID")
                    .unwrap_or_else(|_| "demo_key_123456789".to_string()),
                gateway_name: env::var("DEMO_PAYMENT_GATEWAY_NAME")
                    .unwrap_or_else(|_| "Demo Payments".to_string()),
            },
        }
    }
}
