use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::payment::{DemoGateway, DemoOrder};
use crate::AppState;

// Demo-only payment endpoints: stateless id generators that always report
// success. Not a security boundary.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/payment-config", get(payment_config))
        .route("/create-order", post(create_order))
        .route("/verify-payment", post(verify_payment))
}

// GET /api/payment-config
async fn payment_config(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "gateway": "demo",
        "keyId": state.config.payment.key_id,
        "gatewayName": state.config.payment.gateway_name,
    }))
}

// POST /api/create-order
#[derive(Debug, Deserialize)]
struct CreateOrderRequest {
    amount: f64,
    currency: Option<String>,
    receipt: Option<String>,
    notes: Option<Value>,
}

async fn create_order(
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<DemoOrder>, ApiError> {
    if req.amount <= 0.0 {
        return Err(ApiError::Validation("amount must be > 0".to_string()));
    }

    let order = DemoGateway::create_order(
        req.amount,
        req.currency.unwrap_or_else(|| "INR".to_string()),
        req.receipt,
        req.notes,
    );
    tracing::info!("demo order created: {}", order.id);
    Ok(Json(order))
}

// POST /api/verify-payment
#[derive(Debug, Deserialize)]
struct VerifyPaymentRequest {
    #[serde(rename = "orderId")]
    order_id: Option<String>,
    #[serde(rename = "paymentId")]
    payment_id: Option<String>,
    #[allow(dead_code)]
    signature: Option<String>,
}

async fn verify_payment(Json(req): Json<VerifyPaymentRequest>) -> Json<Value> {
    tracing::info!(
        "demo payment verification: order={:?} payment={:?}",
        req.order_id,
        req.payment_id
    );

    Json(json!({
        "success": true,
        "message": "Demo payment verified successfully",
        "isDemo": true,
    }))
}
