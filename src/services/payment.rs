use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Stand-in for a real payment provider. Generates demo identifiers and
/// always reports success; nothing here is a security boundary.
pub struct DemoGateway;

/// Shape of a created demo order, mirroring typical gateway order objects.
#[derive(Debug, Serialize)]
pub struct DemoOrder {
    pub id: String,
    pub entity: &'static str,
    pub amount: i64,
    pub amount_paid: i64,
    pub amount_due: i64,
    pub currency: String,
    pub receipt: String,
    pub status: &'static str,
    pub attempts: u32,
    pub notes: Value,
    pub created_at: i64,
}

impl DemoGateway {
    pub fn generate_order_id() -> String {
        format!("demo_order_{}_{}", Utc::now().timestamp_millis(), suffix())
    }

    pub fn generate_payment_id() -> String {
        format!("demo_pay_{}_{}", Utc::now().timestamp_millis(), suffix())
    }

    pub fn generate_signature(order_id: &str, payment_id: &str) -> String {
        let digest = Sha256::digest(format!("{order_id}|{payment_id}|demo_secret").as_bytes());
        digest.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Simulate order creation. `amount` arrives in major units and is
    /// stored in minor units, as gateways do.
    pub fn create_order(
        amount: f64,
        currency: String,
        receipt: Option<String>,
        notes: Option<Value>,
    ) -> DemoOrder {
        let now = Utc::now();
        let amount_minor = (amount * 100.0).round() as i64;
        DemoOrder {
            id: Self::generate_order_id(),
            entity: "order",
            amount: amount_minor,
            amount_paid: 0,
            amount_due: amount_minor,
            currency,
            receipt: receipt.unwrap_or_else(|| format!("receipt_{}", now.timestamp_millis())),
            status: "created",
            attempts: 0,
            notes: notes.unwrap_or_else(|| Value::Object(Default::default())),
            created_at: now.timestamp(),
        }
    }
}

fn suffix() -> String {
    Uuid::new_v4().simple().to_string()[..9].to_string()
}
