use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::payment_repo::PaymentRow;

/// `price` is the decimal amount shown to the buyer (e.g. 219.99).
#[derive(Debug, Deserialize)]
pub struct PaymentIntentRequest {
    pub price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub booking_id: Uuid,
    // Optional; when sent it must match the booking's product.
    #[serde(default)]
    pub product_id: Option<Uuid>,
    pub email: String,
    pub price: i64,
    pub transaction_id: String,
}

impl CreatePaymentRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.transaction_id.trim().is_empty() {
            return Err("transactionId is required");
        }
        if self.price < 0 {
            return Err("price must be non-negative");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub product_id: Uuid,
    pub email: String,
    pub price: i64,
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentRow> for PaymentResponse {
    fn from(row: PaymentRow) -> Self {
        Self {
            id: row.id,
            booking_id: row.booking_id,
            product_id: row.product_id,
            email: row.email,
            price: row.price,
            transaction_id: row.transaction_id,
            created_at: row.created_at,
        }
    }
}
