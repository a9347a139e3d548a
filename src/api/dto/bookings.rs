use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::booking_repo::{BookingRow, NewBooking};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub product_id: Uuid,
    pub product_name: String,
    pub buyer_email: String,
    pub buyer_name: String,
    pub phone: String,
    pub meeting_location: String,
    pub price: i64,
}

impl CreateBookingRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.phone.trim().is_empty() {
            return Err("phone is required");
        }
        if self.meeting_location.trim().is_empty() {
            return Err("meetingLocation is required");
        }
        if self.price < 0 {
            return Err("price must be non-negative");
        }
        Ok(())
    }

    pub fn as_new(&self) -> NewBooking<'_> {
        NewBooking {
            product_id: self.product_id,
            product_name: &self.product_name,
            buyer_email: &self.buyer_email,
            buyer_name: &self.buyer_name,
            phone: &self.phone,
            meeting_location: &self.meeting_location,
            price: self.price,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub buyer_email: String,
    pub buyer_name: String,
    pub phone: String,
    pub meeting_location: String,
    pub price: i64,
    pub paid: bool,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<BookingRow> for BookingResponse {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            product_name: row.product_name,
            buyer_email: row.buyer_email,
            buyer_name: row.buyer_name,
            phone: row.phone,
            meeting_location: row.meeting_location,
            price: row.price,
            paid: row.paid,
            transaction_id: row.transaction_id,
            created_at: row.created_at,
        }
    }
}
