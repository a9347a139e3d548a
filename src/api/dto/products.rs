/*
 * Responsibility
 * - Product request/response DTOs
 * - Prices are whole currency units
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::product_repo::{NewProduct, ProductRow};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub category_id: Uuid,
    pub seller_email: String,
    pub seller_name: String,
    pub name: String,
    pub image_url: Option<String>,
    pub location: String,
    pub resale_price: i64,
    pub original_price: i64,
    #[serde(default)]
    pub years_of_use: i32,
    pub condition: String,
    pub phone: String,
    #[serde(default)]
    pub description: String,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.seller_email.trim().is_empty() {
            return Err("sellerEmail is required");
        }
        if self.resale_price < 0 || self.original_price < 0 {
            return Err("prices must be non-negative");
        }
        if self.years_of_use < 0 {
            return Err("yearsOfUse must be non-negative");
        }
        Ok(())
    }

    pub fn as_new(&self) -> NewProduct<'_> {
        NewProduct {
            category_id: self.category_id,
            seller_email: &self.seller_email,
            seller_name: &self.seller_name,
            name: &self.name,
            image_url: self.image_url.as_deref(),
            location: &self.location,
            resale_price: self.resale_price,
            original_price: self.original_price,
            years_of_use: self.years_of_use,
            condition: &self.condition,
            phone: &self.phone,
            description: &self.description,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub category_id: Uuid,
    pub seller_email: String,
    pub seller_name: String,
    pub name: String,
    pub image_url: Option<String>,
    pub location: String,
    pub resale_price: i64,
    pub original_price: i64,
    pub years_of_use: i32,
    pub condition: String,
    pub phone: String,
    pub description: String,
    pub status: String,
    pub advertised: bool,
    pub reported: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ProductRow> for ProductResponse {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            category_id: row.category_id,
            seller_email: row.seller_email,
            seller_name: row.seller_name,
            name: row.name,
            image_url: row.image_url,
            location: row.location,
            resale_price: row.resale_price,
            original_price: row.original_price,
            years_of_use: row.years_of_use,
            condition: row.condition,
            phone: row.phone,
            description: row.description,
            status: row.status,
            advertised: row.advertised,
            reported: row.reported,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CreateProductRequest {
        serde_json::from_value(serde_json::json!({
            "categoryId": Uuid::new_v4(),
            "sellerEmail": "sam@example.com",
            "sellerName": "Sam",
            "name": "Pixel 6",
            "location": "Dhaka",
            "resalePrice": 220,
            "originalPrice": 600,
            "condition": "good",
            "phone": "+8801000000000"
        }))
        .unwrap()
    }

    #[test]
    fn optional_fields_default() {
        let p = sample();
        assert_eq!(p.years_of_use, 0);
        assert_eq!(p.description, "");
        assert!(p.image_url.is_none());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn negative_prices_are_rejected() {
        let mut p = sample();
        p.resale_price = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut p = sample();
        p.name = "  ".into();
        assert!(p.validate().is_err());
    }
}
