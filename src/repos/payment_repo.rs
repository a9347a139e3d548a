/*
 * Responsibility
 * - payment record insert (one row per completed client-side payment)
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct PaymentRow {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub product_id: Uuid,
    pub email: String,
    pub price: i64,
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
}

pub async fn create(
    db: &PgPool,
    booking_id: Uuid,
    product_id: Uuid,
    email: &str,
    price: i64,
    transaction_id: &str,
) -> Result<PaymentRow, RepoError> {
    let row = sqlx::query_as::<_, PaymentRow>(
        r#"
        INSERT INTO payments (booking_id, product_id, email, price, transaction_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, booking_id, product_id, email, price, transaction_id, created_at
        "#,
    )
    .bind(booking_id)
    .bind(product_id)
    .bind(email)
    .bind(price)
    .bind(transaction_id)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}
