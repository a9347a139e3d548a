/*
 * Responsibility
 * - bookings insert / lookup by buyer / lookup by id
 * - the paid flag write used after a payment is recorded
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
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

#[derive(Debug)]
pub struct NewBooking<'a> {
    pub product_id: Uuid,
    pub product_name: &'a str,
    pub buyer_email: &'a str,
    pub buyer_name: &'a str,
    pub phone: &'a str,
    pub meeting_location: &'a str,
    pub price: i64,
}

pub async fn create(db: &PgPool, b: &NewBooking<'_>) -> Result<BookingRow, RepoError> {
    let row = sqlx::query_as::<_, BookingRow>(
        r#"
        INSERT INTO bookings (
            product_id, product_name, buyer_email, buyer_name, phone, meeting_location, price
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING
            id, product_id, product_name, buyer_email, buyer_name, phone,
            meeting_location, price, paid, transaction_id, created_at
        "#,
    )
    .bind(b.product_id)
    .bind(b.product_name)
    .bind(b.buyer_email)
    .bind(b.buyer_name)
    .bind(b.phone)
    .bind(b.meeting_location)
    .bind(b.price)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn list_by_buyer(db: &PgPool, buyer_email: &str) -> Result<Vec<BookingRow>, RepoError> {
    let rows = sqlx::query_as::<_, BookingRow>(
        r#"
        SELECT
            id, product_id, product_name, buyer_email, buyer_name, phone,
            meeting_location, price, paid, transaction_id, created_at
        FROM bookings
        WHERE buyer_email = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(buyer_email)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, booking_id: Uuid) -> Result<Option<BookingRow>, RepoError> {
    let row = sqlx::query_as::<_, BookingRow>(
        r#"
        SELECT
            id, product_id, product_name, buyer_email, buyer_name, phone,
            meeting_location, price, paid, transaction_id, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(booking_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

// Unconditional: sets the paid flag and records the processor's transaction id.
// No reconciliation with the product row.
pub async fn mark_paid(
    db: &PgPool,
    booking_id: Uuid,
    transaction_id: &str,
) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        UPDATE bookings
        SET paid = TRUE, transaction_id = $2
        WHERE id = $1
        "#,
    )
    .bind(booking_id)
    .bind(transaction_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
