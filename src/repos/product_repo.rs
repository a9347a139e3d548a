/*
 * Responsibility
 * - products CRUD and status flag writes (advertised / reported / sold)
 * - owner-scoped writes filter by seller_email so a seller can only touch their own listings
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_SOLD: &str = "sold";

#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
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

#[derive(Debug)]
pub struct NewProduct<'a> {
    pub category_id: Uuid,
    pub seller_email: &'a str,
    pub seller_name: &'a str,
    pub name: &'a str,
    pub image_url: Option<&'a str>,
    pub location: &'a str,
    pub resale_price: i64,
    pub original_price: i64,
    pub years_of_use: i32,
    pub condition: &'a str,
    pub phone: &'a str,
    pub description: &'a str,
}

const COLUMNS: &str = r#"
    id, category_id, seller_email, seller_name, name, image_url, location,
    resale_price, original_price, years_of_use, condition, phone, description,
    status, advertised, reported, created_at
"#;

pub async fn create(db: &PgPool, p: &NewProduct<'_>) -> Result<ProductRow, RepoError> {
    let sql = format!(
        r#"
        INSERT INTO products (
            category_id, seller_email, seller_name, name, image_url, location,
            resale_price, original_price, years_of_use, condition, phone, description
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING {COLUMNS}
        "#
    );

    let row = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(p.category_id)
        .bind(p.seller_email)
        .bind(p.seller_name)
        .bind(p.name)
        .bind(p.image_url)
        .bind(p.location)
        .bind(p.resale_price)
        .bind(p.original_price)
        .bind(p.years_of_use)
        .bind(p.condition)
        .bind(p.phone)
        .bind(p.description)
        .fetch_one(db)
        .await
        .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn list_available_by_category(
    db: &PgPool,
    category_id: Uuid,
) -> Result<Vec<ProductRow>, RepoError> {
    let sql = format!(
        r#"
        SELECT {COLUMNS}
        FROM products
        WHERE category_id = $1 AND status = $2
        ORDER BY created_at DESC
        "#
    );

    let rows = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(category_id)
        .bind(STATUS_AVAILABLE)
        .fetch_all(db)
        .await?;

    Ok(rows)
}

pub async fn list_by_seller(db: &PgPool, seller_email: &str) -> Result<Vec<ProductRow>, RepoError> {
    let sql = format!(
        r#"
        SELECT {COLUMNS}
        FROM products
        WHERE seller_email = $1
        ORDER BY created_at DESC
        "#
    );

    let rows = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(seller_email)
        .fetch_all(db)
        .await?;

    Ok(rows)
}

pub async fn list_advertised(db: &PgPool) -> Result<Vec<ProductRow>, RepoError> {
    let sql = format!(
        r#"
        SELECT {COLUMNS}
        FROM products
        WHERE advertised = TRUE AND status = $1
        ORDER BY created_at DESC
        "#
    );

    let rows = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(STATUS_AVAILABLE)
        .fetch_all(db)
        .await?;

    Ok(rows)
}

pub async fn list_reported(db: &PgPool) -> Result<Vec<ProductRow>, RepoError> {
    let sql = format!(
        r#"
        SELECT {COLUMNS}
        FROM products
        WHERE reported = TRUE
        ORDER BY created_at DESC
        "#
    );

    let rows = sqlx::query_as::<_, ProductRow>(&sql).fetch_all(db).await?;

    Ok(rows)
}

pub async fn set_advertised(
    db: &PgPool,
    product_id: Uuid,
    seller_email: &str,
) -> Result<Option<ProductRow>, RepoError> {
    let sql = format!(
        r#"
        UPDATE products
        SET advertised = TRUE
        WHERE id = $1 AND seller_email = $2
        RETURNING {COLUMNS}
        "#
    );

    let row = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(product_id)
        .bind(seller_email)
        .fetch_optional(db)
        .await?;

    Ok(row)
}

pub async fn set_reported(db: &PgPool, product_id: Uuid) -> Result<Option<ProductRow>, RepoError> {
    let sql = format!(
        r#"
        UPDATE products
        SET reported = TRUE
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    );

    let row = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(product_id)
        .fetch_optional(db)
        .await?;

    Ok(row)
}

// Single unconditional status write; no check of the previous status.
pub async fn mark_sold(db: &PgPool, product_id: Uuid) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        UPDATE products
        SET status = $2
        WHERE id = $1
        "#,
    )
    .bind(product_id)
    .bind(STATUS_SOLD)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_owned(
    db: &PgPool,
    product_id: Uuid,
    seller_email: &str,
) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM products
        WHERE id = $1 AND seller_email = $2
        "#,
    )
    .bind(product_id)
    .bind(seller_email)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_reported(db: &PgPool, product_id: Uuid) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM products
        WHERE id = $1 AND reported = TRUE
        "#,
    )
    .bind(product_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
