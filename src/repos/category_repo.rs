/*
 * Responsibility
 * - categories read access (seeded by operators, read-only over HTTP)
 */
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
}

pub async fn list(db: &PgPool) -> Result<Vec<CategoryRow>, RepoError> {
    let rows = sqlx::query_as::<_, CategoryRow>(
        r#"
        SELECT id, name, image_url
        FROM categories
        ORDER BY name
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn exists(db: &PgPool, category_id: Uuid) -> Result<bool, RepoError> {
    let found = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)
        "#,
    )
    .bind(category_id)
    .fetch_one(db)
    .await?;

    Ok(found)
}
