use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    api::dto::{categories::CategoryResponse, products::ProductResponse},
    error::AppError,
    repos::{category_repo, product_repo},
    state::AppState,
};

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let rows = category_repo::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(CategoryResponse::from).collect()))
}

/// Products still available in a category.
pub async fn list_category_products(
    State(state): State<AppState>,
    Path(category_id): Path<Uuid>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let rows = product_repo::list_available_by_category(&state.db, category_id).await?;
    Ok(Json(rows.into_iter().map(ProductResponse::from).collect()))
}
