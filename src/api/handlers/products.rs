/*
 * Responsibility
 * - product listing, seller-owned writes, reporting
 * - owner-scoped writes pass the caller's email down to the repo filter
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::{
        dto::products::{CreateProductRequest, ProductResponse},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    repos::{category_repo, product_repo},
    state::AppState,
};

fn to_responses(rows: Vec<product_repo::ProductRow>) -> Json<Vec<ProductResponse>> {
    Json(rows.into_iter().map(ProductResponse::from).collect())
}

pub async fn create_product(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_PRODUCT", msg))?;

    ctx.ensure_owner(&req.seller_email)?;

    // Listing requires a seller account, read fresh like the admin gate does.
    let is_seller = state
        .accounts
        .find_by_email(&ctx.email)
        .await?
        .is_some_and(|a| a.is_seller());
    if !is_seller {
        tracing::warn!(email = %ctx.email, "product listing denied: not a seller");
        return Err(AppError::InsufficientRole);
    }

    if !category_repo::exists(&state.db, req.category_id).await? {
        return Err(AppError::not_found("category"));
    }

    let row = product_repo::create(&state.db, &req.as_new()).await?;
    tracing::info!(product_id = %row.id, seller = %row.seller_email, "product listed");

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn list_advertised(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let rows = product_repo::list_advertised(&state.db).await?;
    Ok(to_responses(rows))
}

pub async fn list_seller_products(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(email): Path<String>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    ctx.ensure_owner(&email)?;

    let rows = product_repo::list_by_seller(&state.db, &email).await?;
    Ok(to_responses(rows))
}

pub async fn advertise_product(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(product_id): Path<Uuid>,
) -> Result<Json<ProductResponse>, AppError> {
    let row = product_repo::set_advertised(&state.db, product_id, &ctx.email)
        .await?
        .ok_or(AppError::not_found("product"))?;

    Ok(Json(row.into()))
}

pub async fn delete_product(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(product_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if product_repo::delete_owned(&state.db, product_id, &ctx.email).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("product"))
    }
}

pub async fn report_product(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(product_id): Path<Uuid>,
) -> Result<Json<ProductResponse>, AppError> {
    let row = product_repo::set_reported(&state.db, product_id)
        .await?
        .ok_or(AppError::not_found("product"))?;

    tracing::info!(%product_id, reporter = %ctx.email, "product reported");

    Ok(Json(row.into()))
}

pub async fn list_reported(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let rows = product_repo::list_reported(&state.db).await?;
    Ok(to_responses(rows))
}

pub async fn delete_reported(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if product_repo::delete_reported(&state.db, product_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("reported product"))
    }
}
