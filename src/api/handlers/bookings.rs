/*
 * Responsibility
 * - buyer bookings; every route compares the buyer email with the token identity
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::{
        dto::bookings::{BookingResponse, CreateBookingRequest},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    repos::booking_repo,
    state::AppState,
};

pub async fn create_booking(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_BOOKING", msg))?;

    ctx.ensure_owner(&req.buyer_email)?;

    let row = booking_repo::create(&state.db, &req.as_new()).await?;
    tracing::info!(booking_id = %row.id, product_id = %row.product_id, "booking created");

    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /user/bookings/{email}
pub async fn list_user_bookings(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(email): Path<String>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    ctx.ensure_owner(&email)?;

    let rows = booking_repo::list_by_buyer(&state.db, &email).await?;
    Ok(Json(rows.into_iter().map(BookingResponse::from).collect()))
}

pub async fn get_booking(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let row = booking_repo::get(&state.db, booking_id)
        .await?
        .ok_or(AppError::not_found("booking"))?;

    ctx.ensure_owner(&row.buyer_email)?;

    Ok(Json(row.into()))
}
