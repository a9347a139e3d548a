/*
 * Responsibility
 * - POST /create-payment-intent: delegate to the payment gateway
 * - POST /payments: record a completed payment, then flag booking (paid) and product (sold)
 *   - the booking is loaded first and must belong to the caller; product and price come from it
 *
 * The three writes are independent statements; a failure after the insert leaves
 * the payment recorded and is only logged.
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::{
        dto::payments::{
            CreatePaymentRequest, PaymentIntentRequest, PaymentIntentResponse, PaymentResponse,
        },
        extractors::{AuthCtx, AuthCtxExtractor},
    },
    error::AppError,
    repos::{
        booking_repo::{self, BookingRow},
        payment_repo, product_repo,
    },
    services::payments::to_minor_units,
    state::AppState,
};

pub async fn create_payment_intent(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<PaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    let amount = to_minor_units(req.price)
        .ok_or_else(|| AppError::bad_request("INVALID_PRICE", "price must be positive"))?;

    let intent = state.payments.create_intent(amount, &state.currency).await?;

    tracing::info!(
        email = %ctx.email,
        intent_id = %intent.id,
        amount,
        backend = state.payments.backend_name(),
        "payment intent created"
    );

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

pub async fn create_payment(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<PaymentResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_PAYMENT", msg))?;

    ctx.ensure_owner(&req.email)?;

    let booking = booking_repo::get(&state.db, req.booking_id)
        .await?
        .ok_or(AppError::not_found("booking"))?;

    check_booking(&ctx, &booking, &req)?;

    // Product and price come from the stored booking, never from the body.
    let row = payment_repo::create(
        &state.db,
        booking.id,
        booking.product_id,
        &ctx.email,
        booking.price,
        &req.transaction_id,
    )
    .await?;

    match booking_repo::mark_paid(&state.db, booking.id, &req.transaction_id).await {
        Ok(true) => {}
        Ok(false) => tracing::warn!(booking_id = %booking.id, "paid booking not found"),
        Err(e) => tracing::error!(booking_id = %booking.id, error = %e, "failed to mark booking paid"),
    }

    match product_repo::mark_sold(&state.db, booking.product_id).await {
        Ok(true) => {}
        Ok(false) => tracing::warn!(product_id = %booking.product_id, "sold product not found"),
        Err(e) => tracing::error!(product_id = %booking.product_id, error = %e, "failed to mark product sold"),
    }

    tracing::info!(payment_id = %row.id, transaction_id = %row.transaction_id, "payment recorded");

    Ok((StatusCode::CREATED, Json(row.into())))
}

/// The booking must be the caller's, still unpaid, and match what the client
/// claims to be paying for.
fn check_booking(
    ctx: &AuthCtx,
    booking: &BookingRow,
    req: &CreatePaymentRequest,
) -> Result<(), AppError> {
    ctx.ensure_owner(&booking.buyer_email)?;

    if booking.paid {
        return Err(AppError::Conflict { resource: "payment" });
    }
    if req.product_id.is_some_and(|id| id != booking.product_id) {
        return Err(AppError::bad_request(
            "BOOKING_MISMATCH",
            "productId does not match the booking",
        ));
    }
    if req.price != booking.price {
        return Err(AppError::bad_request(
            "BOOKING_MISMATCH",
            "price does not match the booking",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn booking(buyer: &str) -> BookingRow {
        BookingRow {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            product_name: "Galaxy S21".into(),
            buyer_email: buyer.into(),
            buyer_name: "Buyer".into(),
            phone: "0123".into(),
            meeting_location: "Chattogram".into(),
            price: 250,
            paid: false,
            transaction_id: None,
            created_at: Utc::now(),
        }
    }

    fn request_for(b: &BookingRow, email: &str) -> CreatePaymentRequest {
        CreatePaymentRequest {
            booking_id: b.id,
            product_id: Some(b.product_id),
            email: email.into(),
            price: b.price,
            transaction_id: "pi_123".into(),
        }
    }

    #[test]
    fn own_unpaid_booking_passes() {
        let b = booking("alice@example.com");
        let ctx = AuthCtx::new("alice@example.com");
        assert!(check_booking(&ctx, &b, &request_for(&b, &ctx.email)).is_ok());

        let mut req = request_for(&b, &ctx.email);
        req.product_id = None;
        assert!(check_booking(&ctx, &b, &req).is_ok());
    }

    #[test]
    fn someone_elses_booking_is_an_ownership_mismatch() {
        let b = booking("bob@example.com");
        let ctx = AuthCtx::new("alice@example.com");
        let err = check_booking(&ctx, &b, &request_for(&b, &ctx.email)).unwrap_err();
        assert!(matches!(err, AppError::OwnershipMismatch));
    }

    #[test]
    fn paid_booking_is_a_conflict() {
        let mut b = booking("alice@example.com");
        b.paid = true;
        let ctx = AuthCtx::new("alice@example.com");
        let err = check_booking(&ctx, &b, &request_for(&b, &ctx.email)).unwrap_err();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn product_or_price_not_matching_the_booking_is_rejected() {
        let b = booking("alice@example.com");
        let ctx = AuthCtx::new("alice@example.com");

        let mut req = request_for(&b, &ctx.email);
        req.product_id = Some(Uuid::new_v4());
        assert_eq!(
            check_booking(&ctx, &b, &req).unwrap_err().status(),
            StatusCode::BAD_REQUEST
        );

        let mut req = request_for(&b, &ctx.email);
        req.price = 1;
        assert_eq!(
            check_booking(&ctx, &b, &req).unwrap_err().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
