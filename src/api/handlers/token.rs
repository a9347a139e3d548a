use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::api::dto::token::{TokenQuery, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// GET /jwt?email=
///
/// Tokens are only minted for registered emails; anything else gets an empty
/// token with 403.
pub async fn issue_token(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let account = state.accounts.find_by_email(&query.email).await?;

    let Some(account) = account else {
        tracing::info!(email = %query.email, "token requested for unknown account");
        return Ok((StatusCode::FORBIDDEN, Json(TokenResponse::denied())));
    };

    let access_token = state.tokens.issue(&account.email).map_err(|_| AppError::Internal)?;

    Ok((StatusCode::OK, Json(TokenResponse { access_token })))
}
