/*
 * Responsibility
 * - account registration and public role lookups
 * - seller / buyer moderation (admin routes; the gate runs before these handlers)
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::dto::users::{
        AccountResponse, AdminStatus, CreateAccountRequest, SellerStatus, UpdateRoleRequest,
    },
    error::AppError,
    repos::account_repo::{AccountType, NewAccount},
    state::AppState,
};

pub async fn create_account(
    State(state): State<AppState>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_ACCOUNT", msg))?;

    let (account, created) = state
        .accounts
        .upsert(NewAccount {
            email: req.email.trim().to_string(),
            name: req.name.trim().to_string(),
            account_type: req.account_type(),
        })
        .await?;

    let status = if created {
        tracing::info!(email = %account.email, account_type = %account.account_type, "account registered");
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(account.into())))
}

pub async fn admin_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<AdminStatus>, AppError> {
    let account = state.accounts.find_by_email(&email).await?;
    Ok(Json(AdminStatus {
        is_admin: account.is_some_and(|a| a.is_admin()),
    }))
}

pub async fn seller_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<SellerStatus>, AppError> {
    let account = state.accounts.find_by_email(&email).await?;
    Ok(Json(SellerStatus {
        is_seller: account.is_some_and(|a| a.is_seller()),
    }))
}

pub async fn list_sellers(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    list_by_type(&state, AccountType::Seller).await
}

pub async fn list_buyers(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    list_by_type(&state, AccountType::User).await
}

async fn list_by_type(
    state: &AppState,
    account_type: AccountType,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = state.accounts.list_by_type(account_type).await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

pub async fn verify_seller(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state
        .accounts
        .set_verified(account_id)
        .await?
        .ok_or(AppError::not_found("account"))?;

    Ok(Json(account.into()))
}

pub async fn update_role(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state
        .accounts
        .set_account_type(account_id, req.account_type)
        .await?
        .ok_or(AppError::not_found("account"))?;

    tracing::info!(
        email = %account.email,
        account_type = %account.account_type,
        "account role changed"
    );

    Ok(Json(account.into()))
}

pub async fn delete_account(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.accounts.delete(account_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("account"))
    }
}
