/*
 * Responsibility
 * - The application-wide AppError
 * - IntoResponse (HTTP status + JSON error body)
 * - Uniform conversion from repo / payment errors
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::payments::PaymentError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },

    // No Authorization header at all.
    #[error("missing credential")]
    MissingCredential,
    // Header present but the token did not verify (signature, shape, expiry).
    #[error("invalid or expired credential")]
    InvalidCredential,
    #[error("insufficient role")]
    InsufficientRole,
    #[error("resource belongs to another account")]
    OwnershipMismatch,

    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("conflict: {resource} already exists")]
    Conflict { resource: &'static str },

    #[error("payment processor error")]
    PaymentGateway,
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::MissingCredential => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredential
            | AppError::InsufficientRole
            | AppError::OwnershipMismatch => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::PaymentGateway => StatusCode::BAD_GATEWAY,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest { code, .. } => code,
            AppError::MissingCredential => "UNAUTHORIZED",
            AppError::InvalidCredential => "INVALID_CREDENTIAL",
            AppError::InsufficientRole => "INSUFFICIENT_ROLE",
            AppError::OwnershipMismatch => "OWNERSHIP_MISMATCH",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Conflict { .. } => "CONFLICT",
            AppError::PaymentGateway => "PAYMENT_GATEWAY_ERROR",
            AppError::Internal => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = match &self {
            AppError::BadRequest { message, .. } => message.clone(),
            AppError::NotFound { resource } => format!("{resource} not found."),
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Conflict => AppError::Conflict { resource: "record" },
            RepoError::Db(err) => {
                tracing::error!(error = %err, "data store operation failed");
                AppError::Internal
            }
        }
    }
}

impl From<PaymentError> for AppError {
    fn from(e: PaymentError) -> Self {
        tracing::error!(error = %e, "payment intent creation failed");
        AppError::PaymentGateway
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_credential_is_401() {
        let (status, body) = body_json(AppError::MissingCredential).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn every_authorization_failure_is_403_with_its_own_code() {
        for (err, code) in [
            (AppError::InvalidCredential, "INVALID_CREDENTIAL"),
            (AppError::InsufficientRole, "INSUFFICIENT_ROLE"),
            (AppError::OwnershipMismatch, "OWNERSHIP_MISMATCH"),
        ] {
            let (status, body) = body_json(err).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body["error"]["code"], code);
        }
    }

    #[tokio::test]
    async fn not_found_names_the_resource() {
        let (status, body) = body_json(AppError::not_found("booking")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "booking not found.");
    }

    #[test]
    fn repo_conflict_maps_to_409() {
        assert_eq!(AppError::from(RepoError::Conflict).status(), StatusCode::CONFLICT);
    }
}
