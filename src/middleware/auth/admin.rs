//! Admin gate. Runs after the access check and re-reads the caller's account
//! on every request; only `account_type = admin` passes.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::middleware::auth::access;
use crate::state::AppState;

/// Access check first, then the admin check.
///
/// Layers added later wrap earlier ones, so the access layer is applied last to
/// make it the outer (first-running) stage.
pub fn protect(router: Router<AppState>, state: AppState) -> Router<AppState> {
    let router =
        router.route_layer(middleware::from_fn_with_state(state.clone(), admin_middleware));
    access::protect(router, state)
}

async fn admin_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let email = req
        .extensions()
        .get::<AuthCtx>()
        .map(|ctx| ctx.email.clone())
        .ok_or(AppError::MissingCredential)?;

    match state.accounts.find_by_email(&email).await {
        Ok(Some(account)) if account.is_admin() => Ok(next.run(req).await),
        Ok(Some(account)) => {
            tracing::warn!(
                %email,
                account_type = %account.account_type,
                "admin route denied"
            );
            Err(AppError::InsufficientRole)
        }
        Ok(None) => {
            tracing::warn!(%email, "admin route denied: no account for token email");
            Err(AppError::InsufficientRole)
        }
        Err(err) => {
            // no retry: a failed lookup is a deny
            tracing::error!(%email, error = %err, "account lookup failed in admin gate");
            Err(AppError::InsufficientRole)
        }
    }
}
