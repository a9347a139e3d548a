//! Bearer token check → `AuthCtx` in request extensions.
//!
//! - no `Authorization` header            → 401 (MissingCredential)
//! - header present, token does not verify → 403 (InvalidCredential)
//!
//! The header is read as `<scheme> <credential>`; anything other than a
//! non-empty Bearer credential is treated like a bad signature.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderValue, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// Put every route of `router` behind the access check.
///
/// Uses `route_layer` so unmatched paths still answer 404 instead of 401.
pub fn protect(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8: from_fn can't take State, so pass it explicitly
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AppError::MissingCredential)?;

    let token = bearer_credential(value).ok_or_else(|| {
        tracing::warn!("malformed authorization header");
        AppError::InvalidCredential
    })?;

    let claims = match state.tokens.verify(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(error = %err, "access token verification failed");
            return Err(AppError::InvalidCredential);
        }
    };

    tracing::debug!(email = %claims.email, "access token accepted");

    // middleware → extractor
    req.extensions_mut().insert(AuthCtx::from(claims));

    Ok(next.run(req).await)
}

fn bearer_credential(value: &HeaderValue) -> Option<&str> {
    let raw = value.to_str().ok()?;
    let (scheme, credential) = raw.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let credential = credential.trim();
    (!credential.is_empty()).then_some(credential)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hv(s: &str) -> HeaderValue {
        HeaderValue::from_str(s).unwrap()
    }

    #[test]
    fn bearer_credential_is_extracted() {
        assert_eq!(bearer_credential(&hv("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_credential(&hv("bearer   abc")), Some("abc"));
    }

    #[test]
    fn other_schemes_and_empty_credentials_are_rejected() {
        assert_eq!(bearer_credential(&hv("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_credential(&hv("Bearer")), None);
        assert_eq!(bearer_credential(&hv("Bearer    ")), None);
        assert_eq!(bearer_credential(&hv("abc.def.ghi")), None);
    }
}
