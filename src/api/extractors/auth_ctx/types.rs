/*
 * Responsibility
 * - The "authenticated context" type that handlers see
 * - The access middleware verifies the bearer token and stores this in request extensions
 *
 * Notes
 * - Only the identity (email) lives here. The role is never cached; the admin gate
 *   re-reads the account record on every request.
 */
use crate::error::AppError;
use crate::services::auth::IdentityClaims;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub email: String,
}

impl AuthCtx {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Resource-level check: the requested identity must be the caller's own.
    ///
    /// Each endpoint decides which field it compares (path email, body email,
    /// stored owner), so this stays a per-handler call rather than a layer.
    pub fn ensure_owner(&self, requested_email: &str) -> Result<(), AppError> {
        if self.email == requested_email {
            Ok(())
        } else {
            tracing::warn!(
                caller = %self.email,
                requested = %requested_email,
                "ownership mismatch"
            );
            Err(AppError::OwnershipMismatch)
        }
    }
}

impl From<IdentityClaims> for AuthCtx {
    fn from(claims: IdentityClaims) -> Self {
        Self::new(claims.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_email_passes() {
        let ctx = AuthCtx::new("alice@example.com");
        assert!(ctx.ensure_owner("alice@example.com").is_ok());
    }

    #[test]
    fn other_email_is_an_ownership_mismatch() {
        let ctx = AuthCtx::new("alice@example.com");
        assert!(matches!(
            ctx.ensure_owner("bob@example.com"),
            Err(AppError::OwnershipMismatch)
        ));
    }
}
