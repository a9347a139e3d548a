//! Identity tokens: HS256 JWTs carrying the account email.
//!
//! The same process issues and verifies, so both halves share one secret.
//! The role is intentionally not part of the claim; it is re-read from the
//! account store on every admin-gated request.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Sign(#[source] jsonwebtoken::errors::Error),
    #[error("token verification failed: {0}")]
    Verify(#[from] jsonwebtoken::errors::Error),
    #[error("empty 'email' claim")]
    EmptyEmail,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: u64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenService")
            .field("validation", &self.validation)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenService {
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_seconds,
        }
    }

    /// Sign a token for `email`. Callers must have confirmed the account exists.
    pub fn issue(&self, email: &str) -> Result<String, TokenError> {
        let now = chrono::Utc::now().timestamp();
        let claims = IdentityClaims {
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl_seconds as i64,
        };
        self.sign(&claims)
    }

    pub(crate) fn sign(&self, claims: &IdentityClaims) -> Result<String, TokenError> {
        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());
        jsonwebtoken::encode(&header, claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign JWT");
            TokenError::Sign(e)
        })
    }

    /// Checks signature and `exp`, then returns the decoded claim.
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        let data =
            jsonwebtoken::decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)?;

        if data.claims.email.trim().is_empty() {
            return Err(TokenError::EmptyEmail);
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-do-not-use";

    #[test]
    fn issued_token_verifies_and_carries_email() {
        let svc = TokenService::new(SECRET, 7200);
        let token = svc.issue("alice@example.com").unwrap();

        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 7200);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let issuer = TokenService::new("some-other-secret", 7200);
        let verifier = TokenService::new(SECRET, 7200);
        let token = issuer.issue("alice@example.com").unwrap();

        assert!(matches!(verifier.verify(&token), Err(TokenError::Verify(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let svc = TokenService::new(SECRET, 7200);
        let now = chrono::Utc::now().timestamp();
        let token = svc
            .sign(&IdentityClaims {
                email: "alice@example.com".into(),
                iat: now - 3 * 3600,
                exp: now - 3600,
            })
            .unwrap();

        assert!(svc.verify(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let svc = TokenService::new(SECRET, 7200);
        assert!(svc.verify("not-a-jwt").is_err());
        assert!(svc.verify("").is_err());
    }

    #[test]
    fn empty_email_claim_is_rejected() {
        let svc = TokenService::new(SECRET, 7200);
        let now = chrono::Utc::now().timestamp();
        let token = svc
            .sign(&IdentityClaims {
                email: "  ".into(),
                iat: now,
                exp: now + 60,
            })
            .unwrap();

        assert!(matches!(svc.verify(&token), Err(TokenError::EmptyEmail)));
    }
}
