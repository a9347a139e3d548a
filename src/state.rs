/*
 * Responsibility
 * - The shared context attached to the Router (AppState)
 *   - db pool, account store, token service, payment gateway, currency
 * - Built once at start-up and cloned per request (everything inside is Arc / cheap Clone)
 */
use std::sync::Arc;

use sqlx::PgPool;

use crate::repos::account_repo::AccountStore;
use crate::services::auth::TokenService;
use crate::services::payments::PaymentGateway;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub accounts: Arc<dyn AccountStore>,
    pub tokens: Arc<TokenService>,
    pub payments: Arc<dyn PaymentGateway>,
    pub currency: Arc<str>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        accounts: Arc<dyn AccountStore>,
        tokens: Arc<TokenService>,
        payments: Arc<dyn PaymentGateway>,
        currency: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            db,
            accounts,
            tokens,
            payments,
            currency: currency.into(),
        }
    }
}
