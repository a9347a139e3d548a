use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::services::payments::gateway::{PaymentError, PaymentGateway, PaymentIntent};

/// Stripe-backed payment intents (`POST /v1/payment_intents`).
#[derive(Clone)]
pub struct StripeGateway {
    http: reqwest::Client,
    api_base: url::Url,
    secret_key: String,
}

impl std::fmt::Debug for StripeGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeGateway")
            .field("api_base", &self.api_base.as_str())
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct IntentBody {
    id: String,
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

impl StripeGateway {
    pub fn new(http: reqwest::Client, api_base: url::Url, secret_key: impl Into<String>) -> Self {
        Self {
            http,
            api_base,
            secret_key: secret_key.into(),
        }
    }

    fn intents_url(&self) -> Result<url::Url, PaymentError> {
        self.api_base
            .join("/v1/payment_intents")
            .map_err(|e| PaymentError::InvalidResponse(format!("bad api base: {e}")))
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    fn backend_name(&self) -> &'static str {
        "stripe"
    }

    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        let form = vec![
            ("amount", amount_minor.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        debug!(amount_minor, currency, "creating payment intent");

        let resp = self
            .http
            .post(self.intents_url()?)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| "unknown error".to_string());
            warn!(status = %status, %message, "stripe rejected payment intent");
            return Err(PaymentError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: IntentBody = resp.json().await?;
        let client_secret = body
            .client_secret
            .ok_or_else(|| PaymentError::InvalidResponse("missing client_secret".to_string()))?;

        Ok(PaymentIntent {
            id: body.id,
            client_secret,
        })
    }
}
