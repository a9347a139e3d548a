//! Payment-intent collaborator interface.
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment processor transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("payment processor rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("payment processor returned an unexpected body: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Creates payment intents with a third-party processor.
///
/// The amount is in minor currency units (cents for `usd`).
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    fn backend_name(&self) -> &'static str;

    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError>;
}

/// Decimal price (as sent by clients) to minor units. `None` for non-positive or
/// non-finite input.
pub fn to_minor_units(price: f64) -> Option<i64> {
    if !price.is_finite() || price <= 0.0 {
        return None;
    }
    let minor = (price * 100.0).round();
    if minor < 1.0 || minor > i64::MAX as f64 {
        return None;
    }
    Some(minor as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_converted_to_cents_with_rounding() {
        assert_eq!(to_minor_units(120.0), Some(12_000));
        assert_eq!(to_minor_units(19.99), Some(1_999));
        assert_eq!(to_minor_units(0.125), Some(13));
    }

    #[test]
    fn non_positive_or_nan_prices_are_rejected() {
        assert_eq!(to_minor_units(0.0), None);
        assert_eq!(to_minor_units(-5.0), None);
        assert_eq!(to_minor_units(f64::NAN), None);
        assert_eq!(to_minor_units(f64::INFINITY), None);
        assert_eq!(to_minor_units(0.001), None);
    }
}
