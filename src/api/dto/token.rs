use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub email: String,
}

/// `accessToken` is empty when no account matches the email.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

impl TokenResponse {
    pub fn denied() -> Self {
        Self {
            access_token: String::new(),
        }
    }
}
