/*
 * Responsibility
 * - Account request/response DTOs
 * - validate() for shape checks (self-registration can never claim the admin role)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::account_repo::{Account, AccountType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub email: String,
    #[serde(default)]
    pub name: String,
    // Defaults to `user` (a buyer).
    pub account_type: Option<AccountType>,
}

impl CreateAccountRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("email is required");
        }
        if !email.contains('@') {
            return Err("email is invalid");
        }
        if self.account_type == Some(AccountType::Admin) {
            return Err("accountType must be seller or user");
        }
        Ok(())
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type.unwrap_or(AccountType::User)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub account_type: AccountType,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub account_type: AccountType,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            email: a.email,
            name: a.name,
            account_type: a.account_type,
            verified: a.verified,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatus {
    pub is_admin: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerStatus {
    pub is_seller: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(email: &str, account_type: Option<AccountType>) -> CreateAccountRequest {
        CreateAccountRequest {
            email: email.to_string(),
            name: "n".to_string(),
            account_type,
        }
    }

    #[test]
    fn buyer_and_seller_registrations_are_accepted() {
        assert!(req("a@example.com", None).validate().is_ok());
        assert!(req("a@example.com", Some(AccountType::Seller)).validate().is_ok());
        assert_eq!(req("a@example.com", None).account_type(), AccountType::User);
    }

    #[test]
    fn admin_self_registration_is_rejected() {
        assert!(req("a@example.com", Some(AccountType::Admin)).validate().is_err());
    }

    #[test]
    fn blank_or_malformed_email_is_rejected() {
        assert!(req("   ", None).validate().is_err());
        assert!(req("not-an-email", None).validate().is_err());
    }

    #[test]
    fn account_type_is_read_from_camel_case_lowercase_json() {
        let r: CreateAccountRequest =
            serde_json::from_str(r#"{"email":"s@example.com","accountType":"seller"}"#).unwrap();
        assert_eq!(r.account_type(), AccountType::Seller);
        assert_eq!(r.name, "");
    }
}
