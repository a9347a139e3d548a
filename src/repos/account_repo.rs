/*
 * Responsibility
 * - Account records (email is the unique lookup key, account_type carries the role)
 * - AccountStore: the lookup seam used by the role gate and token issuance
 * - PgAccountStore: SQLx implementation over PgPool
 */
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Admin,
    Seller,
    User,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Admin => "admin",
            AccountType::Seller => "seller",
            AccountType::User => "user",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown account type: {0}")]
pub struct UnknownAccountType(pub String);

impl FromStr for AccountType {
    type Err = UnknownAccountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "seller" => Ok(Self::Seller),
            "user" => Ok(Self::User),
            other => Err(UnknownAccountType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub account_type: AccountType,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.account_type == AccountType::Admin
    }

    pub fn is_seller(&self) -> bool {
        self.account_type == AccountType::Seller
    }
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub name: String,
    pub account_type: AccountType,
}

/// Keyed account lookup. Implementations must be safe to share across requests.
///
/// Nothing here caches: every call reflects the current state of the store, so a role
/// change is visible on the very next gated request.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>>;

    // Inserts when the email is new; otherwise returns the stored record untouched.
    // The flag is true when a row was created.
    async fn upsert(&self, account: NewAccount) -> RepoResult<(Account, bool)>;

    async fn list_by_type(&self, account_type: AccountType) -> RepoResult<Vec<Account>>;

    async fn delete(&self, id: Uuid) -> RepoResult<bool>;

    async fn set_verified(&self, id: Uuid) -> RepoResult<Option<Account>>;

    async fn set_account_type(
        &self,
        id: Uuid,
        account_type: AccountType,
    ) -> RepoResult<Option<Account>>;
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    name: String,
    account_type: String,
    verified: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = RepoError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let account_type = row
            .account_type
            .parse::<AccountType>()
            .map_err(|e| RepoError::Db(sqlx::Error::Decode(Box::new(e))))?;

        Ok(Account {
            id: row.id,
            email: row.email,
            name: row.name,
            account_type,
            verified: row.verified,
            created_at: row.created_at,
        })
    }
}

fn convert_opt(row: Option<AccountRow>) -> RepoResult<Option<Account>> {
    row.map(Account::try_from).transpose()
}

#[derive(Clone, Debug)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, name, account_type, verified, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        convert_opt(row)
    }

    async fn upsert(&self, account: NewAccount) -> RepoResult<(Account, bool)> {
        let inserted = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (email, name, account_type)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, name, account_type, verified, created_at
            "#,
        )
        .bind(&account.email)
        .bind(&account.name)
        .bind(account.account_type.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        if let Some(row) = inserted {
            return Ok((Account::try_from(row)?, true));
        }

        // Lost the race or already registered: hand back what is stored.
        let existing = self
            .find_by_email(&account.email)
            .await?
            .ok_or(RepoError::Conflict)?;

        Ok((existing, false))
    }

    async fn list_by_type(&self, account_type: AccountType) -> RepoResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, name, account_type, verified, created_at
            FROM accounts
            WHERE account_type = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(account_type.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Account::try_from).collect()
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_verified(&self, id: Uuid) -> RepoResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts
            SET verified = TRUE
            WHERE id = $1
            RETURNING id, email, name, account_type, verified, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        convert_opt(row)
    }

    async fn set_account_type(
        &self,
        id: Uuid,
        account_type: AccountType,
    ) -> RepoResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts
            SET account_type = $2
            WHERE id = $1
            RETURNING id, email, name, account_type, verified, created_at
            "#,
        )
        .bind(id)
        .bind(account_type.as_str())
        .fetch_optional(&self.pool)
        .await?;

        convert_opt(row)
    }
}
