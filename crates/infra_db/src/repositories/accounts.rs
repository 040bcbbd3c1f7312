//! Accounts store adapter
//!
//! The bootstrap invariant is carried entirely by the `accounts` schema: the
//! insert below races freely, and the first-row guard index decides the
//! winner. Any unique violation therefore means "an account already exists".

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::AccountId;
use domain_accounts::account::Account;
use domain_accounts::store::{AccountStore, AccountStoreError, NewAccount};

use crate::error::DatabaseError;

const ACCOUNT_COLUMNS: &str = "account_id, email, password_hash, is_admin, created_at";

/// PostgreSQL-backed account store
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row for an account
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    email: String,
    password_hash: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: AccountId::from_uuid(row.account_id),
            email: row.email,
            password_hash: row.password_hash,
            is_admin: row.is_admin,
            created_at: row.created_at,
        }
    }
}

fn map_account_error(err: DatabaseError) -> AccountStoreError {
    match err {
        // either the bootstrap guard or the email index fired; both mean an
        // account exists
        DatabaseError::DuplicateEntry { .. } => AccountStoreError::BootstrapConflict,
        other => AccountStoreError::Unavailable(other.to_string()),
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn any_exists(&self) -> Result<bool, AccountStoreError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM accounts)")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_account_error(e.into()))?;

        Ok(exists)
    }

    async fn insert_bootstrap_admin(
        &self,
        account: NewAccount,
    ) -> Result<Account, AccountStoreError> {
        let account_id = AccountId::new_v7();

        let sql = format!(
            "INSERT INTO accounts (account_id, email, password_hash, is_admin, created_at) \
             VALUES ($1, $2, $3, TRUE, $4) \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(account_id.as_uuid())
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_account_error(e.into()))?;

        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountStoreError> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1");
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_account_error(e.into()))?;

        Ok(row.map(Account::from))
    }
}
