//! Account store port
//!
//! The bootstrap invariant lives here: `insert_bootstrap_admin` must be a
//! single atomic operation that fails with `BootstrapConflict` when any
//! account already exists. Checking first and inserting second is not enough
//! under concurrency; the Postgres adapter backs this with a first-row
//! constraint and the mock holds its lock across check and insert.

use async_trait::async_trait;
use thiserror::Error;

use crate::account::Account;

/// Data for creating the bootstrap admin account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    /// Already hashed; stores never see the raw secret
    pub password_hash: String,
}

/// Errors an account store implementation may report
#[derive(Debug, Error)]
pub enum AccountStoreError {
    /// An account already exists, so bootstrap is permanently disabled
    #[error("an account already exists")]
    BootstrapConflict,

    /// The store could not be reached or failed unexpectedly
    #[error("account store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence port for administrative accounts
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Whether at least one account exists
    async fn any_exists(&self) -> Result<bool, AccountStoreError>;

    /// Atomically creates the first admin account
    ///
    /// Exactly one of any number of concurrent calls succeeds; the rest fail
    /// with `BootstrapConflict`.
    async fn insert_bootstrap_admin(
        &self,
        account: NewAccount,
    ) -> Result<Account, AccountStoreError>;

    /// Fetches an account by its login email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountStoreError>;
}

/// In-memory mock implementation of `AccountStore`
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use core_kernel::AccountId;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory account store for tests
    #[derive(Debug, Default, Clone)]
    pub struct MockAccountStore {
        accounts: Arc<RwLock<Vec<Account>>>,
    }

    impl MockAccountStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl AccountStore for MockAccountStore {
        async fn any_exists(&self) -> Result<bool, AccountStoreError> {
            Ok(!self.accounts.read().await.is_empty())
        }

        async fn insert_bootstrap_admin(
            &self,
            account: NewAccount,
        ) -> Result<Account, AccountStoreError> {
            // check and insert under one write lock
            let mut accounts = self.accounts.write().await;
            if !accounts.is_empty() {
                return Err(AccountStoreError::BootstrapConflict);
            }

            let created = Account {
                id: AccountId::new_v7(),
                email: account.email,
                password_hash: account.password_hash,
                is_admin: true,
                created_at: Utc::now(),
            };
            accounts.push(created.clone());
            Ok(created)
        }

        async fn find_by_email(
            &self,
            email: &str,
        ) -> Result<Option<Account>, AccountStoreError> {
            Ok(self
                .accounts
                .read()
                .await
                .iter()
                .find(|account| account.email == email)
                .cloned())
        }
    }
}
