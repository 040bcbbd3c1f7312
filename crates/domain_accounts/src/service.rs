//! Account bootstrap and login service

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::AccountId;

use crate::account::AccountProfile;
use crate::credentials;
use crate::error::AccountError;
use crate::store::{AccountStore, AccountStoreError, NewAccount};

/// Service implementing bootstrap and credential verification
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    /// Creates a service over the given store
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Whether at least one account exists
    pub async fn exists(&self) -> Result<bool, AccountError> {
        self.store
            .any_exists()
            .await
            .map_err(|err| AccountError::storage(err.to_string()))
    }

    /// Creates the first administrative account
    ///
    /// The existence check here is advisory; the store re-verifies it at
    /// write time, so a race between two bootstraps still yields exactly one
    /// account. The secret is hashed off the async executor.
    pub async fn bootstrap(&self, email: &str, secret: &str) -> Result<AccountId, AccountError> {
        let email = email.trim();
        if email.is_empty() || secret.is_empty() {
            return Err(AccountError::MissingCredentials);
        }

        if self.exists().await? {
            return Err(AccountError::AlreadyBootstrapped);
        }

        let secret = secret.to_string();
        let password_hash = tokio::task::spawn_blocking(move || credentials::hash_secret(&secret))
            .await
            .map_err(|err| AccountError::storage(err.to_string()))?
            .map_err(|err| AccountError::storage(err.to_string()))?;

        let account = self
            .store
            .insert_bootstrap_admin(NewAccount {
                email: email.to_string(),
                password_hash,
            })
            .await
            .map_err(|err| match err {
                AccountStoreError::BootstrapConflict => AccountError::AlreadyBootstrapped,
                other => AccountError::storage(other.to_string()),
            })?;

        info!(account_id = %account.id, "bootstrap admin account created");
        Ok(account.id)
    }

    /// Verifies credentials and returns the public account profile
    ///
    /// An unknown email and a failed verification produce the same error, so
    /// the response does not reveal which condition failed. The stored hash
    /// never leaves this function.
    pub async fn login(&self, email: &str, secret: &str) -> Result<AccountProfile, AccountError> {
        let account = self
            .store
            .find_by_email(email.trim())
            .await
            .map_err(|err| AccountError::storage(err.to_string()))?
            .ok_or(AccountError::InvalidCredentials)?;

        let secret = secret.to_string();
        let stored_hash = account.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || {
            credentials::verify_secret(&secret, &stored_hash)
        })
        .await
        .map_err(|err| AccountError::storage(err.to_string()))?;

        if !verified {
            warn!(email = %account.email, "login rejected");
            return Err(AccountError::InvalidCredentials);
        }

        Ok(account.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::MockAccountStore;

    fn service() -> AccountService {
        AccountService::new(Arc::new(MockAccountStore::new()))
    }

    #[tokio::test]
    async fn test_bootstrap_then_exists() {
        let service = service();
        assert!(!service.exists().await.unwrap());

        service.bootstrap("admin@example.com", "s3cret!").await.unwrap();

        assert!(service.exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_second_bootstrap_is_rejected() {
        let service = service();
        service.bootstrap("first@example.com", "pw-one").await.unwrap();

        let err = service
            .bootstrap("second@example.com", "pw-two")
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::AlreadyBootstrapped));
    }

    #[tokio::test]
    async fn test_blank_credentials_are_rejected() {
        let service = service();
        let err = service.bootstrap("  ", "pw").await.unwrap_err();
        assert!(matches!(err, AccountError::MissingCredentials));

        let err = service.bootstrap("admin@example.com", "").await.unwrap_err();
        assert!(matches!(err, AccountError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_concurrent_bootstraps_create_exactly_one_account() {
        let service = service();
        let a = {
            let service = service.clone();
            tokio::spawn(async move { service.bootstrap("a@example.com", "pw-a").await })
        };
        let b = {
            let service = service.clone();
            tokio::spawn(async move { service.bootstrap("b@example.com", "pw-b").await })
        };

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        assert_eq!(
            a.is_ok() as u8 + b.is_ok() as u8,
            1,
            "exactly one bootstrap succeeds, got {a:?} and {b:?}"
        );
        let failed = if a.is_err() { a } else { b };
        assert!(matches!(
            failed.unwrap_err(),
            AccountError::AlreadyBootstrapped
        ));
        assert!(service.exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_login_returns_profile_without_hash() {
        let service = service();
        service.bootstrap("admin@example.com", "open sesame").await.unwrap();

        let profile = service.login("admin@example.com", "open sesame").await.unwrap();
        assert_eq!(profile.email, "admin@example.com");
        assert!(profile.is_admin);
    }

    #[tokio::test]
    async fn test_wrong_secret_and_unknown_email_fail_identically() {
        let service = service();
        service.bootstrap("admin@example.com", "right").await.unwrap();

        let wrong_secret = service
            .login("admin@example.com", "wrong")
            .await
            .unwrap_err();
        let unknown_email = service.login("ghost@example.com", "right").await.unwrap_err();

        assert!(matches!(wrong_secret, AccountError::InvalidCredentials));
        assert!(matches!(unknown_email, AccountError::InvalidCredentials));
        assert_eq!(wrong_secret.to_string(), unknown_email.to_string());
    }
}
