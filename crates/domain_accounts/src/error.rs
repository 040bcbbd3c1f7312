//! Accounts domain errors

use thiserror::Error;

/// Errors that can occur in the accounts domain
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("An admin account already exists")]
    AlreadyBootstrapped,

    /// Deliberately identical for an unknown email and a wrong secret
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account storage failure: {details}")]
    Storage { details: String },
}

impl AccountError {
    pub fn storage(details: impl Into<String>) -> Self {
        AccountError::Storage {
            details: details.into(),
        }
    }
}
