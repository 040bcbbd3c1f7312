//! Account aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::AccountId;

/// An administrative account as stored
///
/// Carries the Argon2id password hash and therefore never crosses the API
/// boundary; handlers work with [`AccountProfile`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,
    /// Login email, unique
    pub email: String,
    /// Argon2id password hash
    pub password_hash: String,
    /// Administrative flag
    pub is_admin: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// Public view of an account (safe for client responses -- no password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: AccountId,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            is_admin: account.is_admin,
            created_at: account.created_at,
        }
    }
}
