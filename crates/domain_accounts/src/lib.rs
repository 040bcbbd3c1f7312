//! Administrator Accounts Domain
//!
//! One-time bootstrap of the first administrative account and credential
//! verification for login. The bootstrap invariant (at most one account may
//! ever be created before any account exists) is enforced by the store, not
//! by a check in this crate, so two racing bootstraps settle to exactly one
//! account.

pub mod account;
pub mod credentials;
pub mod error;
pub mod service;
pub mod store;

pub use account::{Account, AccountProfile};
pub use error::AccountError;
pub use service::AccountService;
pub use store::{AccountStore, AccountStoreError, NewAccount};
