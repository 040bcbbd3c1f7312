//! Store adapter implementations

pub mod accounts;
pub mod claims;

pub use accounts::PgAccountStore;
pub use claims::PgClaimStore;
