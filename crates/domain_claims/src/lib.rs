//! Warranty Claims Domain
//!
//! This crate implements the claim lifecycle from customer submission through
//! administrator review.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submit -> Pending -> InProgress -> Resolved/Rejected
//! ```
//!
//! Every claim is admitted with status `Pending`; an administrator moves it
//! through the remaining statuses via explicit status-update requests.

pub mod claim;
pub mod error;
pub mod service;
pub mod store;
pub mod submission;

pub use claim::{Claim, ClaimStatus};
pub use error::ClaimError;
pub use service::ClaimService;
pub use store::{ClaimStore, ClaimStoreError, ListPage, NewClaim};
pub use submission::ClaimSubmission;
