//! Claims domain errors

use thiserror::Error;

use core_kernel::ClaimId;

/// Errors that can occur in the claims domain
///
/// Store-level failures are translated into exactly one of these before they
/// reach a caller; collaborator error shapes never cross this boundary except
/// as the opaque `details` string on `Storage`.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("Invalid status '{value}', expected one of: Pending, InProgress, Resolved, Rejected")]
    InvalidStatus { value: String },

    #[error("A claim with this order number already exists")]
    DuplicateOrder,

    #[error("Claim not found: {0}")]
    NotFound(ClaimId),

    #[error("Claim storage failure: {details}")]
    Storage { details: String },
}

impl ClaimError {
    pub fn storage(details: impl Into<String>) -> Self {
        ClaimError::Storage {
            details: details.into(),
        }
    }
}
