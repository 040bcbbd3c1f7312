//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::ClaimId;

/// Claim status
///
/// A closed vocabulary: status strings arriving over the wire are parsed
/// against this set and anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Newly submitted, awaiting review
    Pending,
    /// An administrator is working the claim
    InProgress,
    /// Settled in the customer's favour
    Resolved,
    /// Declined
    Rejected,
}

impl ClaimStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Pending,
        ClaimStatus::InProgress,
        ClaimStatus::Resolved,
        ClaimStatus::Rejected,
    ];

    /// The wire representation of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::InProgress => "InProgress",
            ClaimStatus::Resolved => "Resolved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for status strings outside the closed vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown claim status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for ClaimStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A warranty claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Customer order number, unique across all claims
    pub order_number: String,
    /// Customer email
    pub email: String,
    /// Customer name
    pub name: String,
    /// Postal address
    pub address: String,
    /// Phone number
    pub phone_number: String,
    /// Product brand
    pub brand: String,
    /// Free-form description of the defect
    pub problem_description: String,
    /// Status
    pub status: ClaimStatus,
    /// Client-supplied idempotency key, if any
    pub idempotency_key: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Applies a status change, touching the update timestamp
    pub fn set_status(&mut self, status: ClaimStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_display() {
        for status in ClaimStatus::ALL {
            let parsed: ClaimStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown_values() {
        for value in ["pending", "Done", "IN_PROGRESS", ""] {
            let result: Result<ClaimStatus, _> = value.parse();
            assert!(result.is_err(), "expected {value:?} to be rejected");
        }
    }

    #[test]
    fn test_status_serde_matches_wire_names() {
        let json = serde_json::to_string(&ClaimStatus::InProgress).unwrap();
        assert_eq!(json, "\"InProgress\"");
    }
}
