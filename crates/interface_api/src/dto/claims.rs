//! Claims DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_claims::{Claim, ClaimSubmission};

/// Claim submission body; field presence is checked by the domain so every
/// missing field can be reported at once
pub type SubmitClaimRequest = ClaimSubmission;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListClaimsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: Uuid,
    pub order_number: String,
    pub email: String,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub brand: String,
    pub problem_description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: *claim.id.as_uuid(),
            order_number: claim.order_number,
            email: claim.email,
            name: claim.name,
            address: claim.address,
            phone_number: claim.phone_number,
            brand: claim.brand,
            problem_description: claim.problem_description,
            status: claim.status.to_string(),
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        }
    }
}
