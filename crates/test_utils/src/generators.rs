//! Randomized test data

use fake::faker::address::en::StreetName;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use uuid::Uuid;

use domain_claims::ClaimSubmission;

/// Generates a valid submission with randomized customer data
pub fn random_submission() -> ClaimSubmission {
    ClaimSubmission {
        order_number: Some(format!("ORD-{}", Uuid::new_v4().simple())),
        email: Some(SafeEmail().fake()),
        name: Some(Name().fake()),
        address: Some(StreetName().fake()),
        phone_number: Some(PhoneNumber().fake()),
        brand: Some(CompanyName().fake()),
        problem_description: Some("Stopped working under normal use".to_string()),
        idempotency_key: None,
    }
}
