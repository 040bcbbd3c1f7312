//! Test data builders
//!
//! Builders with sensible defaults so tests only spell out the fields they
//! care about.

use uuid::Uuid;

use domain_claims::ClaimSubmission;

use crate::fixtures::SubmissionFixtures;

/// Builder for claim submissions
///
/// Defaults to a complete, valid submission with a unique order number.
pub struct ClaimSubmissionBuilder {
    submission: ClaimSubmission,
}

impl Default for ClaimSubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimSubmissionBuilder {
    /// Creates a builder with valid defaults
    pub fn new() -> Self {
        Self {
            submission: ClaimSubmission {
                order_number: Some(format!("ORD-{}", Uuid::new_v4().simple())),
                email: Some(SubmissionFixtures::email().to_string()),
                name: Some(SubmissionFixtures::name().to_string()),
                address: Some(SubmissionFixtures::address().to_string()),
                phone_number: Some(SubmissionFixtures::phone_number().to_string()),
                brand: Some(SubmissionFixtures::brand().to_string()),
                problem_description: Some(
                    SubmissionFixtures::problem_description().to_string(),
                ),
                idempotency_key: None,
            },
        }
    }

    /// Sets the order number
    pub fn order_number(mut self, order_number: impl Into<String>) -> Self {
        self.submission.order_number = Some(order_number.into());
        self
    }

    /// Sets the customer email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.submission.email = Some(email.into());
        self
    }

    /// Sets the product brand
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.submission.brand = Some(brand.into());
        self
    }

    /// Sets the idempotency key
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.submission.idempotency_key = Some(key.into());
        self
    }

    /// Clears a field by wire name, for missing-field scenarios
    pub fn without(mut self, field: &str) -> Self {
        match field {
            "orderNumber" => self.submission.order_number = None,
            "email" => self.submission.email = None,
            "name" => self.submission.name = None,
            "address" => self.submission.address = None,
            "phoneNumber" => self.submission.phone_number = None,
            "brand" => self.submission.brand = None,
            "problemDescription" => self.submission.problem_description = None,
            other => panic!("unknown submission field {other:?}"),
        }
        self
    }

    /// Builds the submission
    pub fn build(self) -> ClaimSubmission {
        self.submission
    }
}
