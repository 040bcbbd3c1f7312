//! Pre-built test data

/// Canonical field values for a valid claim submission
pub struct SubmissionFixtures;

impl SubmissionFixtures {
    pub fn email() -> &'static str {
        "rosa.vang@example.com"
    }

    pub fn name() -> &'static str {
        "Rosa Vang"
    }

    pub fn address() -> &'static str {
        "27 Beacon Street, Apt 4"
    }

    pub fn phone_number() -> &'static str {
        "+1 617 555 0137"
    }

    pub fn brand() -> &'static str {
        "Glaciar"
    }

    pub fn problem_description() -> &'static str {
        "Unit stops cooling after roughly two hours of operation"
    }
}

/// Canonical admin credentials for account tests
pub struct AccountFixtures;

impl AccountFixtures {
    pub fn email() -> &'static str {
        "admin@example.com"
    }

    pub fn password() -> &'static str {
        "correct horse battery staple"
    }
}
