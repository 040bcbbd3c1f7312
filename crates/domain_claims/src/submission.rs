//! Claim submission validation
//!
//! A submission is checked field by field and every missing field is reported
//! in a single response, so the customer can fix the whole form at once
//! rather than resubmitting once per error.

use serde::Deserialize;

use crate::store::NewClaim;

/// Raw claim submission as received from the customer
///
/// Every field is optional at this level; `validate` decides what is missing.
/// Field names reported back to the caller use the wire spelling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSubmission {
    pub order_number: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub brand: Option<String>,
    pub problem_description: Option<String>,
    /// Optional retry token; submissions carrying the same key are admitted
    /// at most once
    pub idempotency_key: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

impl ClaimSubmission {
    /// Validates the submission, collecting all missing required fields
    ///
    /// Returns the admitted claim data on success, or the wire names of
    /// every missing or blank required field.
    pub fn validate(self) -> Result<NewClaim, Vec<&'static str>> {
        let mut missing = Vec::new();

        if is_blank(&self.order_number) {
            missing.push("orderNumber");
        }
        if is_blank(&self.email) {
            missing.push("email");
        }
        if is_blank(&self.name) {
            missing.push("name");
        }
        if is_blank(&self.address) {
            missing.push("address");
        }
        if is_blank(&self.phone_number) {
            missing.push("phoneNumber");
        }
        if is_blank(&self.brand) {
            missing.push("brand");
        }
        if is_blank(&self.problem_description) {
            missing.push("problemDescription");
        }

        if !missing.is_empty() {
            return Err(missing);
        }

        // All required fields are known non-blank here; destructure so a
        // newly added field cannot be dropped silently.
        let ClaimSubmission {
            order_number,
            email,
            name,
            address,
            phone_number,
            brand,
            problem_description,
            idempotency_key,
        } = self;

        Ok(NewClaim {
            order_number: order_number.unwrap_or_default(),
            email: email.unwrap_or_default(),
            name: name.unwrap_or_default(),
            address: address.unwrap_or_default(),
            phone_number: phone_number.unwrap_or_default(),
            brand: brand.unwrap_or_default(),
            problem_description: problem_description.unwrap_or_default(),
            idempotency_key: idempotency_key.filter(|key| !key.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn complete() -> ClaimSubmission {
        ClaimSubmission {
            order_number: Some("ORD-1001".to_string()),
            email: Some("kim@example.com".to_string()),
            name: Some("Kim Falk".to_string()),
            address: Some("12 Harbour Road".to_string()),
            phone_number: Some("+45 5555 1234".to_string()),
            brand: Some("Nordfrost".to_string()),
            problem_description: Some("Compressor rattles on start".to_string()),
            idempotency_key: None,
        }
    }

    #[test]
    fn test_complete_submission_is_valid() {
        let new_claim = complete().validate().unwrap();
        assert_eq!(new_claim.order_number, "ORD-1001");
        assert_eq!(new_claim.brand, "Nordfrost");
    }

    #[test]
    fn test_all_missing_fields_are_reported_together() {
        let submission = ClaimSubmission {
            order_number: Some("1".to_string()),
            ..Default::default()
        };

        let missing = submission.validate().unwrap_err();
        assert_eq!(
            missing,
            vec![
                "email",
                "name",
                "address",
                "phoneNumber",
                "brand",
                "problemDescription"
            ]
        );
    }

    #[test]
    fn test_blank_string_counts_as_missing() {
        let mut submission = complete();
        submission.email = Some("   ".to_string());

        let missing = submission.validate().unwrap_err();
        assert_eq!(missing, vec!["email"]);
    }

    #[test]
    fn test_blank_idempotency_key_is_dropped() {
        let mut submission = complete();
        submission.idempotency_key = Some("".to_string());

        let new_claim = submission.validate().unwrap();
        assert!(new_claim.idempotency_key.is_none());
    }

    proptest! {
        /// Whatever subset of fields is blanked out, every one of them is
        /// named in the error and nothing else is.
        #[test]
        fn prop_missing_report_is_exhaustive(mask in proptest::collection::vec(any::<bool>(), 7)) {
            let mut submission = complete();
            let wire_names = [
                "orderNumber",
                "email",
                "name",
                "address",
                "phoneNumber",
                "brand",
                "problemDescription",
            ];
            let slots: [&mut Option<String>; 7] = [
                &mut submission.order_number,
                &mut submission.email,
                &mut submission.name,
                &mut submission.address,
                &mut submission.phone_number,
                &mut submission.brand,
                &mut submission.problem_description,
            ];

            let mut expected = Vec::new();
            for ((blank, slot), wire_name) in mask.iter().zip(slots).zip(wire_names) {
                if *blank {
                    *slot = None;
                    expected.push(wire_name);
                }
            }

            match submission.validate() {
                Ok(_) => prop_assert!(expected.is_empty()),
                Err(missing) => prop_assert_eq!(missing, expected),
            }
        }
    }
}
