//! Claim lifecycle service
//!
//! Application service over the claim store port. Holds no state beyond the
//! injected store; every operation is a single round-trip and either succeeds
//! or returns one categorized `ClaimError`. No retries happen here; callers
//! decide whether to retry.

use std::sync::Arc;

use tracing::{debug, info};

use core_kernel::ClaimId;

use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::store::{ClaimStore, ClaimStoreError, ListPage};
use crate::submission::ClaimSubmission;

/// Service implementing the claim lifecycle operations
#[derive(Clone)]
pub struct ClaimService {
    store: Arc<dyn ClaimStore>,
}

impl ClaimService {
    /// Creates a service over the given store
    pub fn new(store: Arc<dyn ClaimStore>) -> Self {
        Self { store }
    }

    /// Validates and admits a claim submission
    ///
    /// Reports every missing field in one response. Admission is a single
    /// atomic insert; a conflicting order number fails with
    /// `DuplicateOrder`, while a conflicting idempotency key means this very
    /// submission was already admitted and the original claim is returned.
    pub async fn submit(&self, submission: ClaimSubmission) -> Result<Claim, ClaimError> {
        let new_claim = submission
            .validate()
            .map_err(|fields| ClaimError::MissingFields { fields })?;

        debug!(order_number = %new_claim.order_number, "admitting claim");
        let idempotency_key = new_claim.idempotency_key.clone();

        match self.store.insert(new_claim).await {
            Ok(claim) => {
                info!(claim_id = %claim.id, "claim admitted");
                Ok(claim)
            }
            Err(ClaimStoreError::DuplicateOrderNumber) => {
                // A retried submission collides on the order number too; the
                // idempotency key decides replay versus true duplicate.
                if let Some(key) = &idempotency_key {
                    let admitted = self
                        .store
                        .find_by_idempotency_key(key)
                        .await
                        .map_err(|err| ClaimError::storage(err.to_string()))?;
                    if let Some(claim) = admitted {
                        info!(claim_id = %claim.id, "submission replayed, returning admitted claim");
                        return Ok(claim);
                    }
                }
                Err(ClaimError::DuplicateOrder)
            }
            Err(ClaimStoreError::DuplicateIdempotencyKey) => {
                self.replay_admitted(idempotency_key).await
            }
            Err(err) => Err(ClaimError::storage(err.to_string())),
        }
    }

    /// Fetches the claim a retried submission already created
    async fn replay_admitted(&self, key: Option<String>) -> Result<Claim, ClaimError> {
        let key = key.ok_or_else(|| {
            ClaimError::storage("idempotency conflict reported for a submission without a key")
        })?;

        let claim = self
            .store
            .find_by_idempotency_key(&key)
            .await
            .map_err(|err| ClaimError::storage(err.to_string()))?
            .ok_or_else(|| {
                ClaimError::storage("idempotency conflict but no claim recorded under the key")
            })?;

        info!(claim_id = %claim.id, "submission replayed, returning admitted claim");
        Ok(claim)
    }

    /// Fetches one claim by id
    pub async fn get(&self, id: ClaimId) -> Result<Claim, ClaimError> {
        self.store
            .get(id)
            .await
            .map_err(|err| ClaimError::storage(err.to_string()))?
            .ok_or(ClaimError::NotFound(id))
    }

    /// Lists claims within the page window
    pub async fn list(&self, page: ListPage) -> Result<Vec<Claim>, ClaimError> {
        self.store
            .list(page)
            .await
            .map_err(|err| ClaimError::storage(err.to_string()))
    }

    /// Parses and applies a status change
    ///
    /// The status value must belong to the closed vocabulary; last write
    /// wins when two updates to the same claim race.
    pub async fn update_status(&self, id: ClaimId, value: &str) -> Result<Claim, ClaimError> {
        let status: ClaimStatus = value.parse().map_err(|_| ClaimError::InvalidStatus {
            value: value.to_string(),
        })?;

        let updated = self
            .store
            .update_status(id, status)
            .await
            .map_err(|err| ClaimError::storage(err.to_string()))?
            .ok_or(ClaimError::NotFound(id))?;

        info!(claim_id = %id, status = %status, "claim status updated");
        Ok(updated)
    }

    /// Probes the underlying store
    pub async fn ping(&self) -> Result<(), ClaimError> {
        self.store
            .ping()
            .await
            .map_err(|err| ClaimError::storage(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::MockClaimStore;
    use test_utils::ClaimSubmissionBuilder;

    fn service() -> ClaimService {
        ClaimService::new(Arc::new(MockClaimStore::new()))
    }

    #[tokio::test]
    async fn test_submit_admits_pending_claim() {
        let service = service();
        let submission = ClaimSubmissionBuilder::new().build();

        let claim = service.submit(submission.clone()).await.unwrap();

        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(Some(claim.order_number.clone()), submission.order_number);
        assert_eq!(claim.created_at, claim.updated_at);
    }

    #[tokio::test]
    async fn test_submit_round_trip_through_get() {
        let service = service();
        let submission = ClaimSubmissionBuilder::new()
            .order_number("ORD-7")
            .brand("Polarlux")
            .build();

        let admitted = service.submit(submission).await.unwrap();
        let fetched = service.get(admitted.id).await.unwrap();

        assert_eq!(fetched, admitted);
        assert_eq!(fetched.brand, "Polarlux");
    }

    #[tokio::test]
    async fn test_submit_reports_all_missing_fields() {
        let service = service();
        let submission = ClaimSubmission {
            order_number: Some("1".to_string()),
            ..Default::default()
        };

        let err = service.submit(submission).await.unwrap_err();
        match err {
            ClaimError::MissingFields { fields } => {
                assert_eq!(fields.len(), 6);
                assert!(fields.contains(&"email"));
                assert!(fields.contains(&"problemDescription"));
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_second_submission_with_same_order_number_is_rejected() {
        let service = service();
        let first = ClaimSubmissionBuilder::new().order_number("ORD-9").build();
        let second = ClaimSubmissionBuilder::new().order_number("ORD-9").build();

        service.submit(first).await.unwrap();
        let err = service.submit(second).await.unwrap_err();

        assert!(matches!(err, ClaimError::DuplicateOrder));

        // exactly one claim with that order number survives
        let claims = service.list(ListPage::default()).await.unwrap();
        let matching = claims.iter().filter(|c| c.order_number == "ORD-9").count();
        assert_eq!(matching, 1);
    }

    #[tokio::test]
    async fn test_retried_submission_with_idempotency_key_returns_original() {
        let service = service();
        let submission = ClaimSubmissionBuilder::new()
            .order_number("ORD-11")
            .idempotency_key("retry-token-1")
            .build();

        let first = service.submit(submission.clone()).await.unwrap();
        let replay = service.submit(submission).await.unwrap();

        assert_eq!(replay.id, first.id);
        let claims = service.list(ListPage::default()).await.unwrap();
        assert_eq!(claims.len(), 1);
    }

    #[tokio::test]
    async fn test_same_order_under_a_different_key_is_a_true_duplicate() {
        let service = service();
        let first = ClaimSubmissionBuilder::new()
            .order_number("ORD-12")
            .idempotency_key("token-a")
            .build();
        let second = ClaimSubmissionBuilder::new()
            .order_number("ORD-12")
            .idempotency_key("token-b")
            .build();

        service.submit(first).await.unwrap();
        let err = service.submit(second).await.unwrap_err();

        assert!(matches!(err, ClaimError::DuplicateOrder));
    }

    #[tokio::test]
    async fn test_get_unknown_claim_is_not_found() {
        let service = service();
        let err = service.get(ClaimId::new_v7()).await.unwrap_err();
        assert!(matches!(err, ClaimError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_status_then_get_observes_new_status() {
        let service = service();
        let claim = service
            .submit(ClaimSubmissionBuilder::new().build())
            .await
            .unwrap();

        let updated = service.update_status(claim.id, "Resolved").await.unwrap();
        assert_eq!(updated.status, ClaimStatus::Resolved);

        let fetched = service.get(claim.id).await.unwrap();
        assert_eq!(fetched.status, ClaimStatus::Resolved);
    }

    #[tokio::test]
    async fn test_update_status_rejects_values_outside_vocabulary() {
        let service = service();
        let claim = service
            .submit(ClaimSubmissionBuilder::new().build())
            .await
            .unwrap();

        let err = service.update_status(claim.id, "Escalated").await.unwrap_err();
        assert!(matches!(err, ClaimError::InvalidStatus { .. }));

        // the claim is left untouched
        let fetched = service.get(claim.id).await.unwrap();
        assert_eq!(fetched.status, ClaimStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_status_unknown_claim_is_not_found() {
        let service = service();
        let err = service
            .update_status(ClaimId::new_v7(), "Resolved")
            .await
            .unwrap_err();
        assert!(matches!(err, ClaimError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_windows_with_limit_and_offset() {
        let service = service();
        for n in 0..5 {
            service
                .submit(
                    ClaimSubmissionBuilder::new()
                        .order_number(format!("ORD-{n}"))
                        .build(),
                )
                .await
                .unwrap();
        }

        let all = service.list(ListPage::default()).await.unwrap();
        assert_eq!(all.len(), 5);

        let window = service.list(ListPage::new(2, 1)).await.unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window, all[1..3].to_vec());
    }

    #[tokio::test]
    async fn test_concurrent_submissions_admit_exactly_one_claim_per_order() {
        let service = service();
        let a = {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .submit(ClaimSubmissionBuilder::new().order_number("ORD-RACE").build())
                    .await
            })
        };
        let b = {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .submit(ClaimSubmissionBuilder::new().order_number("ORD-RACE").build())
                    .await
            })
        };

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1, "exactly one admission");

        let claims = service.list(ListPage::default()).await.unwrap();
        assert_eq!(claims.len(), 1);
    }
}
