//! Claim store port
//!
//! The `ClaimStore` trait defines everything the claim lifecycle needs from
//! its persistence collaborator. The Postgres adapter lives in the database
//! infrastructure crate; an in-memory mock lives here for tests.
//!
//! Uniqueness of order numbers and idempotency keys is the *store's*
//! responsibility: admission must be a single atomic insert, never an
//! application-level existence check followed by a write, so that concurrent
//! submissions of the same order number produce exactly one claim.

use async_trait::async_trait;
use thiserror::Error;

use core_kernel::ClaimId;

use crate::claim::{Claim, ClaimStatus};

/// Validated data for admitting a new claim
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub order_number: String,
    pub email: String,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub brand: String,
    pub problem_description: String,
    pub idempotency_key: Option<String>,
}

/// Pagination window for listing claims
///
/// Both bounds are optional; the default window returns every claim, which
/// is the historical behavior of the administrator UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPage {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListPage {
    /// Creates a bounded window
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Errors a claim store implementation may report
#[derive(Debug, Error)]
pub enum ClaimStoreError {
    /// Unique-index conflict on the order number
    #[error("order number already claimed")]
    DuplicateOrderNumber,

    /// Unique-index conflict on the idempotency key: the same submission
    /// was already admitted
    #[error("idempotency key already used")]
    DuplicateIdempotencyKey,

    /// The store could not be reached or failed unexpectedly
    #[error("claim store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence port for warranty claims
#[async_trait]
pub trait ClaimStore: Send + Sync {
    /// Atomically admits a new claim with status `Pending`, assigning its
    /// identifier and timestamps
    async fn insert(&self, claim: NewClaim) -> Result<Claim, ClaimStoreError>;

    /// Fetches one claim by id
    async fn get(&self, id: ClaimId) -> Result<Option<Claim>, ClaimStoreError>;

    /// Fetches the claim previously admitted under an idempotency key
    async fn find_by_idempotency_key(&self, key: &str)
        -> Result<Option<Claim>, ClaimStoreError>;

    /// Lists claims within the page window; insertion order not guaranteed
    async fn list(&self, page: ListPage) -> Result<Vec<Claim>, ClaimStoreError>;

    /// Atomically sets the status of one claim, returning the updated record
    /// or `None` if the id is unknown
    async fn update_status(
        &self,
        id: ClaimId,
        status: ClaimStatus,
    ) -> Result<Option<Claim>, ClaimStoreError>;

    /// Round-trip probe used by readiness checks
    async fn ping(&self) -> Result<(), ClaimStoreError>;
}

/// In-memory mock implementation of `ClaimStore`
///
/// Enforces the same uniqueness rules as the real schema, under a single
/// lock so concurrent inserts race the way they do against the database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory claim store for tests
    #[derive(Debug, Default, Clone)]
    pub struct MockClaimStore {
        claims: Arc<RwLock<HashMap<ClaimId, Claim>>>,
    }

    impl MockClaimStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl ClaimStore for MockClaimStore {
        async fn insert(&self, claim: NewClaim) -> Result<Claim, ClaimStoreError> {
            let mut claims = self.claims.write().await;

            if claims
                .values()
                .any(|existing| existing.order_number == claim.order_number)
            {
                return Err(ClaimStoreError::DuplicateOrderNumber);
            }
            if let Some(ref key) = claim.idempotency_key {
                if claims
                    .values()
                    .any(|existing| existing.idempotency_key.as_deref() == Some(key.as_str()))
                {
                    return Err(ClaimStoreError::DuplicateIdempotencyKey);
                }
            }

            let now = Utc::now();
            let admitted = Claim {
                id: ClaimId::new_v7(),
                order_number: claim.order_number,
                email: claim.email,
                name: claim.name,
                address: claim.address,
                phone_number: claim.phone_number,
                brand: claim.brand,
                problem_description: claim.problem_description,
                status: ClaimStatus::Pending,
                idempotency_key: claim.idempotency_key,
                created_at: now,
                updated_at: now,
            };
            claims.insert(admitted.id, admitted.clone());
            Ok(admitted)
        }

        async fn get(&self, id: ClaimId) -> Result<Option<Claim>, ClaimStoreError> {
            Ok(self.claims.read().await.get(&id).cloned())
        }

        async fn find_by_idempotency_key(
            &self,
            key: &str,
        ) -> Result<Option<Claim>, ClaimStoreError> {
            Ok(self
                .claims
                .read()
                .await
                .values()
                .find(|claim| claim.idempotency_key.as_deref() == Some(key))
                .cloned())
        }

        async fn list(&self, page: ListPage) -> Result<Vec<Claim>, ClaimStoreError> {
            let claims = self.claims.read().await;
            let mut results: Vec<_> = claims.values().cloned().collect();
            // newest first; id as tie-break keeps pages stable
            results.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.as_uuid().cmp(a.id.as_uuid()))
            });

            let offset = page.offset.unwrap_or(0) as usize;
            let results = results.into_iter().skip(offset);
            Ok(match page.limit {
                Some(limit) => results.take(limit as usize).collect(),
                None => results.collect(),
            })
        }

        async fn update_status(
            &self,
            id: ClaimId,
            status: ClaimStatus,
        ) -> Result<Option<Claim>, ClaimStoreError> {
            let mut claims = self.claims.write().await;
            Ok(claims.get_mut(&id).map(|claim| {
                claim.set_status(status);
                claim.clone()
            }))
        }

        async fn ping(&self) -> Result<(), ClaimStoreError> {
            Ok(())
        }
    }
}
