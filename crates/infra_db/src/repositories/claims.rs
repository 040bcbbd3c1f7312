//! Claims store adapter
//!
//! Implements the claims persistence port over PostgreSQL. Admission is a
//! single INSERT; the unique indexes on `order_number` and `idempotency_key`
//! arbitrate concurrent submissions, and violations are mapped back to the
//! domain store errors by constraint name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::ClaimId;
use domain_claims::claim::{Claim, ClaimStatus};
use domain_claims::store::{ClaimStore, ClaimStoreError, ListPage, NewClaim};

use crate::error::DatabaseError;

const ORDER_NUMBER_CONSTRAINT: &str = "claims_order_number_key";
const IDEMPOTENCY_KEY_CONSTRAINT: &str = "claims_idempotency_key_key";

const CLAIM_COLUMNS: &str = "claim_id, order_number, email, name, address, phone_number, \
     brand, problem_description, status, idempotency_key, created_at, updated_at";

/// PostgreSQL-backed claim store
#[derive(Debug, Clone)]
pub struct PgClaimStore {
    pool: PgPool,
}

impl PgClaimStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Claim status as stored in the `claim_status` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "claim_status", rename_all = "snake_case")]
enum ClaimStatusRow {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl From<ClaimStatus> for ClaimStatusRow {
    fn from(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Pending => ClaimStatusRow::Pending,
            ClaimStatus::InProgress => ClaimStatusRow::InProgress,
            ClaimStatus::Resolved => ClaimStatusRow::Resolved,
            ClaimStatus::Rejected => ClaimStatusRow::Rejected,
        }
    }
}

impl From<ClaimStatusRow> for ClaimStatus {
    fn from(status: ClaimStatusRow) -> Self {
        match status {
            ClaimStatusRow::Pending => ClaimStatus::Pending,
            ClaimStatusRow::InProgress => ClaimStatus::InProgress,
            ClaimStatusRow::Resolved => ClaimStatus::Resolved,
            ClaimStatusRow::Rejected => ClaimStatus::Rejected,
        }
    }
}

/// Database row for a claim
#[derive(Debug, sqlx::FromRow)]
struct ClaimRow {
    claim_id: Uuid,
    order_number: String,
    email: String,
    name: String,
    address: String,
    phone_number: String,
    brand: String,
    problem_description: String,
    status: ClaimStatusRow,
    idempotency_key: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ClaimRow> for Claim {
    fn from(row: ClaimRow) -> Self {
        Claim {
            id: ClaimId::from_uuid(row.claim_id),
            order_number: row.order_number,
            email: row.email,
            name: row.name,
            address: row.address,
            phone_number: row.phone_number,
            brand: row.brand,
            problem_description: row.problem_description,
            status: row.status.into(),
            idempotency_key: row.idempotency_key,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_claim_error(err: DatabaseError) -> ClaimStoreError {
    match err.violated_constraint() {
        Some(ORDER_NUMBER_CONSTRAINT) => ClaimStoreError::DuplicateOrderNumber,
        Some(IDEMPOTENCY_KEY_CONSTRAINT) => ClaimStoreError::DuplicateIdempotencyKey,
        _ => ClaimStoreError::Unavailable(err.to_string()),
    }
}

#[async_trait]
impl ClaimStore for PgClaimStore {
    async fn insert(&self, claim: NewClaim) -> Result<Claim, ClaimStoreError> {
        let claim_id = ClaimId::new_v7();
        let now = Utc::now();

        let sql = format!(
            "INSERT INTO claims ({CLAIM_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11) \
             RETURNING {CLAIM_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(claim_id.as_uuid())
            .bind(&claim.order_number)
            .bind(&claim.email)
            .bind(&claim.name)
            .bind(&claim.address)
            .bind(&claim.phone_number)
            .bind(&claim.brand)
            .bind(&claim.problem_description)
            .bind(ClaimStatusRow::Pending)
            .bind(&claim.idempotency_key)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_claim_error(e.into()))?;

        Ok(row.into())
    }

    async fn get(&self, id: ClaimId) -> Result<Option<Claim>, ClaimStoreError> {
        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_id = $1");
        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_claim_error(e.into()))?;

        Ok(row.map(Claim::from))
    }

    async fn find_by_idempotency_key(
        &self,
        key: &str,
    ) -> Result<Option<Claim>, ClaimStoreError> {
        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE idempotency_key = $1");
        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_claim_error(e.into()))?;

        Ok(row.map(Claim::from))
    }

    async fn list(&self, page: ListPage) -> Result<Vec<Claim>, ClaimStoreError> {
        // NULL limit means no limit; ordering is newest-first for stable
        // pages, the contract to callers stays "insertion order not
        // guaranteed"
        let sql = format!(
            "SELECT {CLAIM_COLUMNS} FROM claims \
             ORDER BY created_at DESC, claim_id DESC \
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(page.limit.map(i64::from))
            .bind(i64::from(page.offset.unwrap_or(0)))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_claim_error(e.into()))?;

        Ok(rows.into_iter().map(Claim::from).collect())
    }

    async fn update_status(
        &self,
        id: ClaimId,
        status: ClaimStatus,
    ) -> Result<Option<Claim>, ClaimStoreError> {
        let sql = format!(
            "UPDATE claims SET status = $2, updated_at = $3 \
             WHERE claim_id = $1 \
             RETURNING {CLAIM_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(id.as_uuid())
            .bind(ClaimStatusRow::from(status))
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_claim_error(e.into()))?;

        Ok(row.map(Claim::from))
    }

    async fn ping(&self) -> Result<(), ClaimStoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_claim_error(e.into()))?;
        Ok(())
    }
}
