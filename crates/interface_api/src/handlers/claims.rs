//! Claims handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use core_kernel::ClaimId;
use domain_claims::ListPage;

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Submits a new warranty claim
pub async fn submit_claim(
    State(state): State<AppState>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    debug!("received claim submission");
    let claim = state.claims.submit(request).await?;
    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Lists claims
pub async fn list_claims(
    State(state): State<AppState>,
    Query(query): Query<ListClaimsQuery>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let page = ListPage {
        limit: query.limit,
        offset: query.offset,
    };
    let claims = state.claims.list(page).await?;
    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state.claims.get(ClaimId::from_uuid(id)).await?;
    Ok(Json(claim.into()))
}

/// Updates claim status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state
        .claims
        .update_status(ClaimId::from_uuid(id), &request.status)
        .await?;
    Ok(Json(claim.into()))
}
