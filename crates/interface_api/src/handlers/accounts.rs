//! Account handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::dto::accounts::*;
use crate::{error::ApiError, AppState};

/// Reports whether any account exists yet
pub async fn check_accounts(
    State(state): State<AppState>,
) -> Result<Json<ExistsResponse>, ApiError> {
    let exists = state.accounts.exists().await?;
    Ok(Json(ExistsResponse { exists }))
}

/// Creates the first admin account
pub async fn create_admin(
    State(state): State<AppState>,
    Json(request): Json<CreateAdminRequest>,
) -> Result<(StatusCode, Json<CreateAdminResponse>), ApiError> {
    let account_id = state
        .accounts
        .bootstrap(&request.email, &request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAdminResponse {
            message: "Admin account created".to_string(),
            user_id: *account_id.as_uuid(),
        }),
    ))
}

/// Verifies credentials and returns the public account profile
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let profile = state
        .accounts
        .login(&request.email, &request.password)
        .await?;
    Ok(Json(profile.into()))
}
