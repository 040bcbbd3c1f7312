//! HTTP API Layer
//!
//! This crate provides the REST API for the warranty core system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: request handlers for claims, accounts, and health
//! - **DTOs**: request/response data transfer objects (camelCase wire form)
//! - **Error Handling**: one place translating domain errors to status codes
//! - **Middleware**: request logging, panic containment, CORS
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use domain_accounts::AccountService;
use domain_claims::ClaimService;

use crate::config::ApiConfig;
use crate::handlers::{accounts, claims, health};
use crate::middleware::request_log;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub claims: ClaimService,
    pub accounts: AccountService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// Claim and account routes are JSON; every other path serves static assets
/// with an `index.html` fallback when a static root is configured.
pub fn create_router(state: AppState) -> Router {
    let claim_routes = Router::new()
        .route("/", post(claims::submit_claim).get(claims::list_claims))
        .route("/:id", get(claims::get_claim).patch(claims::update_status));

    let router = Router::new()
        .route("/api/users/check", get(accounts::check_accounts))
        .route("/api/admin/create", post(accounts::create_admin))
        .route("/api/login", post(accounts::login))
        .nest("/api/claims", claim_routes)
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let router = match &state.config.static_dir {
        Some(dir) => {
            let index = std::path::Path::new(dir).join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router
        .layer(axum_middleware::from_fn(request_log))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
