//! Route definitions for the Brigade Hub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use brigade_core::config::server::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(account_routes())
        .merge(appointment_routes())
        .merge(award_routes())
        .merge(inspection_routes())
        .merge(admin_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, logout, session probe, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/session", get(handlers::auth::session))
        .route("/auth/me", get(handlers::auth::me))
}

/// Account record endpoints
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(handlers::account::get_accounts))
        .route("/accounts", post(handlers::account::create_account))
        .route("/accounts/graduated", get(handlers::account::list_graduated))
        .route(
            "/accounts/by-role/{role}",
            get(handlers::account::list_by_role),
        )
        .route(
            "/accounts/me/credentials",
            put(handlers::account::update_credentials),
        )
        .route("/accounts/{id}", get(handlers::account::get_account))
        .route("/accounts/{id}", put(handlers::account::update_account))
        .route("/accounts/{id}", delete(handlers::account::delete_account))
}

/// Appointment roster endpoints
fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(handlers::appointment::list))
        .route("/appointments", post(handlers::appointment::create))
        .route("/appointments/{id}", put(handlers::appointment::reassign))
        .route("/appointments/{id}", delete(handlers::appointment::delete))
}

/// Awards scheme endpoints
fn award_routes() -> Router<AppState> {
    Router::new().route("/awards", get(handlers::award::list))
}

/// Uniform inspection endpoints
fn inspection_routes() -> Router<AppState> {
    Router::new().route("/inspections/summary", get(handlers::inspection::summary))
}

/// Administrative endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/tables", get(handlers::admin::list_tables))
        .route(
            "/admin/tokens/expired",
            delete(handlers::admin::purge_expired_tokens),
        )
}

/// Health endpoints (no auth)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Builds the CORS layer from configuration. A literal `"*"` in any list
/// opens that dimension fully (development only).
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: AllowOrigin = if config.allowed_origins.iter().any(|o| o == "*") {
        Any.into()
    } else {
        config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>()
            .into()
    };

    let methods: AllowMethods = if config.allowed_methods.iter().any(|m| m == "*") {
        Any.into()
    } else {
        config
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse::<Method>().ok())
            .collect::<Vec<_>>()
            .into()
    };

    let headers: AllowHeaders = if config.allowed_headers.iter().any(|h| h == "*") {
        Any.into()
    } else {
        config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect::<Vec<axum::http::HeaderName>>()
            .into()
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
