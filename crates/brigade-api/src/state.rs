//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use brigade_auth::rbac::Authorizer;
use brigade_auth::session::Authenticator;
use brigade_core::config::AppConfig;
use brigade_database::DatabasePool;
use brigade_service::{
    AccountService, AdminService, AppointmentService, AwardService, InspectionService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Login/resolve/logout orchestration
    pub authenticator: Arc<Authenticator>,
    /// Role-set and hierarchy checks
    pub authorizer: Arc<Authorizer>,

    // ── Services ─────────────────────────────────────────────
    /// Account records
    pub account_service: Arc<AccountService>,
    /// Appointment roster
    pub appointment_service: Arc<AppointmentService>,
    /// Awards scheme
    pub award_service: Arc<AwardService>,
    /// Uniform inspections
    pub inspection_service: Arc<InspectionService>,
    /// Administrative maintenance
    pub admin_service: Arc<AdminService>,
}
