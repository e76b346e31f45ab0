//! Brigade Hub Server — company records backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use brigade_auth::password::PasswordHasher;
use brigade_auth::rbac::Authorizer;
use brigade_auth::revocation::DatabaseRevocationStore;
use brigade_auth::session::{Authenticator, DatabaseCredentialStore};
use brigade_auth::token::{TokenDecoder, TokenEncoder};
use brigade_core::config::AppConfig;
use brigade_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("BRIGADE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Brigade Hub v{}", env!("CARGO_PKG_VERSION"));
    let config = Arc::new(config);

    // ── Step 1: Database connection + migrations ─────────────────
    let db = brigade_database::DatabasePool::connect(&config.database).await?;
    brigade_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let account_repo = Arc::new(
        brigade_database::repositories::AccountRepository::new(db.pool().clone()),
    );
    let appointment_repo = Arc::new(
        brigade_database::repositories::AppointmentRepository::new(db.pool().clone()),
    );
    let award_repo = Arc::new(brigade_database::repositories::AwardRepository::new(
        db.pool().clone(),
    ));
    let inspection_repo = Arc::new(
        brigade_database::repositories::InspectionRepository::new(db.pool().clone()),
    );
    let revoked_token_repo = Arc::new(
        brigade_database::repositories::RevokedTokenRepository::new(db.pool().clone()),
    );
    let admin_repo = Arc::new(brigade_database::repositories::AdminRepository::new(
        db.pool().clone(),
    ));

    // ── Step 3: Auth core ────────────────────────────────────────
    tracing::info!("Initializing authentication core...");
    let hasher = PasswordHasher::new();
    let authenticator = Arc::new(Authenticator::new(
        Arc::new(DatabaseCredentialStore::new(Arc::clone(&account_repo))),
        Arc::new(DatabaseRevocationStore::new(Arc::clone(&revoked_token_repo))),
        TokenEncoder::new(&config.auth),
        TokenDecoder::new(&config.auth),
        hasher.clone(),
    ));
    let authorizer = Arc::new(Authorizer::new());

    // ── Step 4: Services ─────────────────────────────────────────
    let account_service = Arc::new(brigade_service::AccountService::new(
        Arc::clone(&account_repo),
        hasher,
        Authorizer::new(),
        config.auth.password_min_length,
    ));
    let appointment_service = Arc::new(brigade_service::AppointmentService::new(
        Arc::clone(&appointment_repo),
        Arc::clone(&account_repo),
    ));
    let award_service = Arc::new(brigade_service::AwardService::new(Arc::clone(&award_repo)));
    let inspection_service = Arc::new(brigade_service::InspectionService::new(
        Arc::clone(&inspection_repo),
        Arc::clone(&account_repo),
    ));
    let admin_service = Arc::new(brigade_service::AdminService::new(
        Arc::clone(&admin_repo),
        Arc::clone(&authenticator),
    ));

    // ── Step 5: Application state + router ───────────────────────
    let state = brigade_api::AppState {
        config: Arc::clone(&config),
        db: db.clone(),
        authenticator: Arc::clone(&authenticator),
        authorizer,
        account_service,
        appointment_service,
        award_service,
        inspection_service,
        admin_service,
    };
    let router = brigade_api::build_router(state);

    // ── Step 6: Shutdown coordination + revocation sweep ─────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let purge_handle = tokio::spawn(purge_loop(
        Arc::clone(&authenticator),
        config.revocation.purge_interval_minutes,
        shutdown_rx.clone(),
    ));

    // ── Step 7: Serve ────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    let mut serve_shutdown = shutdown_rx;
    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = serve_shutdown.changed().await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            let _ = shutdown_tx.send(true);
            let _ = purge_handle.await;
            db.close().await;
            return match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(AppError::internal(format!("Server failed: {e}"))),
                Err(e) => Err(AppError::internal(format!("Server task failed: {e}"))),
            };
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutting down");
            let _ = shutdown_tx.send(true);
        }
    }

    // In-flight requests get the configured grace period to drain.
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    match tokio::time::timeout(grace, server).await {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(e))) => return Err(AppError::internal(format!("Server failed: {e}"))),
        Ok(Err(e)) => return Err(AppError::internal(format!("Server task failed: {e}"))),
        Err(_) => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Grace period elapsed with connections still open"
            );
        }
    }

    let _ = purge_handle.await;
    db.close().await;

    Ok(())
}

/// Sweep period with a floor of one minute, so a zero in the
/// configuration cannot panic the interval timer.
fn purge_period(interval_minutes: u64) -> Duration {
    Duration::from_secs(interval_minutes.max(1) * 60)
}

/// Periodic revocation ledger sweep, stopped by the shutdown signal.
async fn purge_loop(
    authenticator: Arc<Authenticator>,
    interval_minutes: u64,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut interval = tokio::time::interval(purge_period(interval_minutes));
    // The first tick completes immediately; skip it.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = authenticator.purge_expired_tokens().await {
                    tracing::warn!("Revocation sweep failed: {e}");
                }
            }
            _ = shutdown.changed() => {
                tracing::debug!("Revocation sweep stopped");
                return;
            }
        }
    }
}

/// Completes on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purge_period_floors_zero_interval() {
        assert_eq!(purge_period(0), Duration::from_secs(60));
        assert_eq!(purge_period(1), Duration::from_secs(60));
        assert_eq!(purge_period(15), Duration::from_secs(900));
    }
}
