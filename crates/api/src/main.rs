use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use validator::Validate;

use innkeeper_api::auth::password;
use innkeeper_api::config::ServerConfig;
use innkeeper_api::router::build_app_router;
use innkeeper_api::state::AppState;
use innkeeper_api::background;
use innkeeper_db::availability::Reconciler;
use innkeeper_db::models::user::CreateUser;
use innkeeper_db::repositories::UserRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "innkeeper_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = innkeeper_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    innkeeper_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    innkeeper_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Admin bootstrap ---
    bootstrap_admin(&pool).await;

    // --- Availability reconciler ---
    let reconciler = Arc::new(Reconciler::new(pool.clone()));

    // Reconcile once at startup so flags are correct before the first
    // request; the process may have been down across a date rollover.
    let today = chrono::Utc::now().date_naive();
    match reconciler.run(today).await {
        Ok(summary) => tracing::info!(
            date = %summary.date,
            rooms = summary.rooms,
            changed = summary.changed,
            "Startup availability reconciliation complete"
        ),
        Err(e) => tracing::error!(error = %e, "Startup availability reconciliation failed"),
    }

    // --- Background sweep ---
    let sweep_cancel = tokio_util::sync::CancellationToken::new();
    let sweep_handle = tokio::spawn(background::availability_sweep::run(
        Arc::clone(&reconciler),
        config.availability_sweep_secs,
        sweep_cancel.clone(),
    ));

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        reconciler,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    sweep_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), sweep_handle).await;
    tracing::info!("Availability sweep stopped");

    tracing::info!("Graceful shutdown complete");
}

/// Create the initial admin account when the users table is empty.
///
/// Credentials come from `ADMIN_USERNAME` / `ADMIN_PASSWORD`
/// (defaults `admin` / no default for the password). If the password is
/// not set and no users exist, the server refuses to start rather than
/// ship a well-known credential. The credentials go through the same
/// [`CreateUser`] validation as any other account, so a too-short
/// password also aborts startup.
async fn bootstrap_admin(pool: &innkeeper_db::DbPool) {
    let count = UserRepo::count(pool)
        .await
        .expect("Failed to count user accounts");
    if count > 0 {
        return;
    }

    let input = CreateUser {
        username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
        email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost.local".into()),
        password: std::env::var("ADMIN_PASSWORD")
            .expect("ADMIN_PASSWORD must be set when no user accounts exist"),
        role: Some("admin".into()),
    };
    input
        .validate()
        .expect("Admin bootstrap credentials are invalid");

    let hash = password::hash_password(&input.password).expect("Failed to hash admin password");
    let role = input.role.as_deref().unwrap_or("staff");
    UserRepo::create(pool, &input.username, &input.email, &hash, role)
        .await
        .expect("Failed to create admin account");
    tracing::info!(username = %input.username, "Created initial admin account");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl-C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
