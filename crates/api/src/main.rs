use std::net::SocketAddr;
use std::sync::Arc;

use marquee_api::config::{AppEnv, ServerConfig};
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_api::telemetry;
use marquee_core::store::MovieStore;
use marquee_db::PgMovieStore;
use tracing::Instrument;

#[tokio::main]
async fn main() {
    // `.env` is a development convenience; production reads the real environment.
    let env_hint = std::env::var("APP_ENV").unwrap_or_default();
    let dotenv_result = if AppEnv::parse(&env_hint) == AppEnv::Production {
        None
    } else {
        Some(dotenvy::dotenv())
    };

    // --- Configuration ---
    let config = ServerConfig::from_env();

    // --- Tracing ---
    telemetry::init_tracing(&config);
    run(config, dotenv_result)
        .instrument(telemetry::service_span())
        .await;
}

async fn run(config: ServerConfig, dotenv_result: Option<dotenvy::Result<std::path::PathBuf>>) {
    match dotenv_result {
        Some(Ok(path)) => tracing::info!(path = %path.display(), ".env file loaded"),
        Some(Err(e)) => tracing::warn!(error = %e, "No .env file loaded"),
        None => {}
    }
    tracing::info!(
        host = %config.host,
        port = config.port,
        env = %config.app_env,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = marquee_db::create_pool(
        &config.database.url,
        &config.database.timezone,
        config.database.max_connections,
    )
    .await
    .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    marquee_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    marquee_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- App state ---
    let store: Arc<dyn MovieStore> = Arc::new(PgMovieStore::new(pool.clone()));
    let state = AppState::new(store, config.clone());

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("Listener has no local address");
    tracing::info!(%addr, env = %config.app_env, "Starting server");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
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
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
