use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use health_api::app::build_router;
use health_api::config::{port_from_env, DatabaseConfig, MiddlewareConfig};
use health_api::constants::{ENV, SERVICE};
use health_api::methods::routes::{SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH};
use health_api::shutdown::{serve_until_drained, shutdown_signal};
use health_api::state::AppState;
use health_api::telemetry::init_tracing;
use health_lib::entities::SERVICE_VERSION;
use health_lib::health_service::HealthService;
use health_lib::probe::MySqlClient;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let env = std::env::var(ENV)
        .map_err(|_| format!("{} environment variable must be set", ENV))?;

    init_tracing(&env)?;
    tracing::info!(service = SERVICE, version = SERVICE_VERSION, env = %env, "tracing initialized");

    let middleware_config = MiddlewareConfig::from_env();
    tracing::info!(
        request_timeout_secs = middleware_config.request_timeout.as_secs(),
        max_body_size = middleware_config.max_body_size,
        cors_origins = ?middleware_config.cors_allowed_origins,
        "middleware configuration loaded"
    );

    let database_config = DatabaseConfig::from_env()?;
    tracing::info!(
        connect_timeout_secs = database_config.probe.connect_timeout.as_secs(),
        "database configuration loaded"
    );

    // No connection is opened here: the service comes up even while the database is down.
    let client = MySqlClient::from_url(&database_config.url, &database_config.probe)
        .map_err(|e| format!("Invalid {}: {}", health_api::constants::DATABASE_URL, e))?;

    let app_state = AppState::new(HealthService::from_mysql(client));
    let app = build_router(app_state, &middleware_config);

    let port = port_from_env();
    let addr = format!("0.0.0.0:{}", port);
    let public_url = format!("http://127.0.0.1:{}", port);

    let listener = TcpListener::bind(&addr).await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("health-api is ready to accept requests at: {}", public_url);
    tracing::info!(
        health = %format!("{}{}", public_url, SERVICE_HEALTH_PATH),
        docs = %format!("{}{}", public_url, SERVICE_DOCS_PATH),
        "endpoints available"
    );

    let (signalled_tx, signalled_rx) = oneshot::channel();
    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(signalled_tx))
    .into_future();

    serve_until_drained(server, signalled_rx, middleware_config.shutdown_timeout)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    tracing::info!("health-api stopped");

    Ok(())
}
