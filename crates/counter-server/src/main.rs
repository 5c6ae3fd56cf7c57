//! Binary entrypoint for the counter HTTP server.
//!
//! Configuration comes from environment variables (see [`Config`]); log
//! verbosity from `RUST_LOG` (default: "info").

use tracing_subscriber::EnvFilter;

use counter_server::config::Config;
use counter_server::router::build_router;
use counter_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().expect("Failed to read configuration");

    let state = AppState::new(&config.db_path, config.busy_timeout)
        .expect("Failed to initialize application state");

    let app = build_router(state);

    let addr = config.listen_addr();
    tracing::info!(%addr, db_path = %config.db_path, "counter server starting");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server failed");
}
