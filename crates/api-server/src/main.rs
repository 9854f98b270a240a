//! API Server for Simple Task Manager
//!
//! This is the main entry point for the service. It exposes the task CRUD
//! REST API, the notification log and the health endpoints over HTTP.

mod config;
mod error;
mod routes;
mod state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::state::AppState;

fn main() {
    // Load .env before reading the environment
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Logs are an event stream: newline-delimited JSON on stdout. RUST_LOG
    // takes precedence over the LOG_LEVEL setting.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase())),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.max_workers)
        .enable_all()
        .build()
        .expect("Failed to build runtime");

    runtime.block_on(serve(config));
}

async fn serve(config: Config) {
    tracing::info!(
        app = %config.app_name,
        env = %config.app_env,
        host = %config.host,
        port = config.port,
        debug = config.is_development(),
        "Starting application"
    );

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid APP_HOST"),
        config.port,
    );

    // Create application state for the REST API
    let app_state = AppState::new(config);

    let app = Router::new()
        .merge(routes::index::router())
        .merge(routes::health::router())
        .merge(routes::task::router())
        .merge(routes::notification::router())
        .with_state(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    tracing::info!("REST API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
