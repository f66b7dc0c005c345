// API Server Binary Entry Point
//
// Usage: cargo run --bin api_server

use plant_monitor::{create_router, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // Default log level: info for our crate, warn for others
                "plant_monitor=info,tower_http=debug,axum=debug,warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:9000".to_string());

    let database_auth = std::env::var("DATABASE_AUTH").ok();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  DATABASE_URL: {}", database_url);
    tracing::info!("  DATABASE_AUTH: {}", if database_auth.is_some() { "set" } else { "unset" });
    tracing::info!("  PORT: {}", port);

    let state = AppState::new(&database_url, database_auth);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
