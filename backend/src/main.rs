mod config;
mod db;
mod error;
mod extract;
mod handlers;
mod json_wrapper;
mod memory;
mod models;
mod repository;
mod routes;
mod schema;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::db::PgStore;
use crate::memory::InMemoryStore;
use crate::routes::{api_routes, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = AppConfig::load()?;

    tracing::info!("Starting Familiekalender backend server");

    let state = match &config.database_url {
        Some(url) => {
            let pool = db::establish_connection_pool(url, config.db_pool_size)?;
            tracing::info!("Database connection pool initialized");
            AppState::from_store(PgStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, keeping events in memory (lost on restart)");
            AppState::from_store(InMemoryStore::new())
        }
    };

    let app = create_app(&config, state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(config: &AppConfig, state: AppState) -> Router {
    let app = api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
        .with_state(state);

    // Serve static frontend files if the directory exists
    let frontend_dir = &config.frontend_dir;
    if std::path::Path::new(frontend_dir).exists() {
        tracing::info!("Serving frontend from {}", frontend_dir);
        let index_path = format!("{}/index.html", frontend_dir);
        let serve_dir = ServeDir::new(frontend_dir).not_found_service(ServeFile::new(index_path));
        app.fallback_service(serve_dir)
    } else {
        tracing::info!(
            "Frontend directory not found at {}, serving API only",
            frontend_dir
        );
        app
    }
}

/// Restrict CORS to `cors_allowed_origins` when configured, otherwise
/// allow any origin (development).
fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let Some(origins) = config.cors_origins() else {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, using permissive CORS");
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = origins.iter().filter_map(|s| s.parse().ok()).collect();
    if origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS is set but empty, using permissive CORS");
        return CorsLayer::permissive();
    }

    tracing::info!("CORS configured for origins: {:?}", origins);
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}
