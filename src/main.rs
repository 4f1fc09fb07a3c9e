//! ArchiCanvas Payment Service - Main Application Entry Point
//!
//! This is the payment/order core of the ArchiCanvas art marketplace: a
//! REST API that mints gateway orders for single-item and cart checkouts,
//! verifies gateway payment signatures, and records the resulting orders.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Gateway**: Razorpay orders API over reqwest
//! - **Authentication**: Bearer tokens with SHA-256 hashing
//! - **Format**: JSON requests/responses (camelCase on the wire)
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables (gateway credentials
//!    are validated here — a blank secret aborts boot)
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;

use tracing_subscriber::EnvFilter;

use axum::{
    Router,
    extract::FromRef,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::gateway::GatewayClient;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: db::DbPool,
    pub gateway: GatewayClient,
}

// Lets the auth middleware extract State<DbPool> directly.
impl FromRef<AppState> for db::DbPool {
    fn from_ref(state: &AppState) -> db::DbPool {
        state.pool.clone()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration (includes gateway credential validation)
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Build the gateway client once; it is cheap to clone
    let gateway = GatewayClient::new(&config)?;
    let state = AppState { pool, gateway };

    // Payment routes - every endpoint requires an authenticated user
    let payment_routes = Router::new()
        .route("/payment/razorpaykey", get(handlers::payments::send_gateway_key))
        .route("/payment/process", post(handlers::payments::process_payment))
        .route("/payment/order", post(handlers::payments::create_order))
        .route(
            "/payment/process-cart",
            post(handlers::payments::process_cart_payment),
        )
        .route(
            "/payment/verify-cart",
            post(handlers::payments::verify_cart_payment),
        )
        .route("/payment/stats", get(handlers::orders::get_order_stats))
        .route("/payment/my-artworks", get(handlers::orders::get_my_artworks))
        .route("/payment/my-orders", get(handlers::orders::get_my_orders))
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    // Combine authenticated routes with public routes
    let app = Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        // Merge authenticated routes
        .merge(payment_routes)
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // The browser frontend is served from a different origin
        .layer(CorsLayer::permissive())
        // Share state with all handlers via State extraction
        .with_state(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
