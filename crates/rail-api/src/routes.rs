//! # Routes
//!
//! Axum router configuration for the payrail API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - POST /api/v1/payments - Process a one-shot payment
/// - POST /api/v1/refunds - Refund a captured charge
/// - POST /api/v1/subscriptions - Register a recurring schedule
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/payments", post(handlers::create_payment))
        .route("/refunds", post(handlers::create_refund))
        .route("/subscriptions", post(handlers::create_subscription));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
