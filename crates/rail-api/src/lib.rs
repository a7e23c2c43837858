//! # rail-api
//!
//! HTTP API layer for the payrail facade.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for payments, refunds, and recurring schedules
//! - Per-request service assembly through `PaymentServiceBuilder`
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/payments` | Process a payment |
//! | POST | `/api/v1/refunds` | Refund a captured charge |
//! | POST | `/api/v1/subscriptions` | Register a recurring schedule |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
