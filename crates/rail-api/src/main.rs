//! # Payrail
//!
//! Payment-orchestration facade.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides
//! export HOST=0.0.0.0
//! export PORT=8080
//! export CARD_GATEWAY_MERCHANT_ID=acct_...
//!
//! # Run the server
//! payrail
//! ```

use rail_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::new();

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("SMS gateway: {}", state.channels.sms_gateway);

    let app = routes::create_router(state);

    info!("🚂 Payrail starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("💳 Payments: POST http://{}/api/v1/payments", addr);
        info!("↩️  Refunds: POST http://{}/api/v1/refunds", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🚂 Payrail RS 🚂
  ━━━━━━━━━━━━━━━━━
  Payment orchestration facade
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
