//! Checkout-bridge service - Stripe Checkout sessions over HTTP.
//!
//! This is the main entry point for the checkout-bridge service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_bridge_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,checkout_bridge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting checkout-bridge service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        stripe_configured = %config.stripe_api_key.is_some(),
        default_origin = %config.default_origin,
        locale = %config.locale,
        processor_timeout_seconds = config.processor_timeout_seconds,
        "Service configuration loaded"
    );

    // Build app state
    let state = AppState::new(config.clone());

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
