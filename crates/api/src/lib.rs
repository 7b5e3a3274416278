//! # WhenMeet API
//!
//! The API crate provides the web server for the WhenMeet availability poll.
//! It exposes the three flows of the tool (browse events, create an event,
//! respond to an event) as JSON endpoints.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into `PollService` calls
//! - **Middleware**: Error mapping shared by every endpoint
//! - **Config**: Environment-driven configuration
//!
//! Storage is whatever `EventStore` the service was built with; the server
//! itself never touches a database directly.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;
use whenmeet_core::service::PollService;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Poll operations over the configured event store
    pub service: PollService,
}

/// Builds the application router with all routes attached to `state`
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Event management endpoints
        .merge(routes::event::routes())
        // Availability endpoints
        .merge(routes::availability::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and poll service
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `service` - Poll service, with or without a backing store
pub async fn start_server(config: config::ApiConfig, service: PollService) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if !service.is_configured() {
        warn!("No database configured; events cannot be created or answered");
    }

    let app = router(Arc::new(ApiState { service }));

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed: Vec<axum::http::HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<axum::http::HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            )),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
