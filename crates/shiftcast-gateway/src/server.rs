// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use shiftcast_core::ShiftcastError;
use shiftcast_engine::AppContext;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The wired-up engine.
    pub ctx: Arc<AppContext>,
    /// Process start time for uptime reporting.
    pub started_at: std::time::Instant,
}

impl GatewayState {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            ctx,
            started_at: std::time::Instant::now(),
        }
    }
}

/// Gateway server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the gateway router.
///
/// Exposed separately from [`start_server`] so tests can drive the router
/// in-process without binding a socket.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/shifts/{shift_id}/fanout", post(handlers::post_fanout))
        .route("/messages/inbound", post(handlers::post_inbound))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
) -> Result<(), ShiftcastError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ShiftcastError::Gateway {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| ShiftcastError::Gateway {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
