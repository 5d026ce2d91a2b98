//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/link`     - Create a short link (POST)
//! - `/{hash}`   - Redirect to the original URL (GET); every unmatched path
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router.
///
/// The redirect handler is installed as the fallback so that it sees the raw
/// request path, including `/` and paths containing further slashes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::link_routes())
        .fallback(redirect_handler)
        .with_state(state)
        .layer(tracing::layer())
}
