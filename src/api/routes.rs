//! API route configuration.

use crate::api::handlers::create_link_handler;
use crate::state::AppState;
use axum::{Router, routing::any};

/// Link creation route.
///
/// # Endpoints
///
/// - `POST /link` - Create a short link
///
/// The route accepts every method so that the handler can answer non-POST
/// requests with its own JSON 405 body.
pub fn link_routes() -> Router<AppState> {
    Router::new().route("/link", any(create_link_handler))
}
