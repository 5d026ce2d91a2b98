//! Handler for the create-link endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
};
use tracing::error;

use crate::api::dto::link::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a titled URL.
///
/// # Endpoint
///
/// `POST /link`
///
/// # Request Body
///
/// ```json
/// { "title": "My Link", "link": "https://www.google.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "link": "http://127.0.0.1/7378mDnD" }
/// ```
///
/// # Errors
///
/// - 405 for any method other than POST
/// - 500 if the body does not start with a JSON value that decodes into
///   the request (empty body, syntax error, wrong field types)
/// - 400 if the title or link is empty (title checked first)
/// - 500 if the store write fails
pub async fn create_link_handler(
    method: Method,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    // Decode failures surface as 500, not 400.
    let payload = CreateLinkRequest::decode(&body).map_err(|e| {
        error!(error = %e, "Failed to decode create-link body");
        AppError::Internal
    })?;

    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.title, payload.link)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            link: state.link_service.short_url(&link.hash),
        }),
    ))
}
