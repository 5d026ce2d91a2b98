//! Handler for short link redirects.

use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use percent_encoding::percent_decode_str;
use tracing::error;

use crate::error::{AppError, ValidationError};
use crate::state::AppState;

/// Decoded paths shorter than this (leading `/` included) carry no usable hash.
pub const MIN_PATH_LENGTH: usize = 3;

/// Redirects a hash to its original URL.
///
/// # Endpoint
///
/// `GET /{hash}` (every path not claimed by another route)
///
/// The hash is the percent-decoded request path without its leading `/`.
/// Paths of one or two bytes after decoding, such as `/` or `/%41`, are
/// rejected as empty.
///
/// # Errors
///
/// - 405 for any method other than GET
/// - 400 if the decoded path is shorter than [`MIN_PATH_LENGTH`]
/// - 404 if no link has this hash
/// - 500 on store failures, or if the stored URL cannot be sent as a
///   `Location` header
pub async fn redirect_handler(
    method: Method,
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }

    let path = percent_decode_str(uri.path()).decode_utf8_lossy();
    if path.len() < MIN_PATH_LENGTH {
        return Err(ValidationError::LinkEmpty.into());
    }

    let hash = path.strip_prefix('/').unwrap_or(&path);
    let link = state.link_service.resolve(hash).await?;

    // Stored URLs are only checked for emptiness, so they may hold bytes a
    // header cannot carry.
    let location = HeaderValue::try_from(link.original.as_str()).map_err(|e| {
        error!(hash = %hash, error = %e, "Stored URL is not a valid Location header");
        AppError::Internal
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
