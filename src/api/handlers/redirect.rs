//! Handlers for root and keyed redirects.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Redirect,
};
use serde_json::json;

use crate::domain::entities::ROOT_KEY;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_domain::extract_domain_from_headers;

/// Redirects the bare domain to its configured target.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// - 400 Bad Request if the Host header is missing or invalid
/// - 404 Not Found if the domain is unknown or has no target
pub async fn root_redirect_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    let domain = extract_domain_from_headers(&headers)?;
    redirect(&state, &domain, None).await
}

/// Redirects a short key to its destination URL.
///
/// # Endpoint
///
/// `GET /{*key}`
///
/// The key is the whole path after the first `/`, percent-decoded, so keys
/// with a prefix (`campaign/abc`) and non-ASCII keys resolve as stored.
///
/// # Errors
///
/// - 400 Bad Request if the Host header is missing or invalid
/// - 404 Not Found if no link matches
/// - 410 Gone if the link has expired
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    let domain = extract_domain_from_headers(&headers)?;
    redirect(&state, &domain, Some(&key)).await
}

async fn redirect(state: &AppState, domain: &str, key: Option<&str>) -> Result<Redirect, AppError> {
    let reported_key = key.unwrap_or(ROOT_KEY);

    let result = state
        .redirect_service
        .resolve(domain, key)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                "Link not found",
                json!({ "domain": domain, "key": reported_key }),
            )
        })?;

    if result.is_expired() {
        return Err(AppError::gone(
            "Link has expired",
            json!({ "domain": domain, "key": result.key }),
        ));
    }

    let url = result.url.ok_or_else(|| {
        AppError::not_found(
            "Domain has no redirect target",
            json!({ "domain": domain }),
        )
    })?;

    Ok(Redirect::temporary(&url))
}
