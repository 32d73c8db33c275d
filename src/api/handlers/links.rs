//! Handlers for link inspection and key allocation.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{LinkInfoQuery, LinkInfoResponse, RandomKeyQuery, RandomKeyResponse};
use crate::domain::entities::ROOT_KEY;
use crate::error::AppError;
use crate::state::AppState;

/// Shows what a domain and key currently resolve to.
///
/// # Endpoint
///
/// `GET /api/links/info?domain=example.com&key=promo`
///
/// Unlike the redirect route, expired links are reported (with
/// `"expired": true`) rather than rejected.
///
/// # Errors
///
/// - 400 Bad Request if the query fails validation
/// - 404 Not Found if nothing matches
pub async fn link_info_handler(
    State(state): State<AppState>,
    Query(query): Query<LinkInfoQuery>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    query.validate()?;

    let result = state
        .redirect_service
        .resolve(&query.domain, query.key.as_deref())
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                "Link not found",
                json!({
                    "domain": query.domain,
                    "key": query.key.as_deref().unwrap_or(ROOT_KEY),
                }),
            )
        })?;

    Ok(Json(LinkInfoResponse::new(&query.domain, result)))
}

/// Allocates a key that is currently unused under a domain.
///
/// # Endpoint
///
/// `GET /api/links/random?domain=example.com&prefix=campaign`
///
/// The key is not reserved; a concurrent caller may receive the same one.
///
/// # Errors
///
/// - 400 Bad Request if the query fails validation
/// - 503 Service Unavailable if no store is configured or every attempt collided
pub async fn random_key_handler(
    State(state): State<AppState>,
    Query(query): Query<RandomKeyQuery>,
) -> Result<Json<RandomKeyResponse>, AppError> {
    query.validate()?;

    let key = state
        .key_allocator
        .allocate(&query.domain, query.prefix.as_deref())
        .await?;

    Ok(Json(RandomKeyResponse {
        domain: query.domain,
        key,
    }))
}
