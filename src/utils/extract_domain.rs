//! Domain extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Extracts the short-link domain from the `Host` header.
///
/// The result is lowercased, a leading `www.` is dropped, and any port is
/// stripped. IPv6 literals keep their brackets (`[::1]`).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is missing, is not
/// valid UTF-8, or is empty.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "WWW.Example.com:8080".parse().unwrap());
///
/// assert_eq!(extract_domain_from_headers(&headers).unwrap(), "example.com");
/// ```
pub fn extract_domain_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    let host = if host.starts_with('[') {
        match host.find(']') {
            Some(end_bracket) => &host[..=end_bracket],
            None => host,
        }
    } else {
        host.split(':').next().unwrap_or(host)
    };

    let domain = host.to_ascii_lowercase();
    let domain = domain.strip_prefix("www.").unwrap_or(&domain).to_string();

    if domain.is_empty() {
        return Err(AppError::bad_request("Empty Host header", json!({})));
    }

    Ok(domain)
}
