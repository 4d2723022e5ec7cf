//! Request/response logging middleware
//!
//! Logs method, URI and body of every request, then status and body of the
//! response. Bodies are buffered and re-attached unchanged.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

/// Matches axum's default request body limit.
const MAX_LOGGED_BODY_BYTES: usize = 2 * 1024 * 1024;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_LOGGED_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Rejecting request {} {}: {}", parts.method, parts.uri, e);
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };

    info!(
        "Request received: {} {}, body: {}",
        parts.method,
        parts.uri,
        String::from_utf8_lossy(&bytes)
    );

    let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to buffer response body: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    info!(
        "Response sent: status {}, body: {}",
        parts.status.as_u16(),
        String::from_utf8_lossy(&bytes)
    );

    Response::from_parts(parts, Body::from(bytes))
}
