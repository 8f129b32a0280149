//! HTTP route modules for the bakery API.
//!
//! - `catalog`: read-only listings (products, team, testimonials)
//! - `contact`: contact-form intake
//!
//! Both share the response helpers below so that every JSON body carries the
//! same content type and every route answers CORS preflights and wrong
//! methods the same way.

pub mod catalog;
pub mod contact;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::MethodRouter;
use axum::Router;
use serde::Serialize;
use tracing::error;

use crate::models::ErrorResponse;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const ALLOWED_METHODS: &str = "GET,POST,OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Mount `route` at `path` and everything below it, e.g. `/api/team/` and
/// `/api/team/anything` are served like `/api/team`.
pub fn with_subpaths(path: &str, route: MethodRouter) -> Router {
    Router::new()
        .route(path, route.clone())
        .route(&format!("{path}/"), route.clone())
        .route(&format!("{path}/{{*rest}}"), route)
}

/// Serialize `body` and send it with the given status.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// CORS preflight: 204 with no body. The CORS headers come from the router layer.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Any method a route does not serve.
pub async fn method_not_allowed() -> Response {
    json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &ErrorResponse::method_not_allowed(),
    )
}
