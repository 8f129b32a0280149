//! # Bakery API
//!
//! JSON backend for the bakery storefront. Exposes the Axum router and its
//! modules so integration tests can run an in-process server.
//!
//! ## Endpoints
//!
//! | Method | Path                | Response                                 |
//! |--------|---------------------|------------------------------------------|
//! | GET    | `/api/products`     | `[{id, name, price, image}]`             |
//! | GET    | `/api/team`         | `[{id, name, role, image}]`              |
//! | GET    | `/api/testimonials` | `[{id, name, text}]`                     |
//! | POST   | `/api/contact`      | `{status, message}`, always HTTP 200     |
//! | OPTIONS| any of the above    | 204, empty body                          |

pub mod config;
pub mod db;
pub mod models;
pub mod routes;

use axum::http::{header, HeaderValue};
use axum::{Extension, Router};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::db::Store;
use crate::routes::{ALLOWED_HEADERS, ALLOWED_METHODS};

/// Build the Axum router with all route modules and middleware.
///
/// Every response, including 204 preflights and 405s, carries the
/// permissive CORS headers.
pub fn create_app(store: Store) -> Router {
    Router::new()
        .merge(routes::catalog::router())
        .merge(routes::contact::router())
        .layer(Extension(store))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
}
