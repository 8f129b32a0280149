//! Catalog listing routes.
//!
//! GET /api/products     - All products, ordered by id
//! GET /api/team         - All team members, ordered by id
//! GET /api/testimonials - All testimonials, ordered by id
//!
//! Sub-paths (`/api/team/`, `/api/team/x`) are served by the same handler.
//!
//! When the database is unreachable each route still answers 200 with its
//! fixed demo listing.

use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, MethodRouter};
use axum::{Extension, Router};

use super::{json_response, method_not_allowed, preflight, with_subpaths};
use crate::db::AppDb;
use crate::models::{Product, TeamMember, Testimonial};

/// Build the catalog router.
pub fn router() -> Router {
    Router::new()
        .merge(with_subpaths("/api/products", get_only(get(list_products))))
        .merge(with_subpaths("/api/team", get_only(get(list_team))))
        .merge(with_subpaths(
            "/api/testimonials",
            get_only(get(list_testimonials)),
        ))
}

// `get` would also answer HEAD, so HEAD is rejected explicitly.
fn get_only(route: MethodRouter) -> MethodRouter {
    route
        .head(method_not_allowed)
        .options(preflight)
        .fallback(method_not_allowed)
}

async fn list_products(Extension(store): Extension<AppDb>) -> Response {
    let products = store.fetch_or_fallback::<Product>().await;
    json_response(StatusCode::OK, &products)
}

async fn list_team(Extension(store): Extension<AppDb>) -> Response {
    let team = store.fetch_or_fallback::<TeamMember>().await;
    json_response(StatusCode::OK, &team)
}

async fn list_testimonials(Extension(store): Extension<AppDb>) -> Response {
    let testimonials = store.fetch_or_fallback::<Testimonial>().await;
    json_response(StatusCode::OK, &testimonials)
}
