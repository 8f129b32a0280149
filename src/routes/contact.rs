//! Contact-form route.
//!
//! POST /api/contact - Store the raw request body in `contact_messages`

use axum::body::Bytes;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::post;
use axum::{Extension, Router};
use tracing::info;

use super::{json_response, method_not_allowed, preflight, with_subpaths};
use crate::db::AppDb;

/// Build the contact router.
pub fn router() -> Router {
    // Submissions are stored whole, whatever their size.
    with_subpaths(
        "/api/contact",
        post(submit_contact)
            .options(preflight)
            .fallback(method_not_allowed)
            .layer(DefaultBodyLimit::disable()),
    )
}

/// Save the submission as-is.
///
/// The body is not parsed: whatever the form posts is stored verbatim.
/// A failed save is still a 200; the outcome is carried in the JSON body.
async fn submit_contact(Extension(store): Extension<AppDb>, body: Bytes) -> Response {
    let payload = String::from_utf8_lossy(&body);
    info!("Contact submission received ({} bytes)", body.len());

    let outcome = store.save_contact(&payload).await;
    json_response(StatusCode::OK, &outcome)
}
