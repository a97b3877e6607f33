//! Route definitions for the public `/blog` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Routes mounted at `/blog`.
///
/// ```text
/// GET /         -> list_published (?category=)
/// GET /{slug}   -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list_published))
        .route("/{slug}", get(blog::get_by_slug))
}
