//! Route definitions for the public `/regions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::region;
use crate::state::AppState;

/// Routes mounted at `/regions`.
///
/// ```text
/// GET /             -> list
/// GET /{id}         -> get_by_id
/// GET /slug/{slug}  -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(region::list))
        .route("/{id}", get(region::get_by_id))
        .route("/slug/{slug}", get(region::get_by_slug))
}
