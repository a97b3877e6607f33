//! Route definitions for the public `/tours` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tour;
use crate::state::AppState;

/// Routes mounted at `/tours`.
///
/// ```text
/// GET /      -> list (?category=&region=&featured=)
/// GET /{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tour::list))
        .route("/{id}", get(tour::get_by_id))
}
