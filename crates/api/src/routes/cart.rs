//! Route definitions for the `/cart` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::cart;
use crate::state::AppState;

/// Routes mounted at `/cart`. All require a cart session (signed-in user or
/// `X-Session-Id` header).
///
/// ```text
/// GET    /      -> list
/// POST   /      -> add
/// DELETE /      -> clear
/// PUT    /{id}  -> update
/// DELETE /{id}  -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::list).post(cart::add).delete(cart::clear))
        .route("/{id}", put(cart::update).delete(cart::remove))
}
