use axum::routing::post;
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST /  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(booking::create))
}
