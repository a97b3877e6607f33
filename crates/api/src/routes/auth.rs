//! Route definitions for account and session endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes merged at the `/api` root.
///
/// ```text
/// POST /register -> register
/// POST /login    -> login
/// POST /logout   -> logout
/// GET  /user     -> current_user (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::current_user))
}
