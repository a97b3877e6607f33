//! Route definitions for the `/admin` area.
//!
//! Every handler mounted here takes [`RequireAdmin`](crate::middleware::rbac::RequireAdmin).

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::{admin, blog, booking, contact, product, region, tour};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /users                  -> admin::list_users
/// PUT    /users/{id}             -> admin::update_user
/// PATCH  /users/{id}/role        -> admin::update_role
/// PATCH  /users/{id}/status      -> admin::update_status
///
/// POST   /regions                -> region::create
/// PUT    /regions/{id}           -> region::update
/// DELETE /regions/{id}           -> region::delete
/// POST   /tours                  -> tour::create
/// PUT    /tours/{id}             -> tour::update
/// DELETE /tours/{id}             -> tour::delete
/// POST   /products               -> product::create
/// PUT    /products/{id}          -> product::update
/// DELETE /products/{id}          -> product::delete
///
/// GET    /blog                   -> blog::list_all
/// POST   /blog                   -> blog::create
/// PUT    /blog/{id}              -> blog::update
/// DELETE /blog/{id}              -> blog::delete
///
/// GET    /contacts               -> contact::list
/// PATCH  /contacts/{id}/status   -> contact::update_status
/// GET    /bookings               -> booking::list
/// PATCH  /bookings/{id}/status   -> booking::update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}", put(admin::update_user))
        .route("/users/{id}/role", patch(admin::update_role))
        .route("/users/{id}/status", patch(admin::update_status))
        .route("/regions", post(region::create))
        .route("/regions/{id}", put(region::update).delete(region::delete))
        .route("/tours", post(tour::create))
        .route("/tours/{id}", put(tour::update).delete(tour::delete))
        .route("/products", post(product::create))
        .route("/products/{id}", put(product::update).delete(product::delete))
        .route("/blog", get(blog::list_all).post(blog::create))
        .route("/blog/{id}", put(blog::update).delete(blog::delete))
        .route("/contacts", get(contact::list))
        .route("/contacts/{id}/status", patch(contact::update_status))
        .route("/bookings", get(booking::list))
        .route("/bookings/{id}/status", patch(booking::update_status))
}
