pub mod admin;
pub mod auth;
pub mod blog;
pub mod booking;
pub mod cart;
pub mod contact;
pub mod health;
pub mod product;
pub mod region;
pub mod tour;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register                                        register (public)
/// /login                                           login (public)
/// /logout                                          logout (public, idempotent)
/// /user                                            current identity (auth)
///
/// /regions                                         list
/// /regions/{id}                                    get
/// /regions/slug/{slug}                             get by slug
/// /tours                                           list (?category, region, featured)
/// /tours/{id}                                      get
/// /products                                        list (?category, featured)
/// /products/{id}                                   get
/// /blog                                            list published (?category)
/// /blog/{slug}                                     get published
///
/// /contact                                         submit (POST)
/// /bookings                                        create (POST)
///
/// /cart                                            list, add, clear (cart session)
/// /cart/{id}                                       update quantity, remove
///
/// /admin/users                                     list (admin only)
/// /admin/users/{id}                                update
/// /admin/users/{id}/role                           change role (PATCH)
/// /admin/users/{id}/status                         activate/deactivate (PATCH)
/// /admin/regions                                   create
/// /admin/regions/{id}                              update, delete
/// /admin/tours                                     create
/// /admin/tours/{id}                                update, delete
/// /admin/products                                  create
/// /admin/products/{id}                             update, delete
/// /admin/blog                                      list all, create
/// /admin/blog/{id}                                 update, delete
/// /admin/contacts                                  list
/// /admin/contacts/{id}/status                      change status (PATCH)
/// /admin/bookings                                  list
/// /admin/bookings/{id}/status                      change status (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/regions", region::router())
        .nest("/tours", tour::router())
        .nest("/products", product::router())
        .nest("/blog", blog::router())
        .nest("/contact", contact::router())
        .nest("/bookings", booking::router())
        .nest("/cart", cart::router())
        .nest("/admin", admin::router())
}
