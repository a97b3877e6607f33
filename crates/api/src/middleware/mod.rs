//! Request extractors for identity and authorization.
//!
//! - [`auth::AuthUser`] -- the user behind a valid session cookie.
//! - [`auth::MaybeAuthUser`] -- same, but optional.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`cart::CartSession`] -- the cart key a request shops under.

pub mod auth;
pub mod cart;
pub mod rbac;
