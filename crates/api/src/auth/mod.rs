//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- opaque session tokens and the session cookie.

pub mod password;
pub mod session;
