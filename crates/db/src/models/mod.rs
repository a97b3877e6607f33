//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! JSON field names are camelCase; translated text fields follow the
//! `field` / `fieldKa` / `fieldRu` convention.

pub mod blog_post;
pub mod booking;
pub mod cart_item;
pub mod contact;
pub mod product;
pub mod region;
pub mod session;
pub mod tour;
pub mod user;
pub mod validation;
