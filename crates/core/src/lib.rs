//! Domain vocabulary shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds id/timestamp aliases, the
//! [`error::CoreError`] taxonomy, role names, catalog enumerations, and the
//! pure validation rules the API applies to request bodies.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod pricing;
pub mod roles;
pub mod types;
