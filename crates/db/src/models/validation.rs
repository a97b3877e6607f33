//! Adapters exposing `kartuli_core` rules as `validator` custom functions.

use std::borrow::Cow;

use kartuli_core::error::CoreError;
use kartuli_core::{cart, catalog, pricing, roles};
use validator::ValidationError;

fn from_core(code: &'static str, result: Result<(), CoreError>) -> Result<(), ValidationError> {
    result.map_err(|err| {
        let message = match err {
            CoreError::Validation(msg) => msg,
            other => other.to_string(),
        };
        let mut error = ValidationError::new(code);
        error.message = Some(Cow::Owned(message));
        error
    })
}

pub fn price(value: &str) -> Result<(), ValidationError> {
    from_core("price", pricing::validate_price(value))
}

pub fn slug(value: &str) -> Result<(), ValidationError> {
    from_core("slug", catalog::validate_slug(value))
}

pub fn tour_category(value: &str) -> Result<(), ValidationError> {
    from_core("category", catalog::validate_tour_category(value))
}

pub fn product_category(value: &str) -> Result<(), ValidationError> {
    from_core("category", catalog::validate_product_category(value))
}

pub fn contact_status(value: &str) -> Result<(), ValidationError> {
    from_core("status", catalog::validate_contact_status(value))
}

pub fn booking_status(value: &str) -> Result<(), ValidationError> {
    from_core("status", catalog::validate_booking_status(value))
}

pub fn quantity<T: std::borrow::Borrow<i32>>(value: T) -> Result<(), ValidationError> {
    from_core("quantity", cart::validate_quantity(*value.borrow()))
}

pub fn role(value: &str) -> Result<(), ValidationError> {
    if roles::is_valid_role(value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("role");
        error.message = Some(Cow::Owned(format!(
            "Invalid role '{value}'. Must be one of: {}",
            roles::VALID_ROLES.join(", ")
        )));
        Err(error)
    }
}
